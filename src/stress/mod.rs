//! Synthetic-load benchmark harness.
//!
//! Generates random batches of increasing size, runs FCFS and SJF on
//! independent copies of each batch, and records wall-clock running time
//! alongside schedule quality. Its purpose is to make the O(n log n) vs
//! O(n²) gap visible, not to check correctness.
//!
//! # Workload
//!
//! For a batch of size `n`: pids `P1..Pn`, arrival uniform in `[0, n/2]`,
//! burst uniform in `[1, max_burst]` (default 20).
//!
//! # Reproducibility
//!
//! Generation uses OS entropy unless [`StressConfig::with_seed`] is set.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::stress::{StressConfig, StressHarness};
//!
//! let config = StressConfig::default().with_sizes(vec![10, 50]).with_seed(42);
//! let report = StressHarness::new(config).run();
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.results()[1].size, 50);
//! ```

mod config;
mod harness;

pub use config::StressConfig;
pub use harness::{generate_processes, StressHarness, StressReport, StressResult};

/// Runs the harness over `sizes` with default settings and OS entropy.
pub fn run(sizes: &[usize]) -> StressReport {
    StressHarness::new(StressConfig::default().with_sizes(sizes.to_vec())).run()
}
