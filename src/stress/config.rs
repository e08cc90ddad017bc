//! Stress harness configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::dispatching::SelectionStrategy;

/// Default batch sizes, smallest first.
pub const DEFAULT_SIZES: [usize; 4] = [100, 500, 1000, 2000];

/// Default upper bound for generated burst times.
pub const DEFAULT_MAX_BURST: i64 = 20;

/// Stress run settings.
///
/// Missing fields fall back to their defaults when deserialized:
///
/// ```
/// use u_cpu_schedule::stress::StressConfig;
///
/// let config: StressConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.sizes, vec![100, 500, 1000, 2000]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressConfig {
    /// Batch sizes, run in order.
    pub sizes: Vec<usize>,
    /// RNG seed. `None` = OS entropy.
    pub seed: Option<u64>,
    /// Largest generated burst time (inclusive).
    pub max_burst: i64,
    /// Ready-queue strategy for the SJF run.
    pub sjf_strategy: SelectionStrategy,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            seed: None,
            max_burst: DEFAULT_MAX_BURST,
            sjf_strategy: SelectionStrategy::LinearScan,
        }
    }
}

impl StressConfig {
    /// Sets the batch sizes.
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Makes generation deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the largest generated burst time. Values below 1 are raised to 1.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the SJF ready-queue strategy.
    pub fn with_sjf_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.sjf_strategy = strategy;
        self
    }

    /// Creates the run's random number generator.
    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
