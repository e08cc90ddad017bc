//! Stress runs and their report.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::StressConfig;
use crate::models::{Algorithm, Process};
use crate::scheduler::{Fcfs, Metrics, Scheduler, Sjf};

/// Generates `n` unscheduled processes.
///
/// pids are `P1..Pn`; arrival is uniform in `[0, n/2]`, burst uniform in
/// `[1, max_burst]`.
pub fn generate_processes<R: Rng + ?Sized>(n: usize, max_burst: i64, rng: &mut R) -> Vec<Process> {
    let max_arrival = (n / 2) as i64;
    let max_burst = max_burst.max(1);
    (0..n)
        .map(|i| {
            Process::new(
                format!("P{}", i + 1),
                rng.random_range(0..=max_arrival),
                rng.random_range(1..=max_burst),
            )
        })
        .collect()
}

/// Outcome of one batch size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressResult {
    /// Batch size.
    pub size: usize,
    /// FCFS wall-clock running time.
    pub fcfs_duration: Duration,
    /// SJF wall-clock running time.
    pub sjf_duration: Duration,
    /// FCFS mean waiting time.
    pub fcfs_avg_waiting: f64,
    /// SJF mean waiting time.
    pub sjf_avg_waiting: f64,
    /// FCFS mean turnaround time.
    pub fcfs_avg_turnaround: f64,
    /// SJF mean turnaround time.
    pub sjf_avg_turnaround: f64,
    /// Algorithm with the shorter running time; FCFS on ties.
    pub faster: Algorithm,
}

impl StressResult {
    fn new(size: usize, fcfs: (Duration, Metrics), sjf: (Duration, Metrics)) -> Self {
        let faster = if fcfs.0 <= sjf.0 {
            Algorithm::Fcfs
        } else {
            Algorithm::Sjf
        };
        Self {
            size,
            fcfs_duration: fcfs.0,
            sjf_duration: sjf.0,
            fcfs_avg_waiting: fcfs.1.avg_waiting_time,
            sjf_avg_waiting: sjf.1.avg_waiting_time,
            fcfs_avg_turnaround: fcfs.1.avg_turnaround_time,
            sjf_avg_turnaround: sjf.1.avg_turnaround_time,
            faster,
        }
    }
}

/// Per-size results in run order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StressReport {
    results: Vec<StressResult>,
}

impl StressReport {
    /// All results in run order.
    pub fn results(&self) -> &[StressResult] {
        &self.results
    }

    /// Number of sizes run.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no size was run.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// How many sizes `algorithm` ran faster on.
    pub fn wins(&self, algorithm: Algorithm) -> usize {
        self.results
            .iter()
            .filter(|r| r.faster == algorithm)
            .count()
    }
}

/// Runs FCFS and SJF over synthetic batches.
#[derive(Debug, Clone, Default)]
pub struct StressHarness {
    config: StressConfig,
}

impl StressHarness {
    /// Creates a harness.
    pub fn new(config: StressConfig) -> Self {
        Self { config }
    }

    /// The harness configuration.
    pub fn config(&self) -> &StressConfig {
        &self.config
    }

    /// Runs every configured size in order with one RNG.
    pub fn run(&self) -> StressReport {
        let mut rng = self.config.rng();
        log::info!(
            "stress: {} sizes (seed: {:?}, sjf: {})",
            self.config.sizes.len(),
            self.config.seed,
            self.config.sjf_strategy.name()
        );

        let results = self
            .config
            .sizes
            .iter()
            .map(|&n| self.run_size(n, &mut rng))
            .collect();

        StressReport { results }
    }

    /// Generates one batch of `n` processes and times both schedulers on it.
    pub fn run_size<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> StressResult {
        let batch = generate_processes(n, self.config.max_burst, rng);
        let sjf = Sjf::new().with_strategy(self.config.sjf_strategy);

        let fcfs_run = timed(&Fcfs::new(), batch.clone());
        let sjf_run = timed(&sjf, batch);
        let result = StressResult::new(n, fcfs_run, sjf_run);

        log::info!(
            "stress n={}: FCFS {:?} (avg WT {:.2}, avg TAT {:.2}) | SJF {:?} (avg WT {:.2}, avg TAT {:.2}) | faster: {}",
            n,
            result.fcfs_duration,
            result.fcfs_avg_waiting,
            result.fcfs_avg_turnaround,
            result.sjf_duration,
            result.sjf_avg_waiting,
            result.sjf_avg_turnaround,
            result.faster
        );

        result
    }
}

/// Schedules `batch`, timing only the scheduler itself.
fn timed(scheduler: &dyn Scheduler, batch: Vec<Process>) -> (Duration, Metrics) {
    let started = Instant::now();
    let schedule = scheduler.schedule(batch);
    let elapsed = started.elapsed();
    (elapsed, Metrics::calculate(&schedule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::SelectionStrategy;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let batch = generate_processes(100, 20, &mut rng);

        assert_eq!(batch.len(), 100);
        assert_eq!(batch[0].pid, "P1");
        assert_eq!(batch[99].pid, "P100");
        assert!(batch.iter().all(|p| (0..=50).contains(&p.arrival_time)));
        assert!(batch.iter().all(|p| (1..=20).contains(&p.burst_time)));
        assert!(batch.iter().all(|p| !p.is_scheduled()));
        assert!(validate_processes(&batch).is_ok());
    }

    #[test]
    fn test_generate_small_sizes() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(generate_processes(0, 20, &mut rng).is_empty());

        // n/2 == 0: everything arrives at t=0.
        let one = generate_processes(1, 20, &mut rng);
        assert_eq!(one[0].arrival_time, 0);
    }

    #[test]
    fn test_seeded_runs_repeat_quality() {
        let config = StressConfig::default().with_sizes(vec![20, 80]).with_seed(42);
        let a = StressHarness::new(config.clone()).run();
        let b = StressHarness::new(config).run();

        for (x, y) in a.results().iter().zip(b.results()) {
            assert_eq!(x.size, y.size);
            assert!((x.fcfs_avg_waiting - y.fcfs_avg_waiting).abs() < 1e-10);
            assert!((x.sjf_avg_waiting - y.sjf_avg_waiting).abs() < 1e-10);
            assert!((x.sjf_avg_turnaround - y.sjf_avg_turnaround).abs() < 1e-10);
        }
    }

    #[test]
    fn test_sizes_in_order_and_mean_burst_agrees() {
        let report = StressHarness::new(
            StressConfig::default()
                .with_sizes(vec![50, 10, 200])
                .with_seed(3)
                .with_sjf_strategy(SelectionStrategy::BurstHeap),
        )
        .run();

        let sizes: Vec<usize> = report.results().iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![50, 10, 200]);
        assert_eq!(report.wins(Algorithm::Fcfs) + report.wins(Algorithm::Sjf), 3);

        // Both runs saw the same batch: turnaround - waiting is the mean burst.
        for r in report.results() {
            let fcfs_burst = r.fcfs_avg_turnaround - r.fcfs_avg_waiting;
            let sjf_burst = r.sjf_avg_turnaround - r.sjf_avg_waiting;
            assert!((fcfs_burst - sjf_burst).abs() < 1e-9);
        }
    }

    #[test]
    fn test_faster_tie_goes_to_fcfs() {
        let same = Duration::from_micros(5);
        let r = StressResult::new(1, (same, Metrics::default()), (same, Metrics::default()));
        assert_eq!(r.faster, Algorithm::Fcfs);

        let r = StressResult::new(
            1,
            (Duration::from_micros(9), Metrics::default()),
            (Duration::from_micros(2), Metrics::default()),
        );
        assert_eq!(r.faster, Algorithm::Sjf);
    }

    #[test]
    fn test_zero_size() {
        let mut rng = SmallRng::seed_from_u64(0);
        let r = StressHarness::default().run_size(0, &mut rng);
        assert_eq!(r.size, 0);
        assert!((r.fcfs_avg_waiting - 0.0).abs() < 1e-10);
        assert!((r.sjf_avg_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_report_serializes() {
        let report = StressHarness::new(StressConfig::default().with_sizes(vec![5]).with_seed(8)).run();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["results"][0]["size"], 5);
        assert!(json["results"][0].get("faster").is_some());
    }

    #[test]
    fn test_module_run_uses_given_sizes() {
        let report = crate::stress::run(&[3, 4]);
        assert_eq!(report.len(), 2);
        assert!(!report.is_empty());
    }
}
