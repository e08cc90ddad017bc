//! Non-preemptive single-CPU schedulers and metrics.
//!
//! Provides FCFS and SJF dispatchers that turn a batch of unscheduled
//! processes into a timeline, plus the performance metrics derived from it.
//!
//! # Algorithms
//!
//! - `Fcfs` orders by `(arrival_time, pid)` and dispatches greedily.
//! - `Sjf` dispatches, at every free CPU instant, the shortest arrived job.
//!
//! Both advance the clock over idle gaps and never preempt.
//!
//! # Ownership
//!
//! [`Scheduler::schedule`] takes the batch by value and returns it
//! annotated. Comparing algorithms on one input means cloning that input
//! once per run; a batch mutated by one run is never fed to another.
//!
//! # Metrics
//!
//! `Metrics` reduces a finished schedule to average waiting/turnaround
//! time, CPU utilization, throughput and total execution time.
//! `MetricsComparison` lines two of them up.
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::models::Process;
//! use u_cpu_schedule::scheduler::{Fcfs, Metrics, Scheduler, Sjf};
//!
//! let batch = vec![
//!     Process::new("P1", 0, 6),
//!     Process::new("P2", 1, 8),
//!     Process::new("P3", 2, 7),
//!     Process::new("P4", 3, 3),
//!     Process::new("P5", 5, 4),
//! ];
//!
//! let fcfs = Metrics::calculate(&Fcfs::new().schedule(batch.clone()));
//! let sjf = Metrics::calculate(&Sjf::new().schedule(batch));
//! assert!(sjf.avg_waiting_time < fcfs.avg_waiting_time);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Smith (1956), SPT optimality for mean flow time on a single machine

mod comparison;
mod fcfs;
mod metrics;
mod sjf;

pub use comparison::{MetricComparison, MetricKind, MetricsComparison};
pub use fcfs::Fcfs;
pub use metrics::Metrics;
pub use sjf::Sjf;

use crate::models::{Algorithm, Process};
use crate::validation::{validate_processes, ValidationError};

/// A non-preemptive single-CPU dispatch policy.
pub trait Scheduler {
    /// Which policy this is.
    fn algorithm(&self) -> Algorithm;

    /// Schedules the batch and returns it in execution order.
    ///
    /// Assumes a well-formed batch (non-empty unique IDs, `arrival_time >= 0`,
    /// `burst_time > 0`). An empty batch yields an empty schedule.
    fn schedule(&self, processes: Vec<Process>) -> Vec<Process>;

    /// Validates the batch, then schedules it.
    ///
    /// # Errors
    /// Every validation error found; nothing is scheduled in that case.
    fn try_schedule(&self, processes: Vec<Process>) -> Result<Vec<Process>, Vec<ValidationError>> {
        if let Err(errors) = validate_processes(&processes) {
            log::warn!(
                "{}: rejected batch of {} processes ({} validation errors)",
                self.algorithm(),
                processes.len(),
                errors.len()
            );
            return Err(errors);
        }
        Ok(self.schedule(processes))
    }
}

/// Runs both policies on independent copies of `processes`.
///
/// Returns `(fcfs_schedule, sjf_schedule)`.
pub fn schedule_both(processes: &[Process], sjf: &Sjf) -> (Vec<Process>, Vec<Process>) {
    let fcfs_result = Fcfs::new().schedule(processes.to_vec());
    let sjf_result = sjf.schedule(processes.to_vec());
    (fcfs_result, sjf_result)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::Process;

    /// Five-process textbook batch.
    pub fn textbook_batch() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 6),
            Process::new("P2", 1, 8),
            Process::new("P3", 2, 7),
            Process::new("P4", 3, 3),
            Process::new("P5", 5, 4),
        ]
    }

    pub fn pids(processes: &[Process]) -> Vec<&str> {
        processes.iter().map(|p| p.pid.as_str()).collect()
    }

    pub fn completions(processes: &[Process]) -> Vec<i64> {
        processes.iter().map(|p| p.completion_time).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_schedule_both_isolates_copies() {
        let input = textbook_batch();
        let (fcfs, sjf) = schedule_both(&input, &Sjf::new());

        // The shared input is untouched.
        assert!(input.iter().all(|p| !p.is_scheduled()));
        assert_eq!(pids(&fcfs), vec!["P1", "P2", "P3", "P4", "P5"]);
        assert_eq!(pids(&sjf), vec!["P1", "P4", "P5", "P3", "P2"]);
    }

    #[test]
    fn test_try_schedule_rejects_invalid() {
        let batch = vec![Process::new("P1", 0, 3), Process::new("P2", 1, 0)];
        let errors = Fcfs::new().try_schedule(batch).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_try_schedule_accepts_valid() {
        let scheduled = Sjf::new().try_schedule(textbook_batch()).unwrap();
        assert_eq!(completions(&scheduled), vec![6, 9, 13, 20, 28]);
    }
}
