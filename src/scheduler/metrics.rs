//! Schedule performance metrics.
//!
//! Computes standard CPU scheduling indicators from a completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(start - arrival) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | CPU Utilization | 100 · Σ burst / span, span = max(completion) - min(start) |
//! | Throughput | n / span |
//! | Total Execution Time | max(completion) |
//!
//! A zero span (no processes) yields 0 for utilization and throughput.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Schedule performance indicators.
///
/// The all-zero value (`Metrics::default()`) is what an empty schedule
/// produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean waiting time (ticks).
    pub avg_waiting_time: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround_time: f64,
    /// Busy share of the schedule span (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick of span.
    pub throughput: f64,
    /// Latest completion time (ticks).
    pub total_execution_time: i64,
}

impl Metrics {
    /// Computes metrics from scheduled processes.
    ///
    /// Input order does not matter. Every process must already be scheduled.
    pub fn calculate(processes: &[Process]) -> Self {
        if processes.is_empty() {
            return Self::default();
        }

        let n = processes.len() as f64;
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_burst: i64 = 0;
        let mut first_start = i64::MAX;
        let mut last_completion = i64::MIN;

        for p in processes {
            total_waiting += p.waiting_time;
            total_turnaround += p.turnaround_time;
            total_burst += p.burst_time;
            first_start = first_start.min(p.start_time);
            last_completion = last_completion.max(p.completion_time);
        }

        let span = last_completion - first_start;
        let (cpu_utilization, throughput) = if span > 0 {
            (
                total_burst as f64 / span as f64 * 100.0,
                n / span as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            avg_waiting_time: total_waiting as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            cpu_utilization,
            throughput,
            total_execution_time: last_completion,
        }
    }
}
