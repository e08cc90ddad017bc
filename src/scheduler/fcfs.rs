//! First-Come, First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Sort by `(arrival_time, pid)`.
//! 2. Walk the sorted batch with a clock starting at 0.
//! 3. If the clock is behind the next arrival, jump to it (CPU idle).
//! 4. Dispatch at the clock; advance the clock to the completion.
//!
//! # Complexity
//! O(n log n) for the sort, then one linear pass.

use super::Scheduler;
use crate::models::{sort_by_arrival, Algorithm, Process};

/// First-Come, First-Served dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, mut processes: Vec<Process>) -> Vec<Process> {
        log::debug!("FCFS: scheduling {} processes", processes.len());
        sort_by_arrival(&mut processes);

        let mut current_time: i64 = 0;
        for process in &mut processes {
            current_time = current_time.max(process.arrival_time);
            current_time = process.assign_start(current_time);
        }

        processes
    }
}
