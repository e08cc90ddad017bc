//! Shortest-Job-First (non-preemptive) scheduler.
//!
//! # Algorithm
//!
//! 1. Sort by `(arrival_time, pid)` once; this fixes the tie-break order.
//! 2. Admit every process with `arrival_time <= clock` to the ready queue.
//! 3. If the queue is empty, jump the clock to the next arrival (CPU idle).
//! 4. Otherwise dispatch the shortest ready job at the clock and advance
//!    the clock to its completion.
//!
//! Equal burst times go to the job earliest in `(arrival_time, pid)` order.
//!
//! # Complexity
//! O(n²) with [`SelectionStrategy::LinearScan`], O(n log n) with
//! [`SelectionStrategy::BurstHeap`]. The schedule is identical either way.

use super::Scheduler;
use crate::dispatching::SelectionStrategy;
use crate::models::{sort_by_arrival, Algorithm, Process};

/// Non-preemptive Shortest-Job-First dispatcher.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::dispatching::SelectionStrategy;
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{Scheduler, Sjf};
///
/// let sjf = Sjf::new().with_strategy(SelectionStrategy::BurstHeap);
/// let result = sjf.schedule(vec![
///     Process::new("P1", 0, 6),
///     Process::new("P2", 1, 8),
///     Process::new("P3", 1, 2),
/// ]);
/// let order: Vec<&str> = result.iter().map(|p| p.pid.as_str()).collect();
/// assert_eq!(order, vec!["P1", "P3", "P2"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf {
    strategy: SelectionStrategy,
}

impl Sjf {
    /// Creates the scheduler with the linear-scan ready queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ready-queue strategy.
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The configured ready-queue strategy.
    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }
}

impl Scheduler for Sjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn schedule(&self, mut processes: Vec<Process>) -> Vec<Process> {
        log::debug!(
            "SJF: scheduling {} processes ({})",
            processes.len(),
            self.strategy.name()
        );
        sort_by_arrival(&mut processes);

        let n = processes.len();
        let mut ready = self.strategy.new_queue(n);
        let mut order: Vec<usize> = Vec::with_capacity(n);
        let mut next_arrival = 0;
        let mut current_time: i64 = 0;

        while order.len() < n {
            while next_arrival < n && processes[next_arrival].arrival_time <= current_time {
                ready.admit(next_arrival, processes[next_arrival].burst_time);
                next_arrival += 1;
            }

            match ready.pop_shortest() {
                Some(idx) => {
                    current_time = processes[idx].assign_start(current_time);
                    order.push(idx);
                }
                None => match processes.get(next_arrival) {
                    Some(next) => {
                        log::trace!("SJF: idle {} -> {}", current_time, next.arrival_time);
                        current_time = next.arrival_time;
                    }
                    None => break,
                },
            }
        }

        // Reorder into execution order without cloning records.
        let mut slots: Vec<Option<Process>> = processes.into_iter().map(Some).collect();
        order.into_iter().filter_map(|i| slots[i].take()).collect()
    }
}
