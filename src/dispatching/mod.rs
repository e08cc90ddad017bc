//! Ready-queue selection for shortest-job dispatching.
//!
//! The SJF scheduler keeps its timing logic (clock, idle advance, timing
//! assignment) separate from the question "which arrived process runs
//! next?". That question is answered by a [`ReadyQueue`], so the selection
//! structure can be swapped without touching the timing loop.
//!
//! # Selection Rule
//!
//! The queue returns the admitted process with the smallest burst time.
//! Ties go to the process admitted first, which is the earliest by
//! `(arrival_time, pid)` because the scheduler admits in that order.
//!
//! # Strategies
//!
//! | Strategy | Structure | Pop cost | Whole run |
//! |----------|-----------|----------|-----------|
//! | `LinearScan` | insertion-ordered vector | O(n) | O(n²) |
//! | `BurstHeap` | binary min-heap on `(burst, index)` | O(log n) | O(n log n) |
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::dispatching::SelectionStrategy;
//!
//! let mut queue = SelectionStrategy::BurstHeap.new_queue(4);
//! queue.admit(0, 6);
//! queue.admit(1, 3);
//! queue.admit(2, 3);
//! assert_eq!(queue.pop_shortest(), Some(1));
//! assert_eq!(queue.pop_shortest(), Some(2));
//! ```
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6.5 (Priority Queues)

mod queue;

pub use queue::{BurstHeapQueue, LinearScanQueue};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A set of arrived, not-yet-dispatched processes.
///
/// Processes are identified by their index in the scheduler's
/// `(arrival_time, pid)` ordering. The scheduler admits indices in strictly
/// increasing order; implementations may rely on that.
pub trait ReadyQueue: Debug {
    /// Adds an arrived process.
    fn admit(&mut self, index: usize, burst_time: i64);

    /// Removes and returns the shortest admitted process.
    ///
    /// Ties on burst time resolve to the smallest index.
    fn pop_shortest(&mut self) -> Option<usize>;

    /// Number of admitted processes still waiting.
    fn len(&self) -> usize;

    /// Whether no admitted process is waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which [`ReadyQueue`] implementation the SJF scheduler uses.
///
/// Both strategies produce the same schedule for every input; they differ
/// only in running time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Rescan every waiting process on each dispatch.
    #[default]
    LinearScan,
    /// Binary min-heap keyed by `(burst_time, index)`.
    BurstHeap,
}

impl SelectionStrategy {
    /// Strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            SelectionStrategy::LinearScan => "linear-scan",
            SelectionStrategy::BurstHeap => "burst-heap",
        }
    }

    /// Creates an empty queue sized for `capacity` processes.
    pub fn new_queue(&self, capacity: usize) -> Box<dyn ReadyQueue> {
        match self {
            SelectionStrategy::LinearScan => Box::new(LinearScanQueue::with_capacity(capacity)),
            SelectionStrategy::BurstHeap => Box::new(BurstHeapQueue::with_capacity(capacity)),
        }
    }
}
