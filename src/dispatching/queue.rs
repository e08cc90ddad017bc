//! Built-in ready queues.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::ReadyQueue;

/// Vector-backed queue that scans every waiting process on each pop.
///
/// Entries stay in admission order, so the first strictly-smaller burst
/// found during the scan is the winner and earlier entries win ties.
#[derive(Debug, Clone, Default)]
pub struct LinearScanQueue {
    waiting: Vec<(usize, i64)>,
}

impl LinearScanQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            waiting: Vec::with_capacity(capacity),
        }
    }
}

impl ReadyQueue for LinearScanQueue {
    fn admit(&mut self, index: usize, burst_time: i64) {
        self.waiting.push((index, burst_time));
    }

    fn pop_shortest(&mut self) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None; // (position, burst)
        for (pos, &(_, burst)) in self.waiting.iter().enumerate() {
            match best {
                Some((_, best_burst)) if burst >= best_burst => {}
                _ => best = Some((pos, burst)),
            }
        }
        // `remove`, not `swap_remove`: admission order is the tie-break.
        best.map(|(pos, _)| self.waiting.remove(pos).0)
    }

    fn len(&self) -> usize {
        self.waiting.len()
    }
}

/// Binary min-heap keyed by `(burst_time, index)`.
#[derive(Debug, Clone, Default)]
pub struct BurstHeapQueue {
    heap: BinaryHeap<Reverse<(i64, usize)>>,
}

impl BurstHeapQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }
}

impl ReadyQueue for BurstHeapQueue {
    fn admit(&mut self, index: usize, burst_time: i64) {
        self.heap.push(Reverse((burst_time, index)));
    }

    fn pop_shortest(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, index))| index)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
