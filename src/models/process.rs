//! Process (schedulable unit) model.
//!
//! A process is created unscheduled, carrying only its identity, arrival
//! time and burst time. A single scheduling run fills in the four derived
//! timing fields.
//!
//! # Invariants (after scheduling)
//!
//! | Field | Definition |
//! |-------|-----------|
//! | `start_time` | `>= arrival_time` |
//! | `completion_time` | `start_time + burst_time` |
//! | `turnaround_time` | `completion_time - arrival_time` |
//! | `waiting_time` | `turnaround_time - burst_time` |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
///
/// # Ownership
/// Schedulers consume a `Vec<Process>` and return it annotated. To run
/// several algorithms on the same input, clone the batch once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier. Secondary sort key on arrival ties.
    pub pid: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required (never preempted).
    pub burst_time: i64,
    /// Tick at which the process was dispatched.
    pub start_time: i64,
    /// Tick at which the process finished.
    pub completion_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Turnaround minus burst.
    pub waiting_time: i64,
}

impl Process {
    /// Creates an unscheduled process.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            start_time: 0,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Dispatches the process at `start` and derives the remaining fields.
    ///
    /// Returns the completion time, i.e. the next free CPU tick.
    pub(crate) fn assign_start(&mut self, start: i64) -> i64 {
        self.start_time = start;
        self.completion_time = start + self.burst_time;
        self.turnaround_time = self.completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
        self.completion_time
    }

    /// Whether a scheduling run has assigned timing to this process.
    ///
    /// Relies on `burst_time > 0`: a dispatched process always completes
    /// strictly after t=0.
    pub fn is_scheduled(&self) -> bool {
        self.completion_time > 0
    }

    /// Whether the timing fields satisfy the non-preemptive invariants.
    pub fn holds_invariants(&self) -> bool {
        self.start_time >= self.arrival_time
            && self.completion_time == self.start_time + self.burst_time
            && self.turnaround_time == self.completion_time - self.arrival_time
            && self.waiting_time == self.turnaround_time - self.burst_time
    }

    /// Returns a copy with the derived timing fields reset to zero.
    pub fn unscheduled(&self) -> Self {
        Self::new(self.pid.clone(), self.arrival_time, self.burst_time)
    }
}

/// Orders processes by `(arrival_time, pid)`.
///
/// Both schedulers sort with this key before doing anything else; it fixes
/// every tie-break in the crate.
pub(crate) fn sort_by_arrival(processes: &mut [Process]) {
    processes.sort_by(|a, b| {
        a.arrival_time
            .cmp(&b.arrival_time)
            .then_with(|| a.pid.cmp(&b.pid))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unscheduled() {
        let p = Process::new("P1", 3, 7);
        assert_eq!(p.pid, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.start_time, 0);
        assert_eq!(p.completion_time, 0);
        assert_eq!(p.turnaround_time, 0);
        assert_eq!(p.waiting_time, 0);
        assert!(!p.is_scheduled());
    }

    #[test]
    fn test_assign_start_derives_fields() {
        let mut p = Process::new("P3", 2, 7);
        let next_free = p.assign_start(14);

        assert_eq!(next_free, 21);
        assert_eq!(p.start_time, 14);
        assert_eq!(p.completion_time, 21);
        assert_eq!(p.turnaround_time, 19);
        assert_eq!(p.waiting_time, 12);
        assert!(p.is_scheduled());
        assert!(p.holds_invariants());
    }

    #[test]
    fn test_invariants_detect_start_before_arrival() {
        let mut p = Process::new("P1", 5, 2);
        p.assign_start(3);
        assert!(!p.holds_invariants());
    }

    #[test]
    fn test_unscheduled_resets_timing() {
        let mut p = Process::new("P1", 1, 4);
        p.assign_start(10);
        let fresh = p.unscheduled();
        assert_eq!(fresh, Process::new("P1", 1, 4));
    }

    #[test]
    fn test_sort_by_arrival_breaks_ties_by_pid() {
        let mut batch = vec![
            Process::new("P3", 2, 1),
            Process::new("P2", 0, 1),
            Process::new("P1", 2, 1),
        ];
        sort_by_arrival(&mut batch);
        let pids: Vec<&str> = batch.iter().map(|p| p.pid.as_str()).collect();
        assert_eq!(pids, vec!["P2", "P1", "P3"]);
    }

    #[test]
    fn test_serde_field_names() {
        let p = Process::new("P1", 0, 5);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["pid"], "P1");
        assert_eq!(json["arrival_time"], 0);
        assert_eq!(json["burst_time"], 5);
        assert_eq!(json["waiting_time"], 0);
    }
}
