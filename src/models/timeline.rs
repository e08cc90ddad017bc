//! Execution timeline (Gantt data) of a completed schedule.
//!
//! A timeline lays the scheduled processes out on the single CPU in start
//! order and makes idle gaps explicit. It carries no rendering; console or
//! file output is left to the caller.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.1 (Gantt charts)

use serde::{Deserialize, Serialize};

use super::Process;

/// A contiguous stretch of CPU time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// The CPU executes `pid` during `[start, end)`.
    Run {
        /// Process identifier.
        pid: String,
        /// Dispatch tick.
        start: i64,
        /// Completion tick.
        end: i64,
    },
    /// No process is ready during `[start, end)`.
    Idle {
        /// First idle tick.
        start: i64,
        /// Tick at which the next process starts.
        end: i64,
    },
}

impl Segment {
    /// Segment start tick.
    pub fn start(&self) -> i64 {
        match self {
            Segment::Run { start, .. } | Segment::Idle { start, .. } => *start,
        }
    }

    /// Segment end tick.
    pub fn end(&self) -> i64 {
        match self {
            Segment::Run { end, .. } | Segment::Idle { end, .. } => *end,
        }
    }

    /// Length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end() - self.start()
    }

    /// Whether this is an idle gap.
    pub fn is_idle(&self) -> bool {
        matches!(self, Segment::Idle { .. })
    }
}

/// Single-CPU timeline built from a scheduled batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Builds the timeline from scheduled processes (any order).
    ///
    /// Processes are laid out by `start_time`; a gap between one completion
    /// and the next start becomes an [`Segment::Idle`].
    pub fn from_schedule(processes: &[Process]) -> Self {
        let mut ordered: Vec<&Process> = processes.iter().collect();
        ordered.sort_by_key(|p| p.start_time);

        let mut segments = Vec::with_capacity(ordered.len());
        let mut cursor: Option<i64> = None;

        for p in ordered {
            if let Some(free_at) = cursor {
                if p.start_time > free_at {
                    segments.push(Segment::Idle {
                        start: free_at,
                        end: p.start_time,
                    });
                }
            }
            segments.push(Segment::Run {
                pid: p.pid.clone(),
                start: p.start_time,
                end: p.completion_time,
            });
            cursor = Some(p.completion_time);
        }

        Self { segments }
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Process IDs in dispatch order.
    pub fn execution_order(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Run { pid, .. } => Some(pid.as_str()),
                Segment::Idle { .. } => None,
            })
            .collect()
    }

    /// Total ticks the CPU was executing.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Total ticks the CPU sat idle between the first start and last completion.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Ticks from the first start to the last completion.
    pub fn span(&self) -> i64 {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => last.end() - first.start(),
            _ => 0,
        }
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
