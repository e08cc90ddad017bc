//! Scheduling algorithm identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The dispatch policies this crate implements.
///
/// Declaration order is the listing order used for tie-breaks in reports:
/// FCFS is listed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
}

impl Algorithm {
    /// Short display name (e.g., "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
        }
    }

    /// Long description.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come, First-Served",
            Algorithm::Sjf => "Shortest Job First (Non-Preemptive)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
