//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduler: the process record
//! that flows through a run, the algorithm identifier used in reports, and
//! the timeline view of a finished schedule.
//!
//! # Lifecycle
//!
//! | State | Populated fields |
//! |-------|-----------------|
//! | Unscheduled | `pid`, `arrival_time`, `burst_time` |
//! | Scheduled | all of the above + `start_time`, `completion_time`, `turnaround_time`, `waiting_time` |

mod algorithm;
mod process;
mod timeline;

pub use algorithm::Algorithm;
pub use process::Process;
pub use timeline::{Segment, Timeline};

pub(crate) use process::sort_by_arrival;
