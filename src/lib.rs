//! Non-preemptive CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Computes single-CPU timelines for a finite batch of processes under
//! First-Come-First-Served and Shortest-Job-First dispatch, derives the
//! standard performance metrics, and benchmarks both policies on synthetic
//! load. Pure discrete-event computation: no threads, no I/O.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Algorithm`, `Timeline`, `Segment`
//! - **`dispatching`**: Replaceable SJF ready queue (`ReadyQueue`, `SelectionStrategy`)
//! - **`scheduler`**: `Fcfs`, `Sjf`, `Metrics`, `MetricsComparison`
//! - **`stress`**: Synthetic-load harness (`StressConfig`, `StressHarness`, `StressReport`)
//! - **`validation`**: Input checks (empty/duplicate IDs, negative arrival, non-positive burst)
//!   and schedule invariant checks
//!
//! # Architecture
//!
//! Parsing process descriptors, rendering tables or Gantt charts, and
//! writing result files belong to the caller. This crate takes a
//! `Vec<Process>` and hands back scheduled records and metrics, all
//! `serde`-serializable. Diagnostics go through the `log` facade; no
//! logger is installed here.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod stress;
pub mod validation;
