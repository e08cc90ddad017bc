//! Input and output validation for scheduling runs.
//!
//! The schedulers assume well-formed input and never fail. Callers that
//! cannot vouch for their source run [`validate_processes`] first (or use
//! [`Scheduler::try_schedule`](crate::scheduler::Scheduler::try_schedule)).
//!
//! Detects:
//! - Empty process IDs
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//!
//! [`validate_schedule`] checks the opposite direction: that a scheduled
//! batch satisfies the non-preemptive timing invariants.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process ID (may be empty).
    pub pid: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty ID.
    EmptyPid,
    /// Two processes share the same ID.
    DuplicatePid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// A scheduled process violates a timing invariant.
    InvariantViolated,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, pid: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            pid: pid.to_string(),
            message: message.into(),
        }
    }
}

/// Validates an unscheduled batch.
///
/// Checks:
/// 1. Every process has a non-empty ID
/// 2. No duplicate IDs
/// 3. `arrival_time >= 0`
/// 4. `burst_time > 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, p) in processes.iter().enumerate() {
        if p.pid.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPid,
                &p.pid,
                format!("Process at position {i} has an empty ID"),
            ));
        } else if !seen.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                &p.pid,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                &p.pid,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                &p.pid,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a scheduled batch against the timing invariants.
///
/// Checks, per process:
/// - `start_time >= arrival_time`
/// - `completion_time == start_time + burst_time`
/// - `turnaround_time == completion_time - arrival_time`
/// - `waiting_time == turnaround_time - burst_time`
///
/// and, across the batch, that no two executions overlap on the CPU.
pub fn validate_schedule(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    for p in processes {
        if !p.holds_invariants() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvariantViolated,
                &p.pid,
                format!(
                    "Process '{}' has inconsistent timing (AT={}, BT={}, ST={}, CT={}, TAT={}, WT={})",
                    p.pid,
                    p.arrival_time,
                    p.burst_time,
                    p.start_time,
                    p.completion_time,
                    p.turnaround_time,
                    p.waiting_time
                ),
            ));
        }
    }

    let mut by_start: Vec<&Process> = processes.iter().collect();
    by_start.sort_by_key(|p| p.start_time);
    for pair in by_start.windows(2) {
        if pair[1].start_time < pair[0].completion_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvariantViolated,
                &pair[1].pid,
                format!(
                    "Process '{}' starts at {} while '{}' runs until {}",
                    pair[1].pid, pair[1].start_time, pair[0].pid, pair[0].completion_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 6),
            Process::new("P2", 1, 8),
            Process::new("P3", 2, 7),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_empty_pid() {
        let errors = validate_processes(&[Process::new("  ", 0, 1)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyPid);
    }

    #[test]
    fn test_duplicate_pid() {
        let mut processes = sample_processes();
        processes.push(Process::new("P2", 4, 1));

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid && e.pid == "P2"));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new("P1", -1, 3)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert!(errors[0].to_string().contains("negative arrival"));
    }

    #[test]
    fn test_non_positive_burst() {
        let errors =
            validate_processes(&[Process::new("P1", 0, 0), Process::new("P2", 0, -4)]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_multiple_errors_on_one_process() {
        let errors = validate_processes(&[Process::new("P1", -2, 0)]).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_schedule_invariants_ok() {
        let mut a = Process::new("P1", 0, 3);
        a.assign_start(0);
        let mut b = Process::new("P2", 1, 2);
        b.assign_start(3);
        assert!(validate_schedule(&[a, b]).is_ok());
    }

    #[test]
    fn test_schedule_start_before_arrival() {
        let mut p = Process::new("P1", 5, 3);
        p.assign_start(2);

        let errors = validate_schedule(&[p]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvariantViolated);
    }

    #[test]
    fn test_schedule_overlap() {
        let mut a = Process::new("P1", 0, 5);
        a.assign_start(0);
        let mut b = Process::new("P2", 0, 2);
        b.assign_start(3);

        let errors = validate_schedule(&[a, b]).unwrap_err();
        assert!(errors.iter().any(|e| e.pid == "P2"));
    }

    #[test]
    fn test_schedule_tampered_field() {
        let mut p = Process::new("P1", 0, 4);
        p.assign_start(1);
        p.waiting_time = 0;

        assert!(validate_schedule(&[p]).is_err());
    }
}
