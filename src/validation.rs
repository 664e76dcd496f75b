//! Input validation for process sets.
//!
//! The engine trusts its input: tie-breaking assumes unique pids and the
//! clock arithmetic assumes sane timing values. Callers run these checks at
//! the boundary before populating an [`Engine`](crate::scheduler::Engine).
//! Detects:
//! - Empty pids
//! - Duplicate pids
//! - Negative arrival times
//! - Non-positive burst times
//! - Pids colliding with the idle marker
//! - Timelines whose end does not fit in `i64`

use crate::models::{Process, IDLE_PID};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty (or whitespace-only) pid.
    EmptyPid,
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or a negative amount).
    NonPositiveBurst,
    /// A process uses the pid reserved for idle blocks.
    ReservedPid,
    /// Latest arrival plus total burst overflows the clock.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set before simulation.
///
/// Checks:
/// 1. Every pid is non-empty
/// 2. No duplicate pids
/// 3. Every arrival time is `>= 0`
/// 4. Every burst time is `> 0`
/// 5. No pid equals [`IDLE_PID`]
/// 6. `max(arrival) + sum(burst)` fits in `i64`, which bounds every clock
///    value any algorithm can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for p in processes {
        if p.pid.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPid,
                "Process pid must not be empty",
            ));
        } else if p.pid == IDLE_PID {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedPid,
                format!("Process pid '{IDLE_PID}' is reserved for idle time"),
            ));
        } else if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate process pid: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival_time.max(0)).max();
    let horizon = processes
        .iter()
        .try_fold(latest_arrival.unwrap_or(0), |acc, p| {
            acc.checked_add(p.burst_time.max(0))
        });
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
