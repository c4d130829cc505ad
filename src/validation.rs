//! Input validation for process sets.
//!
//! The scheduler accepts any input and computes whatever it implies.
//! Callers that want to reject malformed process sets before scheduling
//! run these checks first. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times

use crate::models::Process;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process ID.
    pub process_id: i32,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, process_id: i32, message: impl Into<String>) -> Self {
        Self {
            kind,
            process_id,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. All arrival times are non-negative
/// 3. All burst times are positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
///
/// # Example
///
/// ```
/// use u_fcfs::models::Process;
/// use u_fcfs::validation::{validate_processes, ValidationErrorKind};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 3, 0)];
/// let errors = validate_processes(&processes).unwrap_err();
/// assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
/// ```
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                p.id,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                p.id,
                format!("Process {} arrives at negative time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                p.id,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
