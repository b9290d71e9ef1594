//! Input validation for workloads.
//!
//! Checks structural integrity of a workload before it is simulated.
//! Detects:
//! - Duplicate process IDs (statistics are keyed by ID)
//! - Empty process IDs
//! - Workloads that cannot finish within the `u32` tick range
//!
//! All problems are collected and returned together.

use std::collections::HashSet;
use std::fmt;

use crate::models::Workload;

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
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// The workload may need ticks past `u32::MAX`.
    HorizonOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
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

/// Validates a workload.
///
/// Checks:
/// 1. Every process has a non-empty ID
/// 2. No duplicate process IDs
/// 3. Last arrival plus total burst fits in a `u32` tick
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(workload: &Workload) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, process) in workload.processes().iter().enumerate() {
        if process.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {index} has an empty ID"),
            ));
        } else if !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }
    }

    if let Some(last_arrival) = workload.last_arrival() {
        let horizon = u64::from(last_arrival) + workload.total_burst();
        if horizon > u64::from(u32::MAX) {
            errors.push(ValidationError::new(
                ValidationErrorKind::HorizonOverflow,
                format!("Workload needs up to {horizon} ticks, more than {}", u32::MAX),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
