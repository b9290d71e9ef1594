//! Crate error type.
//!
//! Every failure happens before a simulation starts: reading the workload,
//! parsing it, validating it, or validating the run configuration. Once a
//! dispatcher is running no operation can fail.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing a simulation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Record {record}: invalid {field} '{value}' (expected a non-negative integer)")]
    InvalidField {
        record: usize,
        field: &'static str,
        value: String,
    },

    #[error("Invalid workload: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("Round Robin quantum must be a positive integer, got {0}")]
    InvalidQuantum(u32),

    #[error("No scheduling policy selected")]
    NoPolicies,

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to serialize report: {0}")]
    Report(#[source] serde_json::Error),
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_quantum_display() {
        let msg = Error::InvalidQuantum(0).to_string();
        assert!(msg.contains("positive"));
        assert!(msg.contains('0'));
    }

    #[test]
    fn test_io_display_names_path() {
        let err = Error::Io {
            path: PathBuf::from("run.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read run.json: not found");
    }

    #[test]
    fn test_validation_display_joins_messages() {
        let err = Error::from(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: A"),
            ValidationError::new(ValidationErrorKind::EmptyId, "Process at position 1 has an empty ID"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid workload: Duplicate process ID: A; Process at position 1 has an empty ID"
        );
    }
}
