//! Simulation error type.

use std::fmt;

use crate::validation::ValidationError;

/// Errors raised by the simulation engine and its selector parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Round Robin quantum was zero or negative.
    InvalidQuantum(i64),
    /// Algorithm selector string was not recognized.
    UnknownAlgorithm(String),
    /// Process set failed boundary validation.
    InvalidInput(Vec<ValidationError>),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuantum(q) => write!(f, "quantum must be > 0 (got {q})"),
            Self::UnknownAlgorithm(name) => write!(f, "unknown scheduling algorithm: '{name}'"),
            Self::InvalidInput(errors) => {
                write!(f, "invalid process set")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::validation::validate_processes;

    #[test]
    fn test_display_invalid_quantum() {
        let e = SimulationError::InvalidQuantum(0);
        assert_eq!(e.to_string(), "quantum must be > 0 (got 0)");
    }

    #[test]
    fn test_display_unknown_algorithm() {
        let e = SimulationError::UnknownAlgorithm("lottery".into());
        assert!(e.to_string().contains("lottery"));
    }

    #[test]
    fn test_from_validation_errors() {
        let errors = validate_processes(&[Process::new("", 0, 0)]).unwrap_err();
        let e: SimulationError = errors.into();
        let msg = e.to_string();
        assert!(msg.starts_with("invalid process set: "));
        assert!(msg.contains("; "));
    }
}
