//! Error types for structured error handling.
//!
//! This module provides:
//! - `SamplingError`: Errors from variate generation and Monte-Carlo integration
//! - `SolverError`: Errors from bracketing search
//! - `SampleIoError`: Errors from reading and writing sample files

use std::path::PathBuf;
use thiserror::Error;

/// Variate generation and integration errors.
///
/// # Variants
/// - `InvalidArgument`: A caller-detectable precondition was violated
/// - `BudgetExceeded`: An acceptance loop ran out of its iteration budget
///
/// # Examples
/// ```
/// use mcstat_core::types::SamplingError;
///
/// let err = SamplingError::invalid_argument("tau", "must be non-zero");
/// assert_eq!(format!("{}", err), "Invalid argument 'tau': must be non-zero");
///
/// let err = SamplingError::BudgetExceeded { iterations: 1000 };
/// assert!(format!("{}", err).contains("1000 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    /// Invalid parameter value with name and description.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Acceptance loop did not terminate within the configured budget.
    #[error("Iteration budget exhausted after {iterations} iterations")]
    BudgetExceeded {
        /// Number of trials performed before giving up.
        iterations: usize,
    },
}

impl SamplingError {
    /// Create an invalid argument error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Bracketing search errors.
///
/// # Examples
/// ```
/// use mcstat_core::types::SolverError;
///
/// let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
/// assert!(format!("{}", err).contains("same sign"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },
}

/// Sample file errors.
///
/// # Variants
/// - `Io`: The file could not be opened, read or written
/// - `Parse`: A line did not hold a floating-point number
#[derive(Error, Debug)]
pub enum SampleIoError {
    /// Underlying I/O failure.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Original error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed line.
    #[error("Parse error at line {line}: '{content}' is not a number")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Offending line content.
        content: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_error_display() {
        let err = SamplingError::invalid_argument("n_evt", "must be at least 1");
        assert!(err.to_string().contains("n_evt"));
        assert!(err.to_string().contains("at least 1"));

        let err = SamplingError::BudgetExceeded { iterations: 5 };
        assert_eq!(
            err.to_string(),
            "Iteration budget exhausted after 5 iterations"
        );
    }

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::NoBracket { a: 1.0, b: 2.0 };
        assert_eq!(err.to_string(), "No bracket: f(1) and f(2) have same sign");
    }

    #[test]
    fn test_parse_error_display() {
        let err = SampleIoError::Parse {
            line: 3,
            content: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parse error at line 3: 'abc' is not a number"
        );
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let err = SampleIoError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.txt"));
    }
}
