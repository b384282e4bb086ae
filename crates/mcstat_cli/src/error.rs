//! Error types for the mcstat CLI.

use mcstat_core::types::{SampleIoError, SamplingError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Sampling or integration rejected its arguments or ran out of budget
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    /// Sample file could not be read or written
    #[error("Sample file error: {0}")]
    SampleIo(#[from] SampleIoError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::invalid_argument("--tau is required");
        assert_eq!(err.to_string(), "Invalid argument: --tau is required");

        let err: CliError = SamplingError::invalid_argument("tau", "lifetime must be non-zero").into();
        assert!(err.to_string().contains("tau"));
    }
}
