//! Error types for the Polls MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while serving polls.
#[derive(Error, Debug)]
pub enum PollError {
    /// Question or choice is absent, or the question is not yet published
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Request was well-formed but cannot be honored
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Input failed domain validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Seed fixture is malformed
    #[error("Seed error: {0}")]
    Seed(String),

    /// Failed to parse JSON
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Failed to read a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with PollError
pub type PollResult<T> = Result<T, PollError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PollError::NotFound("question 7".to_string());
        assert_eq!(err.to_string(), "Resource not found: question 7");

        let err = PollError::InvalidRequest("You didn't select a choice.".to_string());
        assert_eq!(err.to_string(), "Invalid request: You didn't select a choice.");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: PollError = ValidationError::EmptyText.into();
        assert!(matches!(err, PollError::Validation(ValidationError::EmptyText)));
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_config_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            var: "POLLS_MAX_TEXT_LENGTH".to_string(),
            reason: "Must be between 1 and 10000".to_string(),
        };
        assert!(err.to_string().contains("POLLS_MAX_TEXT_LENGTH"));
        assert!(err.to_string().contains("between 1 and 10000"));
    }
}
