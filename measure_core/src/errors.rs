//! # Error Types
//!
//! Structured error types for measure_core. Every condition here is local and
//! recoverable: the core signals it and the caller (a calculator form, the CLI)
//! decides how to surface it and whether to re-prompt.
//!
//! ## Example
//!
//! ```rust
//! use measure_core::errors::MeasureError;
//! use measure_core::parse;
//!
//! let err = parse("   ").unwrap_err();
//! assert_eq!(err.error_code(), "PARSE_ERROR");
//! assert!(matches!(err, MeasureError::ParseError { .. }));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for measure_core operations
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Help text appended to every parse failure.
pub const FORMAT_HELP: &str = "Accepted formats: 3' 4-1/2\", 3'4\", 4-1/2\", 4.5 \
    (a hyphen inside a measurement means \"and\", joining whole inches to a fraction, not subtraction)";

/// Structured error type for measurement operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum MeasureError {
    /// Measurement text was empty or did not match any accepted notation
    #[error("Could not parse '{input}': {message}")]
    ParseError { input: String, message: String },

    /// A measurement was divided by zero
    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: String },

    /// A configuration value is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl MeasureError {
    /// Create a ParseError whose message ends with the accepted-format help
    pub fn parse_error(input: impl Into<String>, problem: impl AsRef<str>) -> Self {
        MeasureError::ParseError {
            input: input.into(),
            message: format!("{}. {}", problem.as_ref(), FORMAT_HELP),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        MeasureError::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        MeasureError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        MeasureError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if the caller can recover by asking the user again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MeasureError::ParseError { .. } | MeasureError::DivisionByZero { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MeasureError::ParseError { .. } => "PARSE_ERROR",
            MeasureError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            MeasureError::InvalidInput { .. } => "INVALID_INPUT",
            MeasureError::FileError { .. } => "FILE_ERROR",
            MeasureError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for MeasureError {
    fn from(err: serde_json::Error) -> Self {
        MeasureError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = MeasureError::parse_error("3'-x", "Unrecognized measurement");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"ParseError\""));
        let roundtrip: MeasureError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_parse_error_lists_formats() {
        let error = MeasureError::parse_error("abc", "Unrecognized measurement");
        let text = error.to_string();
        assert!(text.contains("abc"));
        assert!(text.contains("3' 4-1/2\""));
        assert!(text.contains("4.5"));
        assert!(text.contains("not subtraction"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(MeasureError::division_by_zero("divide").error_code(), "DIVISION_BY_ZERO");
        assert_eq!(
            MeasureError::invalid_input("denominator", "0", "must be positive").error_code(),
            "INVALID_INPUT"
        );
        assert!(MeasureError::division_by_zero("divide").is_recoverable());
        assert!(!MeasureError::file_error("read", "x.json", "missing").is_recoverable());
    }
}
