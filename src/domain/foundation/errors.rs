//! Error types for the domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Machine-readable failure category reported alongside human-readable messages.
///
/// Callers use this to decide whether a failed invocation is worth retrying
/// without parsing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Missing or empty required input.
    InvalidRequest,
    /// Referenced proposal does not exist.
    NotFound,
    /// Deployment misconfiguration (unresolved table or index names).
    ConfigurationError,
    /// Transient store failure: timeout, throttling, unavailability.
    StoreUnavailable,
    /// A stored record did not match its expected shape.
    DecodeError,
    /// The generation backend failed.
    GenerationFailed,
}

impl ErrorKind {
    /// Returns true if the caller may retry the same request with backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::StoreUnavailable)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidRequest => "INVALID_REQUEST",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::ConfigurationError => "CONFIGURATION_ERROR",
            ErrorKind::StoreUnavailable => "STORE_UNAVAILABLE",
            ErrorKind::DecodeError => "DECODE_ERROR",
            ErrorKind::GenerationFailed => "GENERATION_FAILED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("proposal_id");
        assert_eq!(format!("{}", err), "Field 'proposal_id' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("table", "contains spaces");
        assert_eq!(
            format!("{}", err),
            "Field 'table' has invalid format: contains spaces"
        );
    }

    #[test]
    fn only_store_unavailable_is_retryable() {
        assert!(ErrorKind::StoreUnavailable.is_retryable());
        assert!(!ErrorKind::InvalidRequest.is_retryable());
        assert!(!ErrorKind::NotFound.is_retryable());
        assert!(!ErrorKind::ConfigurationError.is_retryable());
        assert!(!ErrorKind::DecodeError.is_retryable());
        assert!(!ErrorKind::GenerationFailed.is_retryable());
    }

    #[test]
    fn error_kind_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorKind::StoreUnavailable).unwrap();
        assert_eq!(json, "\"STORE_UNAVAILABLE\"");
        assert_eq!(format!("{}", ErrorKind::NotFound), "NOT_FOUND");
    }
}
