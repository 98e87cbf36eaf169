//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Missing table name configuration: {}", .0.join(", "))]
    MissingTables(Vec<String>),

    #[error("Invalid table name: {0}")]
    InvalidTableName(String),

    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("Invalid CORS origin (expected http:// or https://): {0}")]
    InvalidOrigin(String),

    #[error("Invalid timeout")]
    InvalidTimeout,

    #[error("Request timeout ({request_ms}ms) is shorter than the store call timeout ({call_ms}ms)")]
    RequestTimeoutBelowCallTimeout { request_ms: u64, call_ms: u64 },

    #[error("Max concurrent queries must be at least 1")]
    InvalidConcurrency,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Org prefix must be non-empty and must not contain '_'")]
    InvalidOrgPrefix,
}
