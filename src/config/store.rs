//! Record store configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Record store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Which store adapter to use
    #[serde(default)]
    pub backend: StoreBackend,

    /// PostgreSQL connection URL (postgres backend only)
    pub database_url: Option<String>,

    /// Minimum connections to maintain
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Maximum connections allowed
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Deadline for a single store read, in milliseconds
    #[serde(default = "default_call_timeout")]
    pub call_timeout_ms: u64,

    /// Upper bound on concurrent question queries per aggregation
    #[serde(default = "default_max_concurrent_queries")]
    pub max_concurrent_queries: usize,

    /// JSON file of records loaded into the in-memory store at startup
    pub seed_file: Option<PathBuf>,
}

/// Store adapter selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    InMemory,
    Postgres,
}

impl StoreConfig {
    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Get per-call deadline as Duration
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }

    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.call_timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_concurrent_queries == 0 {
            return Err(ValidationError::InvalidConcurrency);
        }

        if self.backend == StoreBackend::Postgres {
            let url = self.database_url.as_deref().unwrap_or_default();
            if url.is_empty() {
                return Err(ValidationError::MissingRequired("STORE__DATABASE_URL"));
            }
            if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                return Err(ValidationError::InvalidDatabaseUrl);
            }
            if self.min_connections > self.max_connections {
                return Err(ValidationError::InvalidPoolSize);
            }
            if self.max_connections > 100 {
                return Err(ValidationError::PoolSizeTooLarge);
            }
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            database_url: None,
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            call_timeout_ms: default_call_timeout(),
            max_concurrent_queries: default_max_concurrent_queries(),
            seed_file: None,
        }
    }
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_call_timeout() -> u64 {
    5_000
}

fn default_max_concurrent_queries() -> usize {
    8
}
