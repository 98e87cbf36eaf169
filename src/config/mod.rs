//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROMETHEUS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use prometheus_proposals::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod generation;
mod server;
mod store;
mod tables;

pub use error::{ConfigError, ValidationError};
pub use generation::GenerationConfig;
pub use server::{AllowedOrigins, LogFormat, ServerConfig};
pub use store::{StoreBackend, StoreConfig};
pub use tables::{Table, TableConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults so the service can boot with an empty
/// environment; missing table names surface per invocation as a
/// configuration error rather than preventing startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener, request budget and log output
    #[serde(default)]
    pub server: ServerConfig,

    /// Record store configuration (adapter, connection, deadlines)
    #[serde(default)]
    pub store: StoreConfig,

    /// Table and index names
    #[serde(default)]
    pub tables: TableConfig,

    /// Generation backend and identifier settings
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROMETHEUS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROMETHEUS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PROMETHEUS__TABLES__PROPOSAL_TABLE=...` -> `tables.proposal_table = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROMETHEUS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Table presence is not checked here; see [`TableConfig::ensure_complete`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.store.validate()?;
        self.generation.validate()?;
        if self.store.backend == StoreBackend::Postgres {
            self.tables.validate_sql_identifiers()?;
        }
        if self.server.request_timeout() < self.store.call_timeout() {
            return Err(ValidationError::RequestTimeoutBelowCallTimeout {
                request_ms: self.server.request_timeout_ms,
                call_ms: self.store.call_timeout_ms,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PROMETHEUS__TABLES__PROPOSAL_TABLE",
        "PROMETHEUS__TABLES__SECTION_TABLE",
        "PROMETHEUS__TABLES__QUESTION_TABLE",
        "PROMETHEUS__TABLES__SECTION_BY_PROPOSAL_INDEX",
        "PROMETHEUS__SERVER__PORT",
        "PROMETHEUS__SERVER__LOG_FORMAT",
        "PROMETHEUS__STORE__BACKEND",
        "PROMETHEUS__STORE__DATABASE_URL",
        "PROMETHEUS__STORE__CALL_TIMEOUT_MS",
    ];

    /// Helper to set environment variables for testing
    fn set_table_env() {
        env::set_var("PROMETHEUS__TABLES__PROPOSAL_TABLE", "Proposal-dev");
        env::set_var("PROMETHEUS__TABLES__SECTION_TABLE", "ProposalSection-dev");
        env::set_var("PROMETHEUS__TABLES__QUESTION_TABLE", "Question-dev");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_table_env();
        env::set_var("PROMETHEUS__TABLES__SECTION_BY_PROPOSAL_INDEX", "sectionsByProposal");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.tables.proposal_table.as_deref(), Some("Proposal-dev"));
        assert_eq!(config.tables.section_by_proposal_index, "sectionsByProposal");
        assert_eq!(config.tables.question_by_section_index, "byProposalSectionId");
        assert!(config.tables.ensure_complete().is_ok());
    }

    #[test]
    fn test_empty_environment_loads_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.backend, StoreBackend::InMemory);
        assert_eq!(config.generation.org_prefix, "1CH");
        assert_eq!(config.tables.missing().len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port_and_log_format() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_table_env();
        env::set_var("PROMETHEUS__SERVER__PORT", "3000");
        env::set_var("PROMETHEUS__SERVER__LOG_FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
    }

    #[test]
    fn test_request_budget_must_cover_one_store_call() {
        let config = AppConfig {
            server: ServerConfig {
                request_timeout_ms: 500,
                ..Default::default()
            },
            store: StoreConfig {
                call_timeout_ms: 2_000,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::RequestTimeoutBelowCallTimeout {
                request_ms: 500,
                call_ms: 2_000,
            })
        );
    }

    #[test]
    fn test_postgres_backend_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_table_env();
        env::set_var("PROMETHEUS__STORE__BACKEND", "postgres");
        env::set_var("PROMETHEUS__STORE__DATABASE_URL", "postgresql://localhost/proposals");
        env::set_var("PROMETHEUS__STORE__CALL_TIMEOUT_MS", "750");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.store.backend, StoreBackend::Postgres);
        assert_eq!(config.store.call_timeout_ms, 750);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_postgres_backend_without_url_fails_validation() {
        let config = AppConfig {
            store: StoreConfig {
                backend: StoreBackend::Postgres,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
