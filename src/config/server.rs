//! HTTP listener, request budget and log output settings

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Settings for the HTTP front of the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// `0` binds an ephemeral port.
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub log_format: LogFormat,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Budget for a whole request, in milliseconds. A generation spends it on
    /// one proposal read, one section query and a question query per section.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Comma-separated browser origins. Unset or empty allows any origin.
    #[serde(default)]
    pub allowed_origins: Option<String>,
}

/// Log line format.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Resolved CORS origin policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn allowed_origins(&self) -> AllowedOrigins {
        let origins: Vec<String> = self
            .allowed_origins
            .iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();
        if origins.is_empty() {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.socket_addr()?;
        if self.request_timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if let AllowedOrigins::List(origins) = self.allowed_origins() {
            if let Some(bad) = origins
                .iter()
                .find(|o| !o.starts_with("http://") && !o.starts_with("https://"))
            {
                return Err(ValidationError::InvalidOrigin(bad.clone()));
            }
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            request_timeout_ms: default_request_timeout_ms(),
            allowed_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,prometheus_proposals=debug,tower_http=info,sqlx=warn".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_origins(raw: &str) -> ServerConfig {
        ServerConfig {
            allowed_origins: Some(raw.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_bind_all_interfaces_with_pretty_logs() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.allowed_origins(), AllowedOrigins::Any);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_origin_list_allows_any() {
        assert_eq!(with_origins(" , ").allowed_origins(), AllowedOrigins::Any);
    }

    #[test]
    fn origin_list_is_trimmed() {
        assert_eq!(
            with_origins("http://localhost:5173, https://proposals.example.com,").allowed_origins(),
            AllowedOrigins::List(vec![
                "http://localhost:5173".to_string(),
                "https://proposals.example.com".to_string(),
            ])
        );
    }

    #[test]
    fn origin_without_scheme_is_rejected() {
        assert_eq!(
            with_origins("https://ok.example.com, proposals.example.com").validate(),
            Err(ValidationError::InvalidOrigin("proposals.example.com".to_string()))
        );
    }

    #[test]
    fn unparseable_host_is_rejected() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidHost(_))));
    }

    #[test]
    fn zero_request_budget_is_rejected() {
        let config = ServerConfig {
            request_timeout_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }
}
