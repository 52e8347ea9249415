//! Merchant dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `A2Z_API_BASE_URL` - Base URL of the marketplace backend API
//! - `MERCHANT_BASE_URL` - Public URL for the dashboard
//!
//! ## Optional
//! - `A2Z_API_KEY` - Server-to-server API key sent as `X-A2z-Api-Key`
//! - `A2Z_API_TIMEOUT_SECS` - Per-request timeout (default: 10)
//! - `A2Z_API_MAX_RETRIES` - Extra attempts for idempotent GETs (default: 2)
//! - `A2Z_API_RETRY_BACKOFF_MS` - Pause between attempts (default: 250)
//! - `MERCHANT_HOST` - Bind address (default: 127.0.0.1)
//! - `MERCHANT_PORT` - Listen port (default: 3001)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Merchant dashboard configuration.
#[derive(Debug, Clone)]
pub struct MerchantConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the dashboard
    pub base_url: String,
    /// Marketplace backend API configuration
    pub api: BackendApiConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Marketplace backend API configuration for the dashboard.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct BackendApiConfig {
    /// Base URL of the backend API
    pub base_url: String,
    /// Server-to-server API key, sent as `X-A2z-Api-Key` when present
    pub api_key: Option<SecretString>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Extra attempts for idempotent GETs after a transport failure
    pub max_retries: u32,
    /// Pause between attempts in milliseconds
    pub retry_backoff_ms: u64,
}

impl BackendApiConfig {
    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Pause between retry attempts.
    #[must_use]
    pub const fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// Expose the API key value, if configured.
    #[must_use]
    pub fn api_key_value(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }
}

impl std::fmt::Debug for BackendApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .finish()
    }
}

impl MerchantConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("MERCHANT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MERCHANT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MERCHANT_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MERCHANT_PORT".to_string(), e.to_string()))?;
        let base_url = get_required_env("MERCHANT_BASE_URL")?;

        let api = BackendApiConfig::from_env()?;

        Ok(Self {
            host,
            port,
            base_url,
            api,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the dashboard is served over HTTPS (controls cookie flags).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl BackendApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_required_env("A2Z_API_BASE_URL")?;
        url::Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("A2Z_API_BASE_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: get_optional_env("A2Z_API_KEY").map(SecretString::from),
            timeout_secs: parse_u64("A2Z_API_TIMEOUT_SECS", 10)?,
            max_retries: u32::try_from(parse_u64("A2Z_API_MAX_RETRIES", 2)?).map_err(|e| {
                ConfigError::InvalidEnvVar("A2Z_API_MAX_RETRIES".to_string(), e.to_string())
            })?,
            retry_backoff_ms: parse_u64("A2Z_API_RETRY_BACKOFF_MS", 250)?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_u64(key: &str, default: u64) -> Result<u64, ConfigError> {
    match get_optional_env(key) {
        Some(value) => value
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_and_cookie_flags() {
        let config = MerchantConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 3001,
            base_url: "https://merchants.gofroma2zafrica.com".to_string(),
            api: BackendApiConfig {
                base_url: "http://localhost:4000".to_string(),
                api_key: None,
                timeout_secs: 10,
                max_retries: 2,
                retry_backoff_ms: 250,
            },
            sentry_dsn: None,
            sentry_environment: None,
        };

        assert_eq!(config.socket_addr().port(), 3001);
        assert!(config.is_secure());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let api = BackendApiConfig {
            base_url: "http://localhost:4000".to_string(),
            api_key: Some(SecretString::from("mJ4$kW8!qZ1@xC5^")),
            timeout_secs: 10,
            max_retries: 2,
            retry_backoff_ms: 250,
        };
        let output = format!("{api:?}");
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("mJ4$kW8"));
    }
}
