//! Marketplace backend API client.
//!
//! # Architecture
//!
//! - The backend is the source of truth - NO local sync, direct API calls
//! - Every response uses the `{success, data, message, pagination}` envelope
//! - One logical operation per method; callers own any refresh after writes
//!
//! # Resilience
//!
//! The client applies a per-request timeout and retries transport-level
//! failures of idempotent GETs a configurable number of times with a fixed
//! backoff. Writes are never retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use a2z_storefront::api::MarketplaceClient;
//!
//! let client = MarketplaceClient::new(&config.api)?;
//!
//! // Look up a store and its first page of products
//! let store = client.get_store_by_slug(&slug).await?;
//! let page = client.get_store_products(&slug, &ListQuery::default()).await?;
//! ```

mod auth;
mod cart;
mod client;
mod orders;
mod products;
mod stores;
pub mod types;
mod zones;

pub use client::MarketplaceClient;
pub use types::*;

use thiserror::Error;

/// Generic failure message shown for transport-level errors.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Unable to reach GoFromA2zAfrica services. Please try again.";

/// Message shown when the backend rejects the session token.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Errors that can occur when calling the marketplace API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network, DNS, timeout).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend responded with `success: false`; carries the payload message.
    #[error("{0}")]
    Backend(String),

    /// Response body was not the expected JSON envelope.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-success HTTP status with a non-envelope body.
    #[error("HTTP {status}: {snippet}")]
    Status { status: u16, snippet: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend rejected the session token (HTTP 401).
    #[error("Session token rejected")]
    InvalidToken,

    /// A required parameter was missing; detected locally, no request issued.
    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),
}

impl ApiError {
    /// The message to render inline on a page.
    ///
    /// Backend messages are shown verbatim; transport-class failures collapse
    /// to a generic message so internals never leak into the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(message) | Self::NotFound(message) => message.clone(),
            Self::InvalidToken => SESSION_EXPIRED_MESSAGE.to_string(),
            Self::MissingParam(_) => "not found".to_string(),
            Self::Transport(_) | Self::Decode(_) | Self::Status { .. } => {
                TRANSPORT_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Whether this error should force a logout and redirect to login.
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_shown_verbatim() {
        let err = ApiError::Backend("Order not found".to_string());
        assert_eq!(err.user_message(), "Order not found");
        assert_eq!(err.to_string(), "Order not found");
    }

    #[test]
    fn test_status_error_collapses_to_generic_message() {
        let err = ApiError::Status {
            status: 502,
            snippet: "<html>bad gateway</html>".to_string(),
        };
        assert_eq!(err.user_message(), TRANSPORT_FAILURE_MESSAGE);
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_invalid_token_forces_logout() {
        let err = ApiError::InvalidToken;
        assert!(err.is_session_expired());
        assert_eq!(err.user_message(), SESSION_EXPIRED_MESSAGE);
    }

    #[test]
    fn test_missing_param_maps_to_not_found() {
        let err = ApiError::MissingParam("order id");
        assert_eq!(err.user_message(), "not found");
        assert!(!err.is_session_expired());
    }
}
