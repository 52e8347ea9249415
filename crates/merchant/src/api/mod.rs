//! Merchant-scoped marketplace API client.
//!
//! Every operation here acts on the logged-in merchant's own store and is
//! authenticated with the session token from the dashboard cookie. The
//! response envelope and resilience rules match the public storefront
//! client; only the endpoint surface differs.

mod client;
mod ops;
pub mod types;

pub use client::MerchantApiClient;
pub use types::*;

use thiserror::Error;

/// Generic failure message shown for transport-level errors.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Unable to reach GoFromA2zAfrica services. Please try again.";

/// Errors that can occur when calling the merchant API.
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

    /// Backend rejected the session token (HTTP 401).
    #[error("Session token rejected")]
    InvalidToken,
}

impl ApiError {
    /// The message to render inline on a dashboard page.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(message) => message.clone(),
            Self::InvalidToken => "Your session has expired. Please log in again.".to_string(),
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
        let err = ApiError::Backend("Product limit reached".to_string());
        assert_eq!(err.user_message(), "Product limit reached");
    }

    #[test]
    fn test_transport_class_collapses_to_generic() {
        let err = ApiError::Status {
            status: 500,
            snippet: "boom".to_string(),
        };
        assert_eq!(err.user_message(), TRANSPORT_FAILURE_MESSAGE);
    }
}
