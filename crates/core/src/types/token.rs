//! Session token carried by the browser.
//!
//! The backend issues the token at login; this layer only checks presence and
//! expiry before using it. Signature validation stays with the backend, which
//! rejects stale tokens on every call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An opaque session token with optional expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl SessionToken {
    /// Create a token from its opaque value and optional expiry.
    #[must_use]
    pub fn new(value: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// The opaque token value, as sent in the `Authorization` header.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Expiry timestamp, if the backend provided one.
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Whether the token is expired at the given instant.
    ///
    /// Tokens without an expiry are treated as live; the backend remains the
    /// authority and rejects them if they are not.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Whether the token is expired right now.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_token_without_expiry_is_live() {
        let token = SessionToken::new("tok_abc", None);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_token_expiry() {
        let now = Utc::now();
        let live = SessionToken::new("tok_abc", Some(now + Duration::hours(1)));
        let stale = SessionToken::new("tok_abc", Some(now - Duration::hours(1)));
        assert!(!live.is_expired_at(now));
        assert!(stale.is_expired_at(now));
    }

    #[test]
    fn test_expiry_boundary_is_expired() {
        let now = Utc::now();
        let token = SessionToken::new("tok_abc", Some(now));
        assert!(token.is_expired_at(now));
    }
}
