//! Merchant session context read from browser cookies.
//!
//! Same scheme as the storefront, with dashboard-scoped cookie names so a
//! merchant can stay logged into both apps independently.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use chrono::DateTime;

use a2z_core::types::SessionToken;

/// Cookie holding the opaque merchant session token.
pub const SESSION_COOKIE: &str = "a2z_merchant_session";

/// Cookie holding the token expiry as unix seconds.
pub const SESSION_EXPIRY_COOKIE: &str = "a2z_merchant_session_exp";

/// Cookie lifetime for the session (14 days).
pub const COOKIE_MAX_AGE_SECS: i64 = 14 * 24 * 60 * 60;

/// Read a cookie value from request headers.
#[must_use]
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Build a `Set-Cookie` value.
#[must_use]
pub fn set_cookie(name: &str, value: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{name}={value}; Path=/; Max-Age={max_age_secs}; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build a `Set-Cookie` value that expires a cookie immediately.
#[must_use]
pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Typed session context for the dashboard.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Option<SessionToken>,
}

impl SessionContext {
    /// Build the context from request headers.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let value = read_cookie(headers, SESSION_COOKIE).filter(|v| !v.is_empty());
        let expires_at = read_cookie(headers, SESSION_EXPIRY_COOKIE)
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0));

        Self {
            token: value.map(|v| SessionToken::new(v, expires_at)),
        }
    }

    /// The live session token, if present and not expired.
    #[must_use]
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref().filter(|token| !token.is_expired())
    }
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Utc;

    #[test]
    fn test_expired_merchant_session_is_absent() {
        let exp = Utc::now().timestamp() - 60;
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!(
                "a2z_merchant_session=tok; a2z_merchant_session_exp={exp}"
            ))
            .unwrap(),
        );
        assert!(SessionContext::from_headers(&headers).token().is_none());
    }

    #[test]
    fn test_live_merchant_session() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("a2z_merchant_session=tok_m"),
        );
        let context = SessionContext::from_headers(&headers);
        assert_eq!(context.token().unwrap().value(), "tok_m");
    }
}
