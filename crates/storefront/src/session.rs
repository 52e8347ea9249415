//! Session context read from browser cookies.
//!
//! The backend issues the session token at login; the browser holds it in an
//! `HttpOnly` cookie. Every controller that needs auth receives an explicit
//! [`SessionContext`] extractor instead of reading storage ad hoc. Presence
//! and expiry are checked here; signature validation stays with the backend.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use chrono::DateTime;

use a2z_core::types::SessionToken;

/// Cookie holding the opaque session token.
pub const SESSION_COOKIE: &str = "a2z_session";

/// Cookie holding the token expiry as unix seconds.
pub const SESSION_EXPIRY_COOKIE: &str = "a2z_session_exp";

/// Cookie holding the shopper's cart id.
pub const CART_COOKIE: &str = "a2z_cart";

/// Cookie lifetime for the session and cart (30 days).
pub const COOKIE_MAX_AGE_SECS: i64 = 30 * 24 * 60 * 60;

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

/// Typed session context, built once per request from cookies.
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
    ///
    /// An expired token is treated the same as an absent one; the next login
    /// overwrites the cookie.
    #[must_use]
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref().filter(|token| !token.is_expired())
    }

    /// Whether a live session is present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
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

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_read_cookie_among_many() {
        let headers = headers_with_cookie("other=1; a2z_session=tok_abc; trailing=x");
        assert_eq!(
            read_cookie(&headers, SESSION_COOKIE),
            Some("tok_abc".to_string())
        );
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_context_without_cookie_is_logged_out() {
        let context = SessionContext::from_headers(&HeaderMap::new());
        assert!(!context.is_logged_in());
        assert!(context.token().is_none());
    }

    #[test]
    fn test_context_with_live_token() {
        let exp = Utc::now().timestamp() + 3600;
        let headers = headers_with_cookie(&format!("a2z_session=tok_abc; a2z_session_exp={exp}"));
        let context = SessionContext::from_headers(&headers);
        assert!(context.is_logged_in());
        assert_eq!(context.token().unwrap().value(), "tok_abc");
    }

    #[test]
    fn test_expired_token_is_treated_as_absent() {
        let exp = Utc::now().timestamp() - 3600;
        let headers = headers_with_cookie(&format!("a2z_session=tok_abc; a2z_session_exp={exp}"));
        let context = SessionContext::from_headers(&headers);
        assert!(!context.is_logged_in());
    }

    #[test]
    fn test_token_without_expiry_cookie_is_live() {
        let headers = headers_with_cookie("a2z_session=tok_abc");
        let context = SessionContext::from_headers(&headers);
        assert!(context.is_logged_in());
    }

    #[test]
    fn test_set_cookie_format() {
        let cookie = set_cookie(SESSION_COOKIE, "tok", 60, true);
        assert_eq!(
            cookie,
            "a2z_session=tok; Path=/; Max-Age=60; HttpOnly; SameSite=Lax; Secure"
        );
        let cookie = clear_cookie(CART_COOKIE);
        assert!(cookie.contains("Max-Age=0"));
    }
}
