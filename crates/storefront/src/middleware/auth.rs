//! Authentication extractors for account-area pages.
//!
//! The guard is a presence check of the stored session token only; the
//! backend validates the token on every subsequent API call and answers 401
//! if it is stale, which the error layer maps to a forced logout.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};

use a2z_core::types::SessionToken;

use crate::session::SessionContext;

/// Extractor that requires a live session token.
///
/// If no token is present (or it is expired), the request is redirected to
/// the login page before any network call is made.
///
/// # Example
///
/// ```rust,ignore
/// async fn account_page(
///     RequireAuth(token): RequireAuth,
/// ) -> impl IntoResponse {
///     // token is guaranteed present here
/// }
/// ```
pub struct RequireAuth(pub SessionToken);

/// Error returned when authentication is required but no token is stored.
pub enum AuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API/fragment requests).
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = SessionContext::from_headers(&parts.headers);

        context.token().cloned().map(Self).ok_or_else(|| {
            if parts.uri.path().starts_with("/api/") {
                AuthRejection::Unauthorized
            } else {
                AuthRejection::RedirectToLogin
            }
        })
    }
}

/// Extractor that optionally gets the live session token.
///
/// Unlike `RequireAuth`, this does not reject the request when no token is
/// stored; pages use it to switch the header between "Log in" and "Account".
pub struct OptionalAuth(pub Option<SessionToken>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = SessionContext::from_headers(&parts.headers);
        Ok(Self(context.token().cloned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::{Request, header};

    async fn guard(uri: &str, cookie: Option<&str>) -> Result<RequireAuth, AuthRejection> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(()).unwrap();
        let (mut parts, ()) = request.into_parts();
        RequireAuth::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_missing_token_redirects_before_any_request() {
        let Err(rejection) = guard("/account", None).await else {
            panic!("expected rejection");
        };
        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/login"
        );
    }

    #[tokio::test]
    async fn test_api_paths_get_unauthorized_instead_of_redirect() {
        let Err(rejection) = guard("/api/account/orders", None).await else {
            panic!("expected rejection");
        };
        assert_eq!(
            rejection.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_live_token_passes_through() {
        let result = guard("/account", Some("a2z_session=tok_live")).await;
        let RequireAuth(token) = result.ok().unwrap();
        assert_eq!(token.value(), "tok_live");
    }
}
