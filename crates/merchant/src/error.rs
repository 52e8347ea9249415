//! Unified error handling with Sentry integration.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::api::ApiError;
use crate::session::{SESSION_COOKIE, SESSION_EXPIRY_COOKIE, clear_cookie};

/// Application-level error type for the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    /// Merchant API operation failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // A rejected token means the session is gone: clear the cookies and
        // send the merchant back to the login page.
        if matches!(&self, Self::Api(err) if err.is_session_expired()) {
            return forced_logout();
        }

        // Capture server-side failures to Sentry
        if matches!(
            self,
            Self::Internal(_)
                | Self::Api(
                    ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Status { .. }
                )
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Api(err) => match err {
                ApiError::Backend(_) => StatusCode::NOT_FOUND,
                ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            Self::Api(err) => err.user_message(),
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Clear the session cookies and redirect to the login page.
fn forced_logout() -> Response {
    let mut response = Redirect::to("/login").into_response();
    for cookie in [clear_cookie(SESSION_COOKIE), clear_cookie(SESSION_EXPIRY_COOKIE)] {
        if let Ok(value) = header::HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    response
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_forces_logout() {
        let response = AppError::Api(ApiError::InvalidToken).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(response.headers().contains_key(header::SET_COOKIE));
    }

    #[test]
    fn test_backend_error_status() {
        let response = AppError::Api(ApiError::Backend("nope".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
