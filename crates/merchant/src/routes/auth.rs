//! Merchant login and logout route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::api::types::LoginInput;
use crate::filters;
use crate::session::{
    COOKIE_MAX_AGE_SECS, SESSION_COOKIE, SESSION_EXPIRY_COOKIE, clear_cookie, set_cookie,
};
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: String,
    pub email: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate {
        error: String::new(),
        email: String::new(),
    }
}

/// Login action: exchange merchant credentials for a session token.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let input = LoginInput {
        email: form.email.clone(),
        password: form.password,
    };

    match state.api().login(&input).await {
        Ok(session) => {
            let token = session.into_token();
            let secure = state.config().is_secure();

            let mut cookies = vec![(
                header::SET_COOKIE,
                set_cookie(SESSION_COOKIE, token.value(), COOKIE_MAX_AGE_SECS, secure),
            )];
            if let Some(expires_at) = token.expires_at() {
                cookies.push((
                    header::SET_COOKIE,
                    set_cookie(
                        SESSION_EXPIRY_COOKIE,
                        &expires_at.timestamp().to_string(),
                        COOKIE_MAX_AGE_SECS,
                        secure,
                    ),
                ));
            }

            (AppendHeaders(cookies), Redirect::to("/")).into_response()
        }
        Err(err) => LoginTemplate {
            error: err.user_message(),
            email: form.email,
        }
        .into_response(),
    }
}

/// Logout action: clear the session cookies.
#[instrument]
pub async fn logout() -> impl IntoResponse {
    let cookies = vec![
        (header::SET_COOKIE, clear_cookie(SESSION_COOKIE)),
        (header::SET_COOKIE, clear_cookie(SESSION_EXPIRY_COOKIE)),
    ];

    (AppendHeaders(cookies), Redirect::to("/login"))
}
