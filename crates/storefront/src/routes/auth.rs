//! Login and logout route handlers.
//!
//! Session issuance is the backend's job: the login action forwards
//! credentials to `/auth/login` and stores the returned token in cookies.
//! Logout only clears the cookies; the token dies on the backend's schedule.

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

use a2z_core::fetch::MutationState;

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

/// Login action: exchange credentials for a session token.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let mut mutation = MutationState::default();
    mutation.begin();

    let input = LoginInput {
        email: form.email.clone(),
        password: form.password,
    };

    match state.api().login(&input).await {
        Ok(session) => {
            mutation.succeed();
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

            (AppendHeaders(cookies), Redirect::to("/account")).into_response()
        }
        Err(err) => {
            mutation.fail(err.user_message());
            LoginTemplate {
                error: mutation.error().unwrap_or_default().to_string(),
                email: form.email,
            }
            .into_response()
        }
    }
}

/// Logout action: clear the session cookies.
#[instrument]
pub async fn logout() -> impl IntoResponse {
    let cookies = vec![
        (header::SET_COOKIE, clear_cookie(SESSION_COOKIE)),
        (header::SET_COOKIE, clear_cookie(SESSION_EXPIRY_COOKIE)),
    ];

    (AppendHeaders(cookies), Redirect::to("/"))
}
