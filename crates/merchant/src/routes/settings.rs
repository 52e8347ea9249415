//! Store settings page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tracing::instrument;

use a2z_core::fetch::MutationState;
use a2z_core::types::CurrencyCode;

use crate::api::types::StoreSettings;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireMerchantAuth;
use crate::state::AppState;

/// Settings form display data.
#[derive(Clone, Default)]
pub struct SettingsView {
    pub name: String,
    pub description: String,
    pub city: String,
    pub country: String,
    pub pickup_address: String,
    pub currency: String,
}

impl From<&StoreSettings> for SettingsView {
    fn from(settings: &StoreSettings) -> Self {
        Self {
            name: settings.name.clone(),
            description: settings.description.clone().unwrap_or_default(),
            city: settings.city.clone(),
            country: settings.country.clone(),
            pickup_address: settings.pickup_address.clone().unwrap_or_default(),
            currency: settings.currency.code().to_string(),
        }
    }
}

/// Settings page template.
#[derive(Template, WebTemplate)]
#[template(path = "settings/show.html")]
pub struct SettingsTemplate {
    pub settings: SettingsView,
    pub error: String,
    pub saved: bool,
}

/// Settings form data.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub name: String,
    pub description: String,
    pub city: String,
    pub country: String,
    pub pickup_address: String,
    pub currency: String,
}

fn parse_currency(raw: &str) -> CurrencyCode {
    serde_json::from_value(serde_json::Value::String(raw.to_string())).unwrap_or_default()
}

/// Display the settings form.
#[instrument(skip(state, token))]
pub async fn show(
    State(state): State<AppState>,
    RequireMerchantAuth(token): RequireMerchantAuth,
) -> Result<SettingsTemplate> {
    match state.api().get_settings(&token).await {
        Ok(settings) => Ok(SettingsTemplate {
            settings: SettingsView::from(&settings),
            error: String::new(),
            saved: false,
        }),
        Err(err) if err.is_session_expired() => Err(err.into()),
        Err(err) => Ok(SettingsTemplate {
            settings: SettingsView::default(),
            error: err.user_message(),
            saved: false,
        }),
    }
}

/// Save the settings form.
///
/// The page re-renders from the backend's echoed profile, never from the
/// submitted form data.
#[instrument(skip(state, token, form))]
pub async fn update(
    State(state): State<AppState>,
    RequireMerchantAuth(token): RequireMerchantAuth,
    Form(form): Form<SettingsForm>,
) -> Result<SettingsTemplate> {
    let mut mutation = MutationState::default();
    mutation.begin();

    if form.name.trim().is_empty() {
        mutation.fail("Store name is required");
        return Ok(SettingsTemplate {
            settings: SettingsView {
                name: form.name,
                description: form.description,
                city: form.city,
                country: form.country,
                pickup_address: form.pickup_address,
                currency: form.currency,
            },
            error: mutation.error().unwrap_or_default().to_string(),
            saved: false,
        });
    }

    let input = StoreSettings {
        name: form.name.trim().to_string(),
        description: Some(form.description).filter(|d| !d.is_empty()),
        city: form.city,
        country: form.country,
        pickup_address: Some(form.pickup_address).filter(|a| !a.is_empty()),
        currency: parse_currency(&form.currency),
    };

    match state.api().update_settings(&token, &input).await {
        Ok(saved) => {
            mutation.succeed();
            Ok(SettingsTemplate {
                settings: SettingsView::from(&saved),
                error: String::new(),
                saved: true,
            })
        }
        Err(err) if err.is_session_expired() => Err(err.into()),
        Err(err) => {
            mutation.fail(err.user_message());
            Ok(SettingsTemplate {
                settings: SettingsView::from(&input),
                error: mutation.error().unwrap_or_default().to_string(),
                saved: false,
            })
        }
    }
}
