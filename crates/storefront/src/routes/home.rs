//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::api::types::Store;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::state::AppState;

/// Number of stores featured on the home page.
const FEATURED_STORE_COUNT: u32 = 8;

/// Store display data for templates.
#[derive(Clone)]
pub struct StoreCardView {
    pub slug: String,
    pub name: String,
    pub city_country: String,
    pub logo_url: Option<String>,
    pub rating_display: String,
    pub product_count: u32,
}

impl From<&Store> for StoreCardView {
    fn from(store: &Store) -> Self {
        Self {
            slug: store.slug.to_string(),
            name: store.name.clone(),
            city_country: format!("{}, {}", store.city, store.country),
            logo_url: store.logo_url.clone(),
            rating_display: store.rating.map_or_else(
                || "No ratings yet".to_string(),
                |rating| format!("{rating:.1} ★ ({})", store.rating_count),
            ),
            product_count: store.product_count,
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub stores: Vec<StoreCardView>,
    pub error: String,
    pub logged_in: bool,
}

/// Display the home page with featured stores.
#[instrument(skip(state, auth))]
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(auth): OptionalAuth,
) -> impl IntoResponse {
    let (stores, error) = match state.api().get_featured_stores(FEATURED_STORE_COUNT).await {
        Ok(stores) => (stores.iter().map(StoreCardView::from).collect(), String::new()),
        Err(err) => {
            tracing::warn!("Failed to fetch featured stores: {err}");
            (Vec::new(), err.user_message())
        }
    };

    HomeTemplate {
        stores,
        error,
        logged_in: auth.is_some(),
    }
}
