//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use a2z_core::fetch::SingleController;
use a2z_core::types::ProductId;

use crate::api::types::Product;
use crate::filters;
use crate::state::AppState;

/// Product detail display data for templates.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub compare_at_price: String,
    pub image_url: Option<String>,
    pub category: String,
    pub status_label: String,
    pub purchasable: bool,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            store_id: product.store_id.to_string(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.unit_price().display(),
            compare_at_price: product
                .compare_at_price
                .map(|amount| format!("{}{amount:.2}", product.currency.symbol()))
                .unwrap_or_default(),
            image_url: product.image_url.clone(),
            category: product.category.clone().unwrap_or_default(),
            status_label: product.status.label().to_string(),
            purchasable: product.status.is_purchasable(),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: Option<ProductDetailView>,
    pub error: String,
}

/// Display a product detail page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let mut product = SingleController::<Product>::new();
    if let Some(ticket) = product.set_key(Some(id.as_str())) {
        let outcome = state
            .api()
            .get_product_by_id(&ProductId::new(id))
            .await
            .map_err(|err| err.user_message());
        product.resolve(ticket, outcome);
    }

    ProductShowTemplate {
        product: product.state().entity().map(ProductDetailView::from),
        error: product.state().error().unwrap_or_default().to_string(),
    }
}
