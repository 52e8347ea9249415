//! Product list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::instrument;

use a2z_core::fetch::{ListController, ListQuery, SingleController, SortOrder};
use a2z_core::types::{Price, ProductId};

use crate::api::types::MerchantProduct;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireMerchantAuth;
use crate::state::AppState;

/// Products shown per dashboard page.
const PRODUCTS_PER_PAGE: u32 = 25;

/// Product row display data for templates.
#[derive(Clone)]
pub struct ProductRowView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub category: String,
    pub status_label: String,
    pub stock: String,
    pub listed_on: String,
}

impl From<&MerchantProduct> for ProductRowView {
    fn from(product: &MerchantProduct) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: Price::new(product.price, product.currency).display(),
            category: product.category.clone().unwrap_or_default(),
            status_label: product.status.label().to_string(),
            stock: product
                .stock_quantity
                .map_or_else(|| "-".to_string(), |quantity| quantity.to_string()),
            listed_on: product.created_at.format("%-d %b %Y").to_string(),
        }
    }
}

/// Product list query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub page: Option<u32>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Product list page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductRowView>,
    pub error: String,
    pub page: u32,
    pub has_more: bool,
    pub category: String,
}

/// Display the product list.
#[instrument(skip(state, token))]
pub async fn index(
    State(state): State<AppState>,
    RequireMerchantAuth(token): RequireMerchantAuth,
    Query(query): Query<ProductsQuery>,
) -> Result<ProductsIndexTemplate> {
    let page = query.page.unwrap_or(1).max(1);
    let mut products = ListController::<MerchantProduct>::new(ListQuery {
        page,
        limit: PRODUCTS_PER_PAGE,
        category: query.category.clone().filter(|c| !c.is_empty()),
        sort_by: query.sort_by.clone().filter(|s| !s.is_empty()),
        sort_order: match query.sort_order.as_deref() {
            Some("desc") => Some(SortOrder::Desc),
            Some("asc") => Some(SortOrder::Asc),
            _ => None,
        },
    });

    let ticket = products.begin();
    let result = state.api().list_products(&token, products.query()).await;
    match result {
        Ok(page_data) => {
            products.resolve(ticket, Ok(page_data));
        }
        Err(err) if err.is_session_expired() => return Err(err.into()),
        Err(err) => {
            products.resolve(ticket, Err(err.user_message()));
        }
    }

    Ok(ProductsIndexTemplate {
        products: products.items().iter().map(ProductRowView::from).collect(),
        error: products.error().unwrap_or_default().to_string(),
        page,
        has_more: products.has_more(),
        category: query.category.unwrap_or_default(),
    })
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: Option<ProductRowView>,
    pub error: String,
}

/// Display a single product.
#[instrument(skip(state, token))]
pub async fn show(
    State(state): State<AppState>,
    RequireMerchantAuth(token): RequireMerchantAuth,
    Path(id): Path<String>,
) -> Result<ProductShowTemplate> {
    let mut product = SingleController::<MerchantProduct>::new();
    if let Some(ticket) = product.set_key(Some(id.as_str())) {
        let result = state.api().get_product(&token, &ProductId::new(id)).await;
        match result {
            Ok(found) => {
                product.resolve(ticket, Ok(found));
            }
            Err(err) if err.is_session_expired() => return Err(err.into()),
            Err(err) => {
                product.resolve(ticket, Err(err.user_message()));
            }
        }
    }

    Ok(ProductShowTemplate {
        product: product.state().entity().map(ProductRowView::from),
        error: product.state().error().unwrap_or_default().to_string(),
    })
}
