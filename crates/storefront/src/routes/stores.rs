//! Store page route handlers.
//!
//! The store page is the canonical paginated-list surface: the initial
//! render drives a [`ListController`] through its first load, and the "Load
//! more" button fetches subsequent pages as HTMX fragments that append to
//! the grid.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use a2z_core::fetch::{
    ListController, ListQuery, MutationState, Page, SingleController, SortOrder,
};
use a2z_core::types::StoreSlug;

use crate::api::types::{Product, RatingInput, Store};
use crate::filters;
use crate::state::AppState;

/// Products shown per page on the store grid.
const PRODUCTS_PER_PAGE: u32 = 12;

/// Store display data for templates.
#[derive(Clone)]
pub struct StoreView {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub city_country: String,
    pub rating_display: String,
    pub product_count: u32,
}

impl From<&Store> for StoreView {
    fn from(store: &Store) -> Self {
        Self {
            name: store.name.clone(),
            slug: store.slug.to_string(),
            description: store.description.clone().unwrap_or_default(),
            logo_url: store.logo_url.clone(),
            city_country: format!("{}, {}", store.city, store.country),
            rating_display: store.rating.map_or_else(
                || "No ratings yet".to_string(),
                |rating| format!("{rating:.1} ★ ({})", store.rating_count),
            ),
            product_count: store.product_count,
        }
    }
}

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub compare_at_price: String,
    pub image_url: Option<String>,
    pub status_label: String,
    pub purchasable: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.unit_price().display(),
            compare_at_price: product
                .compare_at_price
                .map(|amount| format!("{}{amount:.2}", product.currency.symbol()))
                .unwrap_or_default(),
            image_url: product.image_url.clone(),
            status_label: product.status.label().to_string(),
            purchasable: product.status.is_purchasable(),
        }
    }
}

/// Query parameters accepted by the store page and its product fragment.
#[derive(Debug, Deserialize)]
pub struct ProductGridQuery {
    pub page: Option<u32>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ProductGridQuery {
    fn to_list_query(&self) -> ListQuery {
        ListQuery {
            page: self.page.unwrap_or(1).max(1),
            limit: PRODUCTS_PER_PAGE,
            category: self.category.clone().filter(|c| !c.is_empty()),
            sort_by: self.sort_by.clone().filter(|s| !s.is_empty()),
            sort_order: match self.sort_order.as_deref() {
                Some("desc") => Some(SortOrder::Desc),
                Some("asc") => Some(SortOrder::Asc),
                _ => None,
            },
        }
    }
}

/// Store page template.
#[derive(Template, WebTemplate)]
#[template(path = "stores/show.html")]
pub struct StoreShowTemplate {
    pub store: Option<StoreView>,
    pub store_error: String,
    pub products: Vec<ProductCardView>,
    pub products_error: String,
    pub has_more: bool,
    pub next_page: u32,
    pub slug: String,
    pub category: String,
}

/// Product grid fragment template (for HTMX load-more).
#[derive(Template, WebTemplate)]
#[template(path = "partials/store_products.html")]
pub struct StoreProductsTemplate {
    pub products: Vec<ProductCardView>,
    pub products_error: String,
    pub has_more: bool,
    pub next_page: u32,
    pub slug: String,
    pub category: String,
}

/// Rating result fragment template (for HTMX form swap).
#[derive(Template, WebTemplate)]
#[template(path = "partials/rating_result.html")]
pub struct RatingResultTemplate {
    pub message: String,
    pub is_error: bool,
}

/// Display a store page with the first page of its products.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ProductGridQuery>,
) -> impl IntoResponse {
    // Store header: a single resource keyed by the slug route parameter
    let mut store = SingleController::<Store>::new();
    if let Some(ticket) = store.set_key(Some(slug.as_str())) {
        let outcome = match StoreSlug::parse(slug.clone()) {
            Ok(parsed) => state
                .api()
                .get_store_by_slug(&parsed)
                .await
                .map_err(|err| err.user_message()),
            Err(_) => Err("not found".to_string()),
        };
        store.resolve(ticket, outcome);
    }

    // Product grid: a fresh list controller driven through its initial load
    let mut products = ListController::<Product>::new(query.to_list_query());
    let list_query = query.to_list_query();
    if store.state().entity().is_some() {
        let ticket = products.begin();
        if let Ok(parsed) = StoreSlug::parse(slug.clone()) {
            let outcome = state
                .api()
                .get_store_products(&parsed, products.query())
                .await
                .map_err(|err| err.user_message());
            products.resolve(ticket, outcome);
        }
    }

    StoreShowTemplate {
        store: store.state().entity().map(StoreView::from),
        store_error: store.state().error().unwrap_or_default().to_string(),
        products: products.items().iter().map(ProductCardView::from).collect(),
        products_error: products.error().unwrap_or_default().to_string(),
        has_more: products.has_more(),
        next_page: products.query().page + 1,
        slug,
        category: list_query.category.unwrap_or_default(),
    }
}

/// Product grid page fragment (HTMX load-more target).
///
/// The browser appends these cards after the existing grid; the fragment
/// carries the next "Load more" control when further pages exist.
#[instrument(skip(state))]
pub async fn products_fragment(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ProductGridQuery>,
) -> impl IntoResponse {
    let list_query = query.to_list_query();
    let category = list_query.category.clone().unwrap_or_default();
    let page = list_query.page;

    let (products, error, has_more) = match StoreSlug::parse(slug.clone()) {
        Ok(parsed) => match state.api().get_store_products(&parsed, &list_query).await {
            Ok(Page { items, pagination }) => (
                items.iter().map(ProductCardView::from).collect(),
                String::new(),
                pagination.is_some_and(|p| p.has_more),
            ),
            Err(err) => (Vec::new(), err.user_message(), false),
        },
        Err(_) => (Vec::new(), "not found".to_string(), false),
    };

    StoreProductsTemplate {
        products,
        products_error: error,
        has_more,
        next_page: page + 1,
        slug,
        category,
    }
}

/// Rating form data.
#[derive(Debug, Deserialize)]
pub struct RateForm {
    pub score: u8,
    pub comment: Option<String>,
}

/// Submit a store rating (HTMX form swap).
///
/// The store snapshot rendered on the page is not refreshed; the shopper
/// sees the new average on their next visit.
#[instrument(skip(state, form), fields(score = form.score))]
pub async fn rate(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    axum::Form(form): axum::Form<RateForm>,
) -> impl IntoResponse {
    let mut mutation = MutationState::default();
    mutation.begin();

    let outcome = match StoreSlug::parse(slug) {
        Ok(parsed) => {
            let input = RatingInput {
                score: form.score.min(5),
                comment: form.comment.filter(|c| !c.is_empty()),
            };
            state
                .api()
                .rate_store(&parsed, &input)
                .await
                .map(|_| ())
                .map_err(|err| err.user_message())
        }
        Err(_) => Err("not found".to_string()),
    };
    mutation.apply(&outcome);

    match mutation.error() {
        Some(message) => RatingResultTemplate {
            message: message.to_string(),
            is_error: true,
        },
        None => RatingResultTemplate {
            message: "Thanks for rating this store!".to_string(),
            is_error: false,
        },
    }
}
