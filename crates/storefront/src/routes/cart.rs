//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart id lives in a browser cookie; the cart itself always belongs to
//! the backend and is re-fetched whole after every write.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, header},
    response::{AppendHeaders, IntoResponse},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use a2z_core::fetch::MutationState;
use a2z_core::types::{CartId, CartItemId, CurrencyCode, Price, ProductId};

use crate::api::types::{AddCartItemInput, Cart};
use crate::filters;
use crate::session::{CART_COOKIE, COOKIE_MAX_AGE_SECS, read_cookie, set_cookie};
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image_url: Option<String>,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: Price::new(Decimal::ZERO, CurrencyCode::default()).display(),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items
                .iter()
                .map(|item| CartItemView {
                    id: item.id.to_string(),
                    product_id: item.product_id.to_string(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    price: Price::new(item.unit_price, cart.currency).display(),
                    line_price: Price::new(item.line_total, cart.currency).display(),
                    image_url: item.image_url.clone(),
                })
                .collect(),
            subtotal: Price::new(cart.subtotal, cart.currency).display(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Cookie Helpers
// =============================================================================

/// Get the cart ID from the request cookies.
fn cart_id_from(headers: &HeaderMap) -> Option<CartId> {
    read_cookie(headers, CART_COOKIE)
        .filter(|value| !value.is_empty())
        .map(CartId::new)
}

/// Fetch the cart for display, falling back to an empty view.
async fn fetch_cart_view(state: &AppState, cart_id: Option<&CartId>) -> (CartView, String) {
    match cart_id {
        Some(cart_id) => match state.api().get_cart(cart_id).await {
            Ok(cart) => (CartView::from(&cart), String::new()),
            Err(err) => {
                tracing::warn!("Failed to fetch cart {cart_id}: {err}");
                (CartView::empty(), err.user_message())
            }
        },
        None => (CartView::empty(), String::new()),
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub item_id: String,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub item_id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub error: String,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
    pub error: String,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state, headers))]
pub async fn show(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let cart_id = cart_id_from(&headers);
    let (cart, error) = fetch_cart_view(&state, cart_id.as_ref()).await;

    CartShowTemplate { cart, error }
}

/// Add item to cart (HTMX).
///
/// Creates a cart on first use and stores its id in a cookie. The response
/// is the refreshed count badge; the write itself never mutates the
/// rendered snapshot.
#[instrument(skip(state, headers, form))]
pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AddToCartForm>,
) -> impl IntoResponse {
    let mut mutation = MutationState::default();
    mutation.begin();

    // Reuse the cookie cart or create one on first add
    let (cart_id, new_cookie) = match cart_id_from(&headers) {
        Some(cart_id) => (Some(cart_id), None),
        None => match state.api().create_cart().await {
            Ok(cart) => {
                let cookie = set_cookie(
                    CART_COOKIE,
                    cart.id.as_str(),
                    COOKIE_MAX_AGE_SECS,
                    state.config().is_secure(),
                );
                (Some(cart.id), Some(cookie))
            }
            Err(err) => {
                mutation.fail(err.user_message());
                (None, None)
            }
        },
    };

    if let Some(cart_id) = &cart_id {
        let input = AddCartItemInput {
            product_id: ProductId::new(form.product_id),
            quantity: form.quantity.unwrap_or(1).max(1),
        };
        let outcome = state
            .api()
            .add_cart_item(cart_id, &input)
            .await
            .map(|_| ())
            .map_err(|err| err.user_message());
        mutation.apply(&outcome);
    }

    if let Some(message) = mutation.error() {
        tracing::warn!("Add to cart failed: {message}");
    }

    // Explicit re-fetch: the count badge reflects the backend's cart
    let (cart, _) = fetch_cart_view(&state, cart_id.as_ref()).await;

    let cookies = new_cookie
        .map(|cookie| AppendHeaders(vec![(header::SET_COOKIE, cookie)]))
        .unwrap_or_else(|| AppendHeaders(Vec::new()));

    (
        cookies,
        CartCountTemplate {
            count: cart.item_count,
        },
    )
}

/// Update item quantity (HTMX).
#[instrument(skip(state, headers, form))]
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<UpdateCartForm>,
) -> impl IntoResponse {
    let cart_id = cart_id_from(&headers);
    let mut mutation = MutationState::default();
    mutation.begin();

    match &cart_id {
        Some(cart_id) => {
            let outcome = state
                .api()
                .update_cart_item(cart_id, &CartItemId::new(form.item_id), form.quantity.max(1))
                .await
                .map(|_| ())
                .map_err(|err| err.user_message());
            mutation.apply(&outcome);
        }
        None => mutation.fail("Your cart is empty"),
    }

    let (cart, fetch_error) = fetch_cart_view(&state, cart_id.as_ref()).await;
    let error = mutation
        .error()
        .map(ToString::to_string)
        .unwrap_or(fetch_error);

    CartItemsTemplate { cart, error }
}

/// Remove item from cart (HTMX).
#[instrument(skip(state, headers, form))]
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<RemoveFromCartForm>,
) -> impl IntoResponse {
    let cart_id = cart_id_from(&headers);
    let mut mutation = MutationState::default();
    mutation.begin();

    match &cart_id {
        Some(cart_id) => {
            let outcome = state
                .api()
                .remove_cart_item(cart_id, &CartItemId::new(form.item_id))
                .await
                .map(|_| ())
                .map_err(|err| err.user_message());
            mutation.apply(&outcome);
        }
        None => mutation.fail("Your cart is empty"),
    }

    let (cart, fetch_error) = fetch_cart_view(&state, cart_id.as_ref()).await;
    let error = mutation
        .error()
        .map(ToString::to_string)
        .unwrap_or(fetch_error);

    CartItemsTemplate { cart, error }
}

/// Cart count badge (HTMX).
#[instrument(skip(state, headers))]
pub async fn count(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let cart_id = cart_id_from(&headers);
    let (cart, _) = fetch_cart_view(&state, cart_id.as_ref()).await;

    CartCountTemplate {
        count: cart.item_count,
    }
}
