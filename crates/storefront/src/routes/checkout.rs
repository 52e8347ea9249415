//! Checkout route handlers.
//!
//! Checkout renders the cart alongside the delivery zone list and posts a
//! single order-creation call. Zone pricing is the backend's; the form only
//! echoes the fees it was given.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use a2z_core::fetch::MutationState;
use a2z_core::types::{CartId, Price, ZoneId};

use crate::api::types::{CreateOrderInput, Zone};
use crate::filters;
use crate::routes::cart::CartView;
use crate::session::{CART_COOKIE, read_cookie};
use crate::state::AppState;

/// Delivery zone display data for templates.
#[derive(Clone)]
pub struct ZoneView {
    pub id: String,
    pub name: String,
    pub city: String,
    pub fee: String,
    pub eta: String,
}

impl From<&Zone> for ZoneView {
    fn from(zone: &Zone) -> Self {
        Self {
            id: zone.id.to_string(),
            name: zone.name.clone(),
            city: zone.city.clone(),
            fee: Price::new(zone.fee, zone.currency).display(),
            eta: zone
                .eta_minutes
                .map_or_else(String::new, |minutes| format!("~{minutes} min")),
        }
    }
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub zones: Vec<ZoneView>,
    pub error: String,
}

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub phone: String,
    pub delivery_address: String,
    pub zone_id: String,
}

/// Gather the cart and zone data the checkout page renders.
async fn checkout_view(state: &AppState, headers: &HeaderMap) -> (CartView, Vec<ZoneView>, String) {
    let cart_id = read_cookie(headers, CART_COOKIE)
        .filter(|value| !value.is_empty())
        .map(CartId::new);

    let (cart, cart_error) = match &cart_id {
        Some(cart_id) => match state.api().get_cart(cart_id).await {
            Ok(cart) => (CartView::from(&cart), String::new()),
            Err(err) => (CartView::empty(), err.user_message()),
        },
        None => (CartView::empty(), String::new()),
    };

    let (zones, zones_error) = match state.api().get_delivery_zones().await {
        Ok(zones) => (zones.iter().map(ZoneView::from).collect(), String::new()),
        Err(err) => {
            tracing::warn!("Failed to fetch delivery zones: {err}");
            (Vec::new(), err.user_message())
        }
    };

    let error = if cart_error.is_empty() {
        zones_error
    } else {
        cart_error
    };

    (cart, zones, error)
}

/// Display the checkout page.
#[instrument(skip(state, headers))]
pub async fn show(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let (cart, zones, error) = checkout_view(&state, &headers).await;

    CheckoutTemplate { cart, zones, error }
}

/// Place the order.
///
/// On success the shopper is sent to the tracking page; on failure the
/// checkout page re-renders with an inline error and freshly fetched data.
#[instrument(skip(state, headers, form))]
pub async fn place_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<CheckoutForm>,
) -> Response {
    let mut mutation = MutationState::default();
    mutation.begin();

    let cart_id = read_cookie(&headers, CART_COOKIE)
        .filter(|value| !value.is_empty())
        .map(CartId::new);

    let placed = match cart_id {
        Some(cart_id) if !form.customer_name.is_empty() && !form.delivery_address.is_empty() => {
            let input = CreateOrderInput {
                cart_id,
                customer_name: form.customer_name.clone(),
                phone: form.phone.clone(),
                delivery_address: form.delivery_address.clone(),
                zone_id: ZoneId::new(form.zone_id.clone()),
            };
            match state.api().create_order(&input).await {
                Ok(order) => {
                    mutation.succeed();
                    Some(order.id)
                }
                Err(err) => {
                    mutation.fail(err.user_message());
                    None
                }
            }
        }
        Some(_) => {
            mutation.fail("Please fill in your name and delivery address");
            None
        }
        None => {
            mutation.fail("Your cart is empty");
            None
        }
    };

    match placed {
        Some(order_id) => Redirect::to(&format!("/orders/{order_id}?placed=1")).into_response(),
        None => {
            // Re-fetch for the re-render; the failed write changed nothing here
            let (cart, zones, fetch_error) = checkout_view(&state, &headers).await;
            let error = mutation
                .error()
                .map(ToString::to_string)
                .unwrap_or(fetch_error);
            CheckoutTemplate { cart, zones, error }.into_response()
        }
    }
}
