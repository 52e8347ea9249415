//! Order tracking route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use a2z_core::fetch::SingleController;
use a2z_core::types::{OrderId, OrderStatus, Price};

use crate::api::types::Order;
use crate::filters;
use crate::state::AppState;

/// Delivery progression rendered as the tracking timeline.
const TIMELINE: [OrderStatus; 6] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::ReadyForPickup,
    OrderStatus::PickedUp,
    OrderStatus::InTransit,
    OrderStatus::Delivered,
];

/// One step of the tracking timeline.
#[derive(Clone)]
pub struct TimelineStepView {
    pub label: String,
    pub reached: bool,
}

/// Order line display data for templates.
#[derive(Clone)]
pub struct OrderItemView {
    pub name: String,
    pub quantity: u32,
    pub line_price: String,
}

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub id: String,
    pub status_label: String,
    pub is_terminal: bool,
    pub timeline: Vec<TimelineStepView>,
    pub items: Vec<OrderItemView>,
    pub total: String,
    pub customer_name: String,
    pub delivery_address: String,
    pub placed_on: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let reached_index = TIMELINE.iter().position(|step| *step == order.status);
        let timeline = TIMELINE
            .iter()
            .enumerate()
            .map(|(index, step)| TimelineStepView {
                label: step.label().to_string(),
                reached: reached_index.is_some_and(|reached| index <= reached),
            })
            .collect();

        Self {
            id: order.id.to_string(),
            status_label: order.status.label().to_string(),
            is_terminal: order.status.is_terminal(),
            timeline,
            items: order
                .items
                .iter()
                .map(|item| OrderItemView {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    line_price: Price::new(item.line_total, order.currency).display(),
                })
                .collect(),
            total: Price::new(order.total, order.currency).display(),
            customer_name: order.customer_name.clone(),
            delivery_address: order.delivery_address.clone().unwrap_or_default(),
            placed_on: order.created_at.format("%-d %B %Y").to_string(),
        }
    }
}

/// Order tracking page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/track.html")]
pub struct OrderTrackTemplate {
    pub order: Option<OrderView>,
    pub error: String,
    pub just_placed: bool,
}

/// Tracking lookup query parameters.
#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    pub id: Option<String>,
    pub placed: Option<String>,
}

/// Shared fetch path for both tracking routes.
///
/// A missing id fails synchronously inside the controller - no request is
/// issued for it.
async fn track_order(state: &AppState, id: Option<&str>) -> SingleController<Order> {
    let mut order = SingleController::<Order>::new();
    if let Some(ticket) = order.set_key(id) {
        let outcome = state
            .api()
            .get_order_by_id(&OrderId::new(order.key().unwrap_or_default()))
            .await
            .map_err(|err| err.user_message());
        order.resolve(ticket, outcome);
    }
    order
}

/// Order tracking lookup (`/orders/track?id=...`).
#[instrument(skip(state))]
pub async fn track(
    State(state): State<AppState>,
    Query(query): Query<TrackQuery>,
) -> impl IntoResponse {
    let order = track_order(&state, query.id.as_deref()).await;

    OrderTrackTemplate {
        order: order.state().entity().map(OrderView::from),
        error: order.state().error().unwrap_or_default().to_string(),
        just_placed: false,
    }
}

/// Order tracking page (`/orders/{id}`).
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<TrackQuery>,
) -> impl IntoResponse {
    let order = track_order(&state, Some(&id)).await;

    OrderTrackTemplate {
        order: order.state().entity().map(OrderView::from),
        error: order.state().error().unwrap_or_default().to_string(),
        just_placed: query.placed.as_deref() == Some("1"),
    }
}
