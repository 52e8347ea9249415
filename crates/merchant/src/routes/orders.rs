//! Order list and detail page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::instrument;

use a2z_core::fetch::{ListController, ListQuery, SingleController};
use a2z_core::types::{OrderId, OrderStatus, Price};

use crate::api::types::MerchantOrder;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireMerchantAuth;
use crate::state::AppState;

/// Orders shown per dashboard page.
const ORDERS_PER_PAGE: u32 = 25;

/// Status filter options rendered above the order table.
const STATUS_FILTERS: [OrderStatus; 8] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::ReadyForPickup,
    OrderStatus::PickedUp,
    OrderStatus::InTransit,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
    OrderStatus::FailedDelivery,
];

/// One status filter link.
#[derive(Clone)]
pub struct StatusFilterView {
    pub value: String,
    pub label: String,
    pub active: bool,
}

/// Order row display data for templates.
#[derive(Clone)]
pub struct OrderRowView {
    pub id: String,
    pub customer_name: String,
    pub status_label: String,
    pub total: String,
    pub placed_on: String,
}

impl From<&MerchantOrder> for OrderRowView {
    fn from(order: &MerchantOrder) -> Self {
        Self {
            id: order.id.to_string(),
            customer_name: order.customer_name.clone(),
            status_label: order.status.label().to_string(),
            total: Price::new(order.total, order.currency).display(),
            placed_on: order.created_at.format("%-d %b %Y %H:%M").to_string(),
        }
    }
}

/// Order line display data for templates.
#[derive(Clone)]
pub struct OrderLineView {
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Order detail display data for templates.
#[derive(Clone)]
pub struct OrderDetailView {
    pub id: String,
    pub status_label: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub total: String,
    pub placed_on: String,
    pub items: Vec<OrderLineView>,
}

impl From<&MerchantOrder> for OrderDetailView {
    fn from(order: &MerchantOrder) -> Self {
        Self {
            id: order.id.to_string(),
            status_label: order.status.label().to_string(),
            customer_name: order.customer_name.clone(),
            customer_phone: order.customer_phone.clone().unwrap_or_default(),
            delivery_address: order.delivery_address.clone().unwrap_or_default(),
            total: Price::new(order.total, order.currency).display(),
            placed_on: order.created_at.format("%-d %B %Y %H:%M").to_string(),
            items: order
                .items
                .iter()
                .map(|item| OrderLineView {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    line_total: Price::new(item.line_total, order.currency).display(),
                })
                .collect(),
        }
    }
}

/// Order list query parameters.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub page: Option<u32>,
    pub status: Option<String>,
}

/// Order list page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub orders: Vec<OrderRowView>,
    pub error: String,
    pub page: u32,
    pub has_more: bool,
    pub status: String,
    pub status_filters: Vec<StatusFilterView>,
}

/// Order detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/show.html")]
pub struct OrderShowTemplate {
    pub order: Option<OrderDetailView>,
    pub error: String,
}

fn parse_status(raw: Option<&str>) -> Option<OrderStatus> {
    let raw = raw?;
    serde_json::from_value(serde_json::Value::String(raw.to_string())).ok()
}

fn status_wire_value(status: OrderStatus) -> String {
    serde_json::to_value(status)
        .ok()
        .and_then(|value| value.as_str().map(ToString::to_string))
        .unwrap_or_default()
}

/// Display the order list, optionally filtered by status.
#[instrument(skip(state, token))]
pub async fn index(
    State(state): State<AppState>,
    RequireMerchantAuth(token): RequireMerchantAuth,
    Query(query): Query<OrdersQuery>,
) -> Result<OrdersIndexTemplate> {
    let page = query.page.unwrap_or(1).max(1);
    let status = parse_status(query.status.as_deref());

    let mut orders = ListController::<MerchantOrder>::new(ListQuery {
        page,
        limit: ORDERS_PER_PAGE,
        ..ListQuery::default()
    });

    let ticket = orders.begin();
    let result = state.api().list_orders(&token, status, orders.query()).await;
    match result {
        Ok(page_data) => {
            orders.resolve(ticket, Ok(page_data));
        }
        Err(err) if err.is_session_expired() => return Err(err.into()),
        Err(err) => {
            orders.resolve(ticket, Err(err.user_message()));
        }
    }

    let status_filters = STATUS_FILTERS
        .iter()
        .map(|step| StatusFilterView {
            value: status_wire_value(*step),
            label: step.label().to_string(),
            active: status == Some(*step),
        })
        .collect();

    Ok(OrdersIndexTemplate {
        orders: orders.items().iter().map(OrderRowView::from).collect(),
        error: orders.error().unwrap_or_default().to_string(),
        page,
        has_more: orders.has_more(),
        status: query.status.unwrap_or_default(),
        status_filters,
    })
}

/// Display an order detail page.
#[instrument(skip(state, token))]
pub async fn show(
    State(state): State<AppState>,
    RequireMerchantAuth(token): RequireMerchantAuth,
    Path(id): Path<String>,
) -> Result<OrderShowTemplate> {
    let mut order = SingleController::<MerchantOrder>::new();
    if let Some(ticket) = order.set_key(Some(id.as_str())) {
        match state.api().get_order(&token, &OrderId::new(id)).await {
            Ok(found) => {
                order.resolve(ticket, Ok(found));
            }
            Err(err) if err.is_session_expired() => return Err(err.into()),
            Err(err) => {
                order.resolve(ticket, Err(err.user_message()));
            }
        }
    }

    Ok(OrderShowTemplate {
        order: order.state().entity().map(OrderDetailView::from),
        error: order.state().error().unwrap_or_default().to_string(),
    })
}
