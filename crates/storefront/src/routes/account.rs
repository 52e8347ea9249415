//! Account route handlers.
//!
//! These routes require authentication: the `RequireAuth` extractor checks
//! token presence before any network call and redirects to `/login` when no
//! token is stored. A token the backend rejects surfaces as a forced logout
//! via the error layer.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use a2z_core::fetch::{ListController, ListQuery};

use crate::api::types::Order;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::routes::orders::OrderView;
use crate::state::AppState;

/// Orders shown per page of account history.
const ORDERS_PER_PAGE: u32 = 10;

/// Customer display data for templates.
#[derive(Clone)]
pub struct CustomerView {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Account overview page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountIndexTemplate {
    pub customer: CustomerView,
    pub recent_orders: Vec<OrderView>,
    pub orders_error: String,
}

/// Account order history template.
#[derive(Template, WebTemplate)]
#[template(path = "account/orders.html")]
pub struct AccountOrdersTemplate {
    pub orders: Vec<OrderView>,
    pub error: String,
    pub page: u32,
    pub has_more: bool,
}

/// Display account overview page.
///
/// A backend 401 propagates as `ApiError::InvalidToken`, which the error
/// layer turns into a cleared session and a redirect to `/login`.
#[instrument(skip(state, token))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(token): RequireAuth,
) -> Result<AccountIndexTemplate> {
    let customer = state.api().get_me(&token).await?;

    // Recent orders are best-effort; the overview still renders without them
    let mut orders = ListController::<Order>::new(ListQuery {
        limit: 5,
        ..ListQuery::default()
    });
    let ticket = orders.begin();
    let outcome = state
        .api()
        .list_my_orders(&token, orders.query())
        .await
        .map_err(|err| err.user_message());
    orders.resolve(ticket, outcome);

    Ok(AccountIndexTemplate {
        customer: CustomerView {
            name: customer.name,
            email: customer.email,
            phone: customer.phone.unwrap_or_default(),
        },
        recent_orders: orders.items().iter().map(OrderView::from).collect(),
        orders_error: orders.error().unwrap_or_default().to_string(),
    })
}

/// Order history query parameters.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub page: Option<u32>,
}

/// Display the order history page.
#[instrument(skip(state, token))]
pub async fn orders(
    State(state): State<AppState>,
    RequireAuth(token): RequireAuth,
    Query(query): Query<OrdersQuery>,
) -> Result<AccountOrdersTemplate> {
    let page = query.page.unwrap_or(1).max(1);
    let mut orders = ListController::<Order>::new(ListQuery {
        page,
        limit: ORDERS_PER_PAGE,
        ..ListQuery::default()
    });
    let ticket = orders.begin();
    let outcome = state
        .api()
        .list_my_orders(&token, orders.query())
        .await
        .map_err(|err| err.user_message());
    orders.resolve(ticket, outcome);

    Ok(AccountOrdersTemplate {
        orders: orders.items().iter().map(OrderView::from).collect(),
        error: orders.error().unwrap_or_default().to_string(),
        page,
        has_more: orders.has_more(),
    })
}
