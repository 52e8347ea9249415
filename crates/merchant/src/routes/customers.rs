//! Customer list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use a2z_core::fetch::{ListController, ListQuery};
use a2z_core::types::Price;

use crate::api::types::CustomerSummary;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireMerchantAuth;
use crate::state::AppState;

/// Customers shown per dashboard page.
const CUSTOMERS_PER_PAGE: u32 = 25;

/// Customer row display data for templates.
#[derive(Clone)]
pub struct CustomerRowView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub order_count: u32,
    pub total_spent: String,
    pub first_seen: String,
}

impl From<&CustomerSummary> for CustomerRowView {
    fn from(customer: &CustomerSummary) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
            order_count: customer.order_count,
            total_spent: Price::new(customer.total_spent, customer.currency).display(),
            first_seen: customer.created_at.format("%-d %b %Y").to_string(),
        }
    }
}

/// Customer list query parameters.
#[derive(Debug, Deserialize)]
pub struct CustomersQuery {
    pub page: Option<u32>,
}

/// Customer list page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/index.html")]
pub struct CustomersIndexTemplate {
    pub customers: Vec<CustomerRowView>,
    pub error: String,
    pub page: u32,
    pub has_more: bool,
}

/// Display the customer list.
#[instrument(skip(state, token))]
pub async fn index(
    State(state): State<AppState>,
    RequireMerchantAuth(token): RequireMerchantAuth,
    Query(query): Query<CustomersQuery>,
) -> Result<CustomersIndexTemplate> {
    let page = query.page.unwrap_or(1).max(1);
    let mut customers = ListController::<CustomerSummary>::new(ListQuery {
        page,
        limit: CUSTOMERS_PER_PAGE,
        ..ListQuery::default()
    });

    let ticket = customers.begin();
    let result = state.api().list_customers(&token, customers.query()).await;
    match result {
        Ok(page_data) => {
            customers.resolve(ticket, Ok(page_data));
        }
        Err(err) if err.is_session_expired() => return Err(err.into()),
        Err(err) => {
            customers.resolve(ticket, Err(err.user_message()));
        }
    }

    Ok(CustomersIndexTemplate {
        customers: customers.items().iter().map(CustomerRowView::from).collect(),
        error: customers.error().unwrap_or_default().to_string(),
        page,
        has_more: customers.has_more(),
    })
}
