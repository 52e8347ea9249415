//! Dashboard overview page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use a2z_core::types::Price;

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireMerchantAuth;
use crate::state::AppState;

/// Dashboard overview template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub pending_orders: u32,
    pub active_products: u32,
    pub total_customers: u32,
    pub revenue_today: String,
    pub error: String,
}

/// Display the dashboard overview.
///
/// A rejected token propagates as an error so the error layer can clear the
/// session and redirect to the login page.
#[instrument(skip(state, token))]
pub async fn index(
    State(state): State<AppState>,
    RequireMerchantAuth(token): RequireMerchantAuth,
) -> Result<DashboardTemplate> {
    match state.api().get_dashboard_summary(&token).await {
        Ok(summary) => Ok(DashboardTemplate {
            pending_orders: summary.pending_orders,
            active_products: summary.active_products,
            total_customers: summary.total_customers,
            revenue_today: Price::new(summary.revenue_today, summary.currency).display(),
            error: String::new(),
        }),
        Err(err) if err.is_session_expired() => Err(err.into()),
        Err(err) => {
            tracing::warn!("Failed to fetch dashboard summary: {err}");
            Ok(DashboardTemplate {
                pending_orders: 0,
                active_products: 0,
                total_customers: 0,
                revenue_today: String::new(),
                error: err.user_message(),
            })
        }
    }
}
