//! HTTP route handlers for the merchant dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Dashboard overview (requires auth)
//! GET  /health          - Health check
//!
//! GET  /products        - Product list with category filter
//! GET  /products/{id}   - Product detail
//! GET  /orders          - Order list with status filter
//! GET  /orders/{id}     - Order detail
//! GET  /customers       - Customer list
//! GET  /settings        - Store settings form
//! POST /settings        - Update store settings
//!
//! GET  /login           - Login page
//! POST /login           - Login action
//! POST /logout          - Logout action
//! ```

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod settings;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the dashboard.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/orders", get(orders::index))
        .route("/orders/{id}", get(orders::show))
        .route("/customers", get(customers::index))
        .route("/settings", get(settings::show).post(settings::update))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}
