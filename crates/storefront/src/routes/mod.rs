//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home page (featured stores)
//! GET  /health                   - Health check
//!
//! # Stores
//! GET  /stores/{slug}            - Store page (header + product grid)
//! GET  /stores/{slug}/products   - Product grid page fragment (HTMX load-more)
//! POST /stores/{slug}/rate       - Submit a store rating (fragment)
//!
//! # Products
//! GET  /products/{id}            - Product detail
//!
//! # Cart (HTMX fragments)
//! GET  /cart                     - Cart page
//! POST /cart/add                 - Add to cart (returns cart count fragment)
//! POST /cart/update              - Update quantity (returns cart items fragment)
//! POST /cart/remove              - Remove item (returns cart items fragment)
//! GET  /cart/count               - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout                 - Checkout form (cart + delivery zones)
//! POST /checkout                 - Place order
//!
//! # Orders
//! GET  /orders/track             - Order tracking lookup (?id=...)
//! GET  /orders/{id}              - Order tracking page
//!
//! # Auth
//! GET  /login                    - Login page
//! POST /login                    - Login action
//! POST /logout                   - Logout action
//!
//! # Account (requires auth)
//! GET  /account                  - Account overview
//! GET  /account/orders           - Order history
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod orders;
pub mod products;
pub mod stores;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the store routes router.
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(stores::show))
        .route("/{slug}/products", get(stores::products_fragment))
        .route("/{slug}/rate", post(stores::rate))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/track", get(orders::track))
        .route("/{id}", get(orders::show))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::index))
        .route("/orders", get(account::orders))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Store routes
        .nest("/stores", store_routes())
        // Product detail
        .route("/products/{id}", get(products::show))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::place_order))
        // Order tracking
        .nest("/orders", order_routes())
        // Account routes (guarded by the RequireAuth extractor)
        .nest("/account", account_routes())
        // Auth routes
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}
