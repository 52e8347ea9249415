//! Integration tests for the GoFromA2zAfrica web binaries.
//!
//! The marketplace backend is simulated by an in-process axum server serving
//! canned envelope responses; the real API clients from the storefront and
//! merchant crates are pointed at it. No external services are involved.
//!
//! # Test Categories
//!
//! - `storefront_api` - Storefront client against the fake backend
//! - `merchant_api` - Merchant client against the fake backend
//! - `controller_flow` - Fetch controllers driven end-to-end

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use serde_json::{Value, json};

/// Serve a router on an OS-assigned port and return its base URL.
///
/// The server task lives until the test process exits; tests are short-lived
/// enough that explicit shutdown is not worth the plumbing.
///
/// # Panics
///
/// Panics if the listener cannot bind.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    format!("http://{addr}")
}

/// A successful envelope around `data`.
#[must_use]
pub fn envelope(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

/// A successful list envelope with pagination.
#[must_use]
pub fn paginated_envelope(data: Value, page: u32, limit: u32, has_more: bool) -> Value {
    json!({
        "success": true,
        "data": data,
        "pagination": { "page": page, "limit": limit, "hasMore": has_more }
    })
}

/// A failed envelope carrying `message`.
#[must_use]
pub fn failure(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

/// A storefront API config pointing at `base_url`, with fast retries.
#[must_use]
pub fn storefront_config(base_url: &str) -> a2z_storefront::config::MarketplaceApiConfig {
    a2z_storefront::config::MarketplaceApiConfig {
        base_url: base_url.to_string(),
        api_key: None,
        timeout_secs: 5,
        max_retries: 2,
        retry_backoff_ms: 10,
    }
}

/// A merchant API config pointing at `base_url`, with fast retries.
#[must_use]
pub fn merchant_config(base_url: &str) -> a2z_merchant::config::BackendApiConfig {
    a2z_merchant::config::BackendApiConfig {
        base_url: base_url.to_string(),
        api_key: None,
        timeout_secs: 5,
        max_retries: 2,
        retry_backoff_ms: 10,
    }
}

/// A product JSON object shaped like the backend's wire format.
#[must_use]
pub fn product_json(id: &str, name: &str, price: &str) -> Value {
    json!({
        "id": id,
        "storeId": "st_1",
        "name": name,
        "price": price,
        "currency": "NGN",
        "status": "ACTIVE",
        "createdAt": "2026-05-14T08:00:00Z"
    })
}

/// A store JSON object shaped like the backend's wire format.
#[must_use]
pub fn store_json(slug: &str, name: &str) -> Value {
    json!({
        "id": "st_1",
        "slug": slug,
        "name": name,
        "city": "Lagos",
        "country": "Nigeria",
        "rating": 4.6,
        "ratingCount": 128,
        "productCount": 42,
        "createdAt": "2025-01-20T10:00:00Z"
    })
}
