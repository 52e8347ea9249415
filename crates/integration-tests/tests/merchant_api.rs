//! Merchant API client against the fake backend.

#![allow(clippy::unwrap_used)]

use axum::Json;
use axum::extract::{Query, RawQuery};
use axum::http::HeaderMap;
use axum::routing::{get, put};
use axum::Router;
use serde_json::json;

use a2z_core::types::{OrderStatus, SessionToken};
use a2z_integration_tests::{envelope, merchant_config, paginated_envelope, spawn_backend};
use a2z_merchant::api::MerchantApiClient;
use a2z_merchant::api::types::StoreSettings;

fn token() -> SessionToken {
    SessionToken::new("tok_merchant", None)
}

#[tokio::test]
async fn requests_carry_the_bearer_token() {
    let app = Router::new().route(
        "/merchant/summary",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            assert_eq!(auth, "Bearer tok_merchant");
            Json(envelope(json!({
                "pendingOrders": 2,
                "activeProducts": 10,
                "totalCustomers": 55,
                "revenueToday": "12500.00",
                "currency": "GHS"
            })))
        }),
    );
    let base_url = spawn_backend(app).await;
    let client = MerchantApiClient::new(&merchant_config(&base_url)).unwrap();

    let summary = client.get_dashboard_summary(&token()).await.unwrap();
    assert_eq!(summary.pending_orders, 2);
    assert_eq!(summary.total_customers, 55);
}

#[tokio::test]
async fn order_list_sends_status_filter_on_the_wire() {
    let app = Router::new().route(
        "/merchant/orders",
        get(|RawQuery(query): RawQuery| async move {
            let query = query.unwrap_or_default();
            assert!(query.contains("status=PENDING"), "query was: {query}");
            assert!(query.contains("page=1"));
            Json(paginated_envelope(json!([]), 1, 25, false))
        }),
    );
    let base_url = spawn_backend(app).await;
    let client = MerchantApiClient::new(&merchant_config(&base_url)).unwrap();

    let page = client
        .list_orders(
            &token(),
            Some(OrderStatus::Pending),
            &a2z_core::fetch::ListQuery::default(),
        )
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert!(page.pagination.is_some());
}

#[tokio::test]
async fn settings_update_round_trips_the_saved_profile() {
    let app = Router::new().route(
        "/merchant/settings",
        put(|Json(body): Json<serde_json::Value>| async move {
            // Echo the submitted profile back as the saved one
            Json(json!({ "success": true, "data": body }))
        }),
    );
    let base_url = spawn_backend(app).await;
    let client = MerchantApiClient::new(&merchant_config(&base_url)).unwrap();

    let input = StoreSettings {
        name: "Mama Nkechi Kitchen".to_string(),
        description: Some("Home-cooked Nigerian meals".to_string()),
        city: "Lagos".to_string(),
        country: "Nigeria".to_string(),
        pickup_address: Some("12 Allen Avenue".to_string()),
        currency: a2z_core::types::CurrencyCode::NGN,
    };

    let saved = client.update_settings(&token(), &input).await.unwrap();
    assert_eq!(saved.name, input.name);
    assert_eq!(saved.pickup_address, input.pickup_address);
}

#[tokio::test]
async fn product_list_accepts_category_filter() {
    let app = Router::new().route(
        "/merchant/products",
        get(|Query(params): Query<Vec<(String, String)>>| async move {
            let category = params
                .iter()
                .find(|(key, _)| key == "category")
                .map(|(_, value)| value.clone());
            assert_eq!(category.as_deref(), Some("groceries"));
            Json(paginated_envelope(json!([]), 1, 25, false))
        }),
    );
    let base_url = spawn_backend(app).await;
    let client = MerchantApiClient::new(&merchant_config(&base_url)).unwrap();

    let query = a2z_core::fetch::ListQuery {
        category: Some("groceries".to_string()),
        ..a2z_core::fetch::ListQuery::default()
    };
    let page = client.list_products(&token(), &query).await.unwrap();
    assert!(page.items.is_empty());
}
