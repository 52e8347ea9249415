//! Storefront API client against the fake backend.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use a2z_core::envelope::DEFAULT_FAILURE_MESSAGE;
use a2z_core::types::{OrderId, StoreSlug};
use a2z_integration_tests::{
    envelope, failure, spawn_backend, store_json, storefront_config,
};
use a2z_storefront::api::{ApiError, MarketplaceClient, SESSION_EXPIRED_MESSAGE};
use a2z_storefront::api::types::CreateOrderInput;

#[tokio::test]
async fn store_lookup_returns_typed_store() {
    let app = Router::new().route(
        "/stores/{slug}",
        get(|Path(slug): Path<String>| async move {
            Json(envelope(store_json(&slug, "Acme Store")))
        }),
    );
    let base_url = spawn_backend(app).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();

    let slug = StoreSlug::parse("acme-store").unwrap();
    let store = client.get_store_by_slug(&slug).await.unwrap();

    assert_eq!(store.name, "Acme Store");
    assert_eq!(store.slug.as_str(), "acme-store");
    assert_eq!(store.product_count, 42);
}

#[tokio::test]
async fn backend_failure_surfaces_payload_message() {
    let app = Router::new().route(
        "/orders/{id}",
        get(|| async { Json(failure("Order not found")) }),
    );
    let base_url = spawn_backend(app).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();

    let err = client
        .get_order_by_id(&OrderId::new("ord_404"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Backend(_)));
    assert_eq!(err.user_message(), "Order not found");
}

#[tokio::test]
async fn backend_failure_without_message_uses_fallback() {
    let app = Router::new().route(
        "/orders/{id}",
        get(|| async { Json(json!({ "success": false })) }),
    );
    let base_url = spawn_backend(app).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();

    let err = client
        .get_order_by_id(&OrderId::new("ord_1"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), DEFAULT_FAILURE_MESSAGE);
}

#[tokio::test]
async fn unauthorized_maps_to_invalid_token() {
    let app = Router::new().route(
        "/auth/me",
        get(|| async { (StatusCode::UNAUTHORIZED, "").into_response() }),
    );
    let base_url = spawn_backend(app).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();

    let token = a2z_core::types::SessionToken::new("tok_stale", None);
    let err = client.get_me(&token).await.unwrap_err();

    assert!(err.is_session_expired());
    assert_eq!(err.user_message(), SESSION_EXPIRED_MESSAGE);
}

#[tokio::test]
async fn idempotent_get_retries_server_errors() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let app = Router::new().route(
        "/stores/{slug}",
        get(move |Path(slug): Path<String>| {
            let counter = Arc::clone(&counter);
            async move {
                // Fail the first two attempts, then answer normally
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                } else {
                    Json(envelope(store_json(&slug, "Flaky Store"))).into_response()
                }
            }
        }),
    );
    let base_url = spawn_backend(app).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();

    let slug = StoreSlug::parse("flaky").unwrap();
    let store = client.get_store_by_slug(&slug).await.unwrap();

    assert_eq!(store.name, "Flaky Store");
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn writes_are_never_retried() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let app = Router::new().route(
        "/orders",
        post(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }),
    );
    let base_url = spawn_backend(app).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();

    let input = CreateOrderInput {
        cart_id: "crt_1".into(),
        customer_name: "Ama Mensah".to_string(),
        phone: "+233201234567".to_string(),
        delivery_address: "14 Oxford St, Osu".to_string(),
        zone_id: "zn_1".into(),
    };
    let result = client.create_order(&input).await;

    assert!(result.is_err());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_order_id_fails_without_a_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let app = Router::new().route(
        "/orders/{id}",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(failure("unreachable"))
            }
        }),
    );
    let base_url = spawn_backend(app).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();

    let err = client.get_order_by_id(&OrderId::new("")).await.unwrap_err();

    assert!(matches!(err, ApiError::MissingParam(_)));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
