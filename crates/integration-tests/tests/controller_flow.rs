//! Fetch controllers driven end-to-end against the fake backend.

#![allow(clippy::unwrap_used)]

use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::get;
use axum::Router;
use serde_json::{Value, json};

use a2z_core::fetch::{ListController, ListPhase, ListQuery, SingleController};
use a2z_core::types::StoreSlug;
use a2z_integration_tests::{
    paginated_envelope, product_json, spawn_backend, storefront_config,
};
use a2z_storefront::api::MarketplaceClient;
use a2z_storefront::api::types::Product;

/// Fake product list endpoint: page 1 has 12 items and more pages, page 2
/// has 3 items and is the last.
fn product_pages() -> Router {
    Router::new().route(
        "/stores/{slug}/products",
        get(
            |Path(_slug): Path<String>, Query(params): Query<Vec<(String, String)>>| async move {
                let page = params
                    .iter()
                    .find(|(key, _)| key == "page")
                    .and_then(|(_, value)| value.parse::<u32>().ok())
                    .unwrap_or(1);

                let (items, has_more): (Vec<Value>, bool) = if page == 1 {
                    (
                        (1..=12)
                            .map(|n| product_json(&format!("prd_{n}"), &format!("Item {n}"), "1000.00"))
                            .collect(),
                        true,
                    )
                } else {
                    (
                        (13..=15)
                            .map(|n| product_json(&format!("prd_{n}"), &format!("Item {n}"), "1000.00"))
                            .collect(),
                        false,
                    )
                };

                Json(paginated_envelope(json!(items), page, 12, has_more))
            },
        ),
    )
}

async fn fetch_page(
    client: &MarketplaceClient,
    slug: &StoreSlug,
    query: &ListQuery,
) -> Result<a2z_core::fetch::Page<Product>, String> {
    client
        .get_store_products(slug, query)
        .await
        .map_err(|err| err.user_message())
}

#[tokio::test]
async fn initial_load_renders_every_item_in_response_order() {
    let base_url = spawn_backend(product_pages()).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();
    let slug = StoreSlug::parse("acme-store").unwrap();

    let mut controller = ListController::<Product>::new(ListQuery::default());
    let ticket = controller.begin();
    let outcome = fetch_page(&client, &slug, controller.query()).await;
    assert!(controller.resolve(ticket, outcome));

    // 12 rendered cards and a visible load-more control
    assert_eq!(controller.phase(), &ListPhase::Ready);
    assert_eq!(controller.items().len(), 12);
    assert!(controller.has_more());
    let names: Vec<_> = controller.items().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names.first().unwrap(), "Item 1");
    assert_eq!(names.last().unwrap(), "Item 12");
}

#[tokio::test]
async fn load_more_appends_the_next_page() {
    let base_url = spawn_backend(product_pages()).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();
    let slug = StoreSlug::parse("acme-store").unwrap();

    let mut controller = ListController::<Product>::new(ListQuery::default());
    let ticket = controller.begin();
    let outcome = fetch_page(&client, &slug, controller.query()).await;
    controller.resolve(ticket, outcome);

    let ticket = controller.begin_append().unwrap();
    let outcome = fetch_page(&client, &slug, controller.query()).await;
    controller.resolve(ticket, outcome);

    // previous ++ new page, order preserved; hasMore from the latest response
    assert_eq!(controller.items().len(), 15);
    assert_eq!(controller.items()[12].name, "Item 13");
    assert!(!controller.has_more());
    assert!(controller.begin_append().is_none());
}

#[tokio::test]
async fn refetch_with_identical_parameters_is_idempotent() {
    let base_url = spawn_backend(product_pages()).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();
    let slug = StoreSlug::parse("acme-store").unwrap();

    let mut first = ListController::<Product>::new(ListQuery::default());
    let ticket = first.begin();
    let outcome = fetch_page(&client, &slug, first.query()).await;
    first.resolve(ticket, outcome);

    let mut second = ListController::<Product>::new(ListQuery::default());
    let ticket = second.begin();
    let outcome = fetch_page(&client, &slug, second.query()).await;
    second.resolve(ticket, outcome);

    let names =
        |c: &ListController<Product>| c.items().iter().map(|p| p.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&first), names(&second));
    assert_eq!(first.has_more(), second.has_more());
}

#[tokio::test]
async fn stale_list_response_is_discarded_after_filter_change() {
    let base_url = spawn_backend(product_pages()).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();
    let slug = StoreSlug::parse("acme-store").unwrap();

    let mut controller = ListController::<Product>::new(ListQuery::default());
    let stale_ticket = controller.begin();
    let stale_outcome = fetch_page(&client, &slug, controller.query()).await;

    // The shopper changes the category while the fetch is in flight
    controller.set_category(Some("groceries".to_string()));

    assert!(!controller.resolve(stale_ticket, stale_outcome));
    assert!(controller.items().is_empty());
    assert_eq!(controller.query().page, 1);
}

#[tokio::test]
async fn single_controller_resolves_entity_from_backend() {
    let app = Router::new().route(
        "/products/{id}",
        get(|Path(id): Path<String>| async move {
            Json(a2z_integration_tests::envelope(product_json(
                &id,
                "Shea butter",
                "2500.00",
            )))
        }),
    );
    let base_url = spawn_backend(app).await;
    let client = MarketplaceClient::new(&storefront_config(&base_url)).unwrap();

    let mut controller = SingleController::<Product>::new();
    let ticket = controller.set_key(Some("prd_9")).unwrap();
    let outcome = client
        .get_product_by_id(&"prd_9".into())
        .await
        .map_err(|err| err.user_message());
    controller.resolve(ticket, outcome);

    let product = controller.state().entity().unwrap();
    assert_eq!(product.name, "Shea butter");
    assert_eq!(product.id.as_str(), "prd_9");
}
