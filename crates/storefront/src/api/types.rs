//! Wire types for the marketplace backend API.
//!
//! Fields mirror the backend's camelCase JSON. Prices travel as decimal
//! strings; timestamps as RFC 3339.

use a2z_core::types::{
    CartId, CartItemId, CurrencyCode, CustomerId, OrderId, OrderStatus, Price, ProductId,
    ProductStatus, SessionToken, StoreId, StoreSlug, ZoneId,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A marketplace store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    pub slug: StoreSlug,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub product_count: u32,
    pub created_at: DateTime<Utc>,
}

/// A product listed by a store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub store_id: StoreId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub compare_at_price: Option<Decimal>,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The product's price as a typed amount.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::new(self.price, self.currency)
    }
}

/// The shopper's cart, fetched whole.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(default)]
    pub currency: CurrencyCode,
}

impl Cart {
    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// One line in the cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub line_total: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Acknowledgement returned by cart write endpoints.
///
/// Writes do not return the updated cart; callers re-fetch explicitly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAck {
    pub cart_id: CartId,
}

/// A delivery zone with its flat fee.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub city: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub fee: Decimal,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub eta_minutes: Option<u32>,
}

/// An order, as rendered on the tracking page and account history.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub store_id: StoreId,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(default)]
    pub currency: CurrencyCode,
    pub customer_name: String,
    #[serde(default)]
    pub delivery_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One line in an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub line_total: Decimal,
}

/// A store rating, echoed back after submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub score: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// The logged-in customer, from `/auth/me`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Session issued by the backend at login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthSession {
    /// Convert into the typed session token stored in the cookie.
    #[must_use]
    pub fn into_token(self) -> SessionToken {
        SessionToken::new(self.token, self.expires_at)
    }
}

// =============================================================================
// Request bodies
// =============================================================================

/// Credentials posted to `/auth/login`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Body for adding a product to the cart.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemInput {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body for changing a cart line's quantity.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemInput {
    pub quantity: u32,
}

/// Body for submitting a store rating.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingInput {
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body for placing an order at checkout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub cart_id: CartId,
    pub customer_name: String,
    pub phone: String,
    pub delivery_address: String,
    pub zone_id: ZoneId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_from_wire_shape() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": "prd_1",
                "storeId": "st_1",
                "name": "Shea butter",
                "price": "2500.00",
                "compareAtPrice": "3000.00",
                "currency": "NGN",
                "category": "beauty",
                "status": "ACTIVE",
                "createdAt": "2025-11-02T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(product.id.as_str(), "prd_1");
        assert_eq!(product.price, Decimal::new(250_000, 2));
        assert_eq!(product.unit_price().display(), "₦2500.00");
        assert_eq!(product.status, ProductStatus::Active);
    }

    #[test]
    fn test_cart_item_count() {
        let cart: Cart = serde_json::from_str(
            r#"{
                "id": "crt_1",
                "subtotal": "5000.00",
                "currency": "NGN",
                "items": [
                    {"id": "ci_1", "productId": "prd_1", "name": "A", "unitPrice": "1000.00", "quantity": 2, "lineTotal": "2000.00"},
                    {"id": "ci_2", "productId": "prd_2", "name": "B", "unitPrice": "3000.00", "quantity": 1, "lineTotal": "3000.00"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_order_status_defaults_to_pending() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": "ord_1",
                "storeId": "st_1",
                "total": "100.00",
                "customerName": "Ama",
                "createdAt": "2025-11-02T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_rating_input_omits_empty_comment() {
        let body = serde_json::to_string(&RatingInput {
            score: 5,
            comment: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"score":5}"#);
    }
}
