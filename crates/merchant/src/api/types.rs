//! Wire types for the merchant-scoped endpoints.

use a2z_core::types::{
    CurrencyCode, CustomerId, OrderId, OrderStatus, ProductId, ProductStatus, SessionToken,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard overview.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub pending_orders: u32,
    #[serde(default)]
    pub active_products: u32,
    #[serde(default)]
    pub total_customers: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub revenue_today: Decimal,
    #[serde(default)]
    pub currency: CurrencyCode,
}

/// A product as the merchant sees it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub stock_quantity: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// An order as the merchant sees it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantOrder {
    pub id: OrderId,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(default)]
    pub currency: CurrencyCode,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub items: Vec<MerchantOrderItem>,
    pub created_at: DateTime<Utc>,
}

/// One line in a merchant order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantOrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub line_total: Decimal,
}

/// A customer summary row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub order_count: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_spent: Decimal,
    #[serde(default)]
    pub currency: CurrencyCode,
    pub created_at: DateTime<Utc>,
}

/// The merchant's store profile, read and written on the settings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub pickup_address: Option<String>,
    #[serde(default)]
    pub currency: CurrencyCode,
}

/// Session issued by the backend at merchant login.
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

/// Credentials posted to `/merchant/auth/login`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_deserializes() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"pendingOrders": 4, "activeProducts": 31, "totalCustomers": 120, "revenueToday": "45000.00", "currency": "NGN"}"#,
        )
        .unwrap();
        assert_eq!(summary.pending_orders, 4);
        assert_eq!(summary.revenue_today, Decimal::new(4_500_000, 2));
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = StoreSettings {
            name: "Mama Nkechi Kitchen".to_string(),
            description: None,
            city: "Lagos".to_string(),
            country: "Nigeria".to_string(),
            pickup_address: Some("12 Allen Avenue".to_string()),
            currency: CurrencyCode::NGN,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("pickupAddress"));
        let back: StoreSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, settings.name);
    }
}
