//! Status enums for marketplace entities.

use serde::{Deserialize, Serialize};

/// Order delivery status.
///
/// Transitions happen on the backend; this layer only renders the value it
/// was last given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    ReadyForPickup,
    PickedUp,
    InTransit,
    Delivered,
    Cancelled,
    FailedDelivery,
}

impl OrderStatus {
    /// Human-readable label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::ReadyForPickup => "Ready for pickup",
            Self::PickedUp => "Picked up",
            Self::InTransit => "In transit",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::FailedDelivery => "Failed delivery",
        }
    }

    /// Whether the order has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled | Self::FailedDelivery)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Product listing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    Active,
    Draft,
    OutOfStock,
    Archived,
}

impl ProductStatus {
    /// Human-readable label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::OutOfStock => "Out of stock",
            Self::Archived => "Archived",
        }
    }

    /// Whether the product can currently be added to a cart.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_format() {
        let status: OrderStatus = serde_json::from_str("\"READY_FOR_PICKUP\"").unwrap();
        assert_eq!(status, OrderStatus::ReadyForPickup);
        assert_eq!(
            serde_json::to_string(&OrderStatus::FailedDelivery).unwrap(),
            "\"FAILED_DELIVERY\""
        );
    }

    #[test]
    fn test_order_status_labels() {
        assert_eq!(OrderStatus::InTransit.label(), "In transit");
        assert_eq!(OrderStatus::InTransit.to_string(), "In transit");
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::FailedDelivery.is_terminal());
        assert!(!OrderStatus::InTransit.is_terminal());
    }

    #[test]
    fn test_product_status() {
        let status: ProductStatus = serde_json::from_str("\"OUT_OF_STOCK\"").unwrap();
        assert_eq!(status, ProductStatus::OutOfStock);
        assert!(!status.is_purchasable());
        assert!(ProductStatus::Active.is_purchasable());
    }
}
