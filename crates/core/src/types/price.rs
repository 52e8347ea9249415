//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., naira, not kobo).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Format for display (e.g., `"₦1500.00"`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes for the markets the marketplace serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Nigerian naira.
    #[default]
    NGN,
    /// Ghanaian cedi.
    GHS,
    /// Kenyan shilling.
    KES,
    /// South African rand.
    ZAR,
    /// West African CFA franc.
    XOF,
    /// US dollar.
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::NGN => "₦",
            Self::GHS => "GH₵",
            Self::KES => "KSh ",
            Self::ZAR => "R",
            Self::XOF => "CFA ",
            Self::USD => "$",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NGN => "NGN",
            Self::GHS => "GHS",
            Self::KES => "KES",
            Self::ZAR => "ZAR",
            Self::XOF => "XOF",
            Self::USD => "USD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_price_display() {
        let price = Price::new(Decimal::new(150_000, 2), CurrencyCode::NGN);
        assert_eq!(price.display(), "₦1500.00");
    }

    #[test]
    fn test_price_display_pads_to_two_places() {
        let price = Price::new(Decimal::new(5, 0), CurrencyCode::USD);
        assert_eq!(price.display(), "$5.00");
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(CurrencyCode::GHS.code(), "GHS");
        assert_eq!(CurrencyCode::default(), CurrencyCode::NGN);
    }
}
