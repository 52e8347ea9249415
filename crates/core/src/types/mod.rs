//! Shared domain types for the marketplace web binaries.

mod id;
mod price;
mod slug;
mod status;
mod token;

pub use id::{CartId, CartItemId, CustomerId, OrderId, ProductId, StoreId, ZoneId};
pub use price::{CurrencyCode, Price};
pub use slug::{SlugError, StoreSlug};
pub use status::{OrderStatus, ProductStatus};
pub use token::SessionToken;
