//! A2Z Core - Shared types and fetch state machines.
//!
//! This crate provides the pieces shared by the GoFromA2zAfrica web binaries:
//! - `storefront` - Public consumer-facing marketplace site
//! - `merchant` - Merchant dashboard (products, orders, customers, settings)
//!
//! # Architecture
//!
//! The core crate contains only types and pure state machines - no I/O, no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, slugs, prices, and statuses
//! - [`envelope`] - The `{success, data, message, pagination}` wrapper every
//!   marketplace API response uses
//! - [`fetch`] - Controllers owning the fetch lifecycle and view state for
//!   paginated lists, single resources, and one-shot mutations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod envelope;
pub mod fetch;
pub mod types;

pub use envelope::{Envelope, Pagination};
pub use types::*;
