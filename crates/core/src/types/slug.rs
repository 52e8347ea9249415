//! Validated store slug.
//!
//! Stores are route-addressable by a human-readable slug (`/stores/acme-store`).
//! The backend guarantees slugs are lowercase alphanumeric with hyphens; the
//! newtype enforces the same shape locally so malformed route parameters are
//! rejected before any request is made.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when parsing a store slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug is empty")]
    Empty,
    #[error("slug contains invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("slug must not start or end with a hyphen")]
    EdgeHyphen,
}

/// A validated, route-addressable store slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StoreSlug(String);

impl StoreSlug {
    /// Parse and validate a slug.
    ///
    /// # Errors
    ///
    /// Returns `SlugError` if the value is empty, contains characters outside
    /// `[a-z0-9-]`, or starts/ends with a hyphen.
    pub fn parse(value: impl Into<String>) -> Result<Self, SlugError> {
        let value = value.into();
        if value.is_empty() {
            return Err(SlugError::Empty);
        }
        if value.starts_with('-') || value.ends_with('-') {
            return Err(SlugError::EdgeHyphen);
        }
        if let Some(bad) = value
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter(bad));
        }
        Ok(Self(value))
    }

    /// Borrow the slug as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoreSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for StoreSlug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StoreSlug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<StoreSlug> for String {
    fn from(slug: StoreSlug) -> Self {
        slug.0
    }
}
