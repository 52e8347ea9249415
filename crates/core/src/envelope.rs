//! The JSON envelope every marketplace API response uses.
//!
//! Shape on the wire:
//!
//! ```json
//! { "success": true, "data": { ... }, "message": "...", "pagination": { "hasMore": true } }
//! ```
//!
//! `Envelope::into_result` is the single place the `success` flag is
//! interpreted; clients never hand partial data to callers.

use serde::{Deserialize, Serialize};

/// Fallback error message when the backend sends `success: false` with no
/// `message` field.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

/// Response envelope wrapping every marketplace API payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub pagination: Option<Pagination>,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: Option<u64>,
    /// Absent means no further pages.
    #[serde(default)]
    pub has_more: bool,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into its payload.
    ///
    /// # Errors
    ///
    /// When `success` is false, or `success` is true but `data` is missing,
    /// returns the payload `message` (falling back to
    /// [`DEFAULT_FAILURE_MESSAGE`]).
    pub fn into_result(self) -> Result<(T, Option<Pagination>), String> {
        let message = || {
            self.message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string())
        };

        if !self.success {
            return Err(message());
        }

        match self.data {
            Some(data) => Ok((data, self.pagination)),
            None => Err(message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Widget {
        name: String,
    }

    #[test]
    fn test_success_with_data() {
        let env: Envelope<Widget> =
            serde_json::from_str(r#"{"success": true, "data": {"name": "drum"}}"#).unwrap();
        let (widget, pagination) = env.into_result().unwrap();
        assert_eq!(widget.name, "drum");
        assert!(pagination.is_none());
    }

    #[test]
    fn test_failure_uses_payload_message() {
        let env: Envelope<Widget> =
            serde_json::from_str(r#"{"success": false, "message": "Order not found"}"#).unwrap();
        assert_eq!(env.into_result().unwrap_err(), "Order not found");
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let env: Envelope<Widget> = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(env.into_result().unwrap_err(), DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_failure_with_empty_message_uses_fallback() {
        let env: Envelope<Widget> =
            serde_json::from_str(r#"{"success": false, "message": ""}"#).unwrap();
        assert_eq!(env.into_result().unwrap_err(), DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let env: Envelope<Widget> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(env.into_result().unwrap_err(), DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_pagination_has_more_defaults_false() {
        let env: Envelope<Vec<Widget>> = serde_json::from_str(
            r#"{"success": true, "data": [], "pagination": {"page": 1, "limit": 20}}"#,
        )
        .unwrap();
        let (_, pagination) = env.into_result().unwrap();
        assert!(!pagination.unwrap().has_more);
    }

    #[test]
    fn test_pagination_has_more_from_wire() {
        let env: Envelope<Vec<Widget>> = serde_json::from_str(
            r#"{"success": true, "data": [], "pagination": {"page": 2, "limit": 12, "hasMore": true}}"#,
        )
        .unwrap();
        let (_, pagination) = env.into_result().unwrap();
        assert!(pagination.unwrap().has_more);
    }
}
