//! Order operations.

use a2z_core::fetch::{ListQuery, Page};
use a2z_core::types::{OrderId, SessionToken};
use tracing::instrument;

use super::types::{CreateOrderInput, Order};
use super::{ApiError, MarketplaceClient};

impl MarketplaceClient {
    /// Get an order by its id (public tracking lookup).
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not found or the API request fails.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order_by_id(&self, id: &OrderId) -> Result<Order, ApiError> {
        if id.is_empty() {
            return Err(ApiError::MissingParam("order id"));
        }
        let path = format!("/orders/{}", urlencoding::encode(id.as_str()));
        let (order, _) = self.get_envelope(&path, &[], None).await?;
        Ok(order)
    }

    /// Place an order from the checkout form.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the order is rejected.
    #[instrument(skip(self, input))]
    pub async fn create_order(&self, input: &CreateOrderInput) -> Result<Order, ApiError> {
        self.send_envelope(reqwest::Method::POST, "/orders", Some(input), None)
            .await
    }

    /// List the logged-in customer's orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the API request fails.
    #[instrument(skip(self, token, query), fields(page = query.page))]
    pub async fn list_my_orders(
        &self,
        token: &SessionToken,
        query: &ListQuery,
    ) -> Result<Page<Order>, ApiError> {
        let (items, pagination) = self
            .get_envelope("/account/orders", &query.to_query_pairs(), Some(token))
            .await?;
        Ok(Page { items, pagination })
    }
}
