//! Merchant endpoint operations.

use a2z_core::fetch::{ListQuery, Page};
use a2z_core::types::{OrderId, OrderStatus, ProductId, SessionToken};
use tracing::instrument;

use super::types::{
    AuthSession, CustomerSummary, DashboardSummary, LoginInput, MerchantOrder, MerchantProduct,
    StoreSettings,
};
use super::{ApiError, MerchantApiClient};

impl MerchantApiClient {
    /// Exchange merchant credentials for a session token.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request fails.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: &LoginInput) -> Result<AuthSession, ApiError> {
        self.send_envelope(reqwest::Method::POST, "/merchant/auth/login", Some(input), None)
            .await
    }

    /// Fetch the dashboard overview numbers.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the request fails.
    #[instrument(skip(self, token))]
    pub async fn get_dashboard_summary(
        &self,
        token: &SessionToken,
    ) -> Result<DashboardSummary, ApiError> {
        let (summary, _) = self.get_envelope("/merchant/summary", &[], token).await?;
        Ok(summary)
    }

    /// List the merchant's products.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the request fails.
    #[instrument(skip(self, token, query), fields(page = query.page))]
    pub async fn list_products(
        &self,
        token: &SessionToken,
        query: &ListQuery,
    ) -> Result<Page<MerchantProduct>, ApiError> {
        let (items, pagination) = self
            .get_envelope("/merchant/products", &query.to_query_pairs(), token)
            .await?;
        Ok(Page { items, pagination })
    }

    /// Fetch one of the merchant's products.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the request fails.
    #[instrument(skip(self, token), fields(product_id = %id))]
    pub async fn get_product(
        &self,
        token: &SessionToken,
        id: &ProductId,
    ) -> Result<MerchantProduct, ApiError> {
        let path = format!("/merchant/products/{}", urlencoding::encode(id.as_str()));
        let (product, _) = self.get_envelope(&path, &[], token).await?;
        Ok(product)
    }

    /// List the merchant's orders, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the request fails.
    #[instrument(skip(self, token, query), fields(page = query.page))]
    pub async fn list_orders(
        &self,
        token: &SessionToken,
        status: Option<OrderStatus>,
        query: &ListQuery,
    ) -> Result<Page<MerchantOrder>, ApiError> {
        let mut pairs = query.to_query_pairs();
        if let Some(status) = status {
            // Wire value matches the SCREAMING_SNAKE_CASE enum encoding
            let value = serde_json::to_string(&status)
                .unwrap_or_default()
                .trim_matches('"')
                .to_string();
            pairs.push(("status", value));
        }
        let (items, pagination) = self.get_envelope("/merchant/orders", &pairs, token).await?;
        Ok(Page { items, pagination })
    }

    /// Fetch one of the merchant's orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not found or the request fails.
    #[instrument(skip(self, token), fields(order_id = %id))]
    pub async fn get_order(
        &self,
        token: &SessionToken,
        id: &OrderId,
    ) -> Result<MerchantOrder, ApiError> {
        let path = format!("/merchant/orders/{}", urlencoding::encode(id.as_str()));
        let (order, _) = self.get_envelope(&path, &[], token).await?;
        Ok(order)
    }

    /// List the merchant's customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the request fails.
    #[instrument(skip(self, token, query), fields(page = query.page))]
    pub async fn list_customers(
        &self,
        token: &SessionToken,
        query: &ListQuery,
    ) -> Result<Page<CustomerSummary>, ApiError> {
        let (items, pagination) = self
            .get_envelope("/merchant/customers", &query.to_query_pairs(), token)
            .await?;
        Ok(Page { items, pagination })
    }

    /// Fetch the store settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the request fails.
    #[instrument(skip(self, token))]
    pub async fn get_settings(&self, token: &SessionToken) -> Result<StoreSettings, ApiError> {
        let (settings, _) = self.get_envelope("/merchant/settings", &[], token).await?;
        Ok(settings)
    }

    /// Update the store settings.
    ///
    /// Returns the saved profile; the settings page re-renders from this
    /// response rather than assuming the write landed.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the update fails.
    #[instrument(skip(self, token, settings))]
    pub async fn update_settings(
        &self,
        token: &SessionToken,
        settings: &StoreSettings,
    ) -> Result<StoreSettings, ApiError> {
        self.send_envelope(
            reqwest::Method::PUT,
            "/merchant/settings",
            Some(settings),
            Some(token),
        )
        .await
    }
}
