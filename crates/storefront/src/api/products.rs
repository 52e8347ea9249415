//! Product operations.

use a2z_core::types::ProductId;
use tracing::instrument;

use super::types::Product;
use super::{ApiError, MarketplaceClient};

impl MarketplaceClient {
    /// Get a single product by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the API request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, ApiError> {
        if id.is_empty() {
            return Err(ApiError::MissingParam("product id"));
        }
        let path = format!("/products/{}", urlencoding::encode(id.as_str()));
        let (product, _) = self.get_envelope(&path, &[], None).await?;
        Ok(product)
    }
}
