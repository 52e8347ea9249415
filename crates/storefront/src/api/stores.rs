//! Store operations.

use a2z_core::fetch::{ListQuery, Page};
use a2z_core::types::StoreSlug;
use tracing::instrument;

use super::types::{Product, Rating, RatingInput, Store};
use super::{ApiError, MarketplaceClient};

impl MarketplaceClient {
    /// Get the stores featured on the home page.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_featured_stores(&self, limit: u32) -> Result<Vec<Store>, ApiError> {
        let query = [
            ("featured", "true".to_string()),
            ("limit", limit.to_string()),
        ];
        let (stores, _) = self.get_envelope("/stores", &query, None).await?;
        Ok(stores)
    }

    /// Get a store by its slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is not found or the API request fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn get_store_by_slug(&self, slug: &StoreSlug) -> Result<Store, ApiError> {
        let path = format!("/stores/{}", urlencoding::encode(slug.as_str()));
        let (store, _) = self.get_envelope(&path, &[], None).await?;
        Ok(store)
    }

    /// Get one page of a store's products.
    ///
    /// The query carries the caller's page, limit, category, and sort
    /// configuration; the response's pagination flag travels back verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, query), fields(slug = %slug, page = query.page))]
    pub async fn get_store_products(
        &self,
        slug: &StoreSlug,
        query: &ListQuery,
    ) -> Result<Page<Product>, ApiError> {
        let path = format!("/stores/{}/products", urlencoding::encode(slug.as_str()));
        let (items, pagination) = self
            .get_envelope(&path, &query.to_query_pairs(), None)
            .await?;
        Ok(Page { items, pagination })
    }

    /// Submit a rating for a store.
    ///
    /// Fire-and-forget from the page's perspective; the displayed store
    /// snapshot is not refreshed unless the caller re-fetches.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the rating is rejected.
    #[instrument(skip(self, input), fields(slug = %slug, score = input.score))]
    pub async fn rate_store(
        &self,
        slug: &StoreSlug,
        input: &RatingInput,
    ) -> Result<Rating, ApiError> {
        let path = format!("/stores/{}/ratings", urlencoding::encode(slug.as_str()));
        self.send_envelope(reqwest::Method::POST, &path, Some(input), None)
            .await
    }
}
