//! Cart operations.
//!
//! The cart is always fetched whole. Write endpoints return an
//! acknowledgement only; the rendered cart is refreshed by an explicit
//! re-fetch in the calling handler.

use a2z_core::types::{CartId, CartItemId};
use tracing::instrument;

use super::types::{AddCartItemInput, Cart, CartAck, UpdateCartItemInput};
use super::{ApiError, MarketplaceClient};

impl MarketplaceClient {
    /// Create a new, empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<Cart, ApiError> {
        self.send_envelope(reqwest::Method::POST, "/carts", None::<&()>, None)
            .await
    }

    /// Fetch a cart by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is not found or the API request fails.
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    pub async fn get_cart(&self, cart_id: &CartId) -> Result<Cart, ApiError> {
        if cart_id.is_empty() {
            return Err(ApiError::MissingParam("cart id"));
        }
        let path = format!("/carts/{}", urlencoding::encode(cart_id.as_str()));
        let (cart, _) = self.get_envelope(&path, &[], None).await?;
        Ok(cart)
    }

    /// Add a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the item is rejected.
    #[instrument(skip(self, input), fields(cart_id = %cart_id))]
    pub async fn add_cart_item(
        &self,
        cart_id: &CartId,
        input: &AddCartItemInput,
    ) -> Result<CartAck, ApiError> {
        let path = format!("/carts/{}/items", urlencoding::encode(cart_id.as_str()));
        self.send_envelope(reqwest::Method::POST, &path, Some(input), None)
            .await
    }

    /// Change the quantity of a cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(cart_id = %cart_id, item_id = %item_id))]
    pub async fn update_cart_item(
        &self,
        cart_id: &CartId,
        item_id: &CartItemId,
        quantity: u32,
    ) -> Result<CartAck, ApiError> {
        let path = format!(
            "/carts/{}/items/{}",
            urlencoding::encode(cart_id.as_str()),
            urlencoding::encode(item_id.as_str())
        );
        let input = UpdateCartItemInput { quantity };
        self.send_envelope(reqwest::Method::PATCH, &path, Some(&input), None)
            .await
    }

    /// Remove a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(cart_id = %cart_id, item_id = %item_id))]
    pub async fn remove_cart_item(
        &self,
        cart_id: &CartId,
        item_id: &CartItemId,
    ) -> Result<CartAck, ApiError> {
        let path = format!(
            "/carts/{}/items/{}",
            urlencoding::encode(cart_id.as_str()),
            urlencoding::encode(item_id.as_str())
        );
        self.send_envelope(reqwest::Method::DELETE, &path, None::<&()>, None)
            .await
    }
}
