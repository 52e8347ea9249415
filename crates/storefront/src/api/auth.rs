//! Authentication operations.
//!
//! Session issuance and validation belong to the backend; this layer only
//! exchanges credentials for a token and looks up the current customer.

use a2z_core::types::SessionToken;
use tracing::instrument;

use super::types::{AuthSession, Customer, LoginInput};
use super::{ApiError, MarketplaceClient};

impl MarketplaceClient {
    /// Exchange credentials for a session token.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request fails.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: &LoginInput) -> Result<AuthSession, ApiError> {
        self.send_envelope(reqwest::Method::POST, "/auth/login", Some(input), None)
            .await
    }

    /// Fetch the customer the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidToken` if the backend rejects the token.
    #[instrument(skip(self, token))]
    pub async fn get_me(&self, token: &SessionToken) -> Result<Customer, ApiError> {
        let (customer, _) = self.get_envelope("/auth/me", &[], Some(token)).await?;
        Ok(customer)
    }
}
