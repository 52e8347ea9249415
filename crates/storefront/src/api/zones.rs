//! Delivery zone operations.

use tracing::instrument;

use super::types::Zone;
use super::{ApiError, MarketplaceClient};

impl MarketplaceClient {
    /// Fetch the full list of delivery zones.
    ///
    /// Zone pricing logic lives on the backend; this layer only renders the
    /// returned fees.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_delivery_zones(&self) -> Result<Vec<Zone>, ApiError> {
        let (zones, _) = self.get_envelope("/delivery-zones", &[], None).await?;
        Ok(zones)
    }
}
