//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::{ApiError, MerchantApiClient};
use crate::config::MerchantConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MerchantConfig,
    api: MerchantApiClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the API client fails to build.
    pub fn new(config: MerchantConfig) -> Result<Self, ApiError> {
        let api = MerchantApiClient::new(&config.api)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, api }),
        })
    }

    /// Get a reference to the dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &MerchantConfig {
        &self.inner.config
    }

    /// Get a reference to the merchant API client.
    #[must_use]
    pub fn api(&self) -> &MerchantApiClient {
        &self.inner.api
    }
}
