//! HTTP plumbing for the marketplace API client.

use std::sync::Arc;
use std::time::Duration;

use a2z_core::envelope::{Envelope, Pagination};
use a2z_core::types::SessionToken;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::ApiError;
use crate::config::MarketplaceApiConfig;

/// Header carrying the optional server-to-server API key.
pub const API_KEY_HEADER: &str = "x-a2z-api-key";

/// Client for the marketplace backend API.
///
/// Cheaply cloneable; all operations issue exactly one logical request and
/// return typed results. Nothing is cached.
#[derive(Clone)]
pub struct MarketplaceClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    max_retries: u32,
    retry_backoff: Duration,
}

impl MarketplaceClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build (e.g.,
    /// an API key that is not a valid header value).
    pub fn new(config: &MarketplaceApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        if let Some(key) = config.api_key_value() {
            let mut value = HeaderValue::from_str(key).map_err(|_| {
                ApiError::Backend("A2Z_API_KEY is not a valid header value".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                max_retries: config.max_retries,
                retry_backoff: config.retry_backoff(),
            }),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Issue an idempotent GET with the configured retry policy.
    ///
    /// Transport failures and 5xx responses are retried up to `max_retries`
    /// extra attempts with a fixed backoff; everything else resolves
    /// immediately.
    pub(super) async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: Option<&SessionToken>,
    ) -> Result<(T, Option<Pagination>), ApiError> {
        let url = self.url(path);
        let mut attempt: u32 = 0;

        loop {
            let mut request = self.inner.http.get(&url);
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(token) = token {
                request = request.bearer_auth(token.value());
            }

            match request.send().await {
                Ok(response) if response.status().is_server_error() => {
                    if attempt >= self.inner.max_retries {
                        return Self::decode_envelope(response).await;
                    }
                    tracing::warn!(
                        status = %response.status(),
                        attempt,
                        path,
                        "Marketplace API returned a server error, retrying"
                    );
                }
                Ok(response) => return Self::decode_envelope(response).await,
                Err(err) => {
                    if attempt >= self.inner.max_retries {
                        return Err(err.into());
                    }
                    tracing::warn!(
                        error = %err,
                        attempt,
                        path,
                        "Marketplace API request failed, retrying"
                    );
                }
            }

            attempt += 1;
            tokio::time::sleep(self.inner.retry_backoff).await;
        }
    }

    /// Issue a write with a JSON body. Writes are never retried.
    pub(super) async fn send_envelope<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&impl Serialize>,
        token: Option<&SessionToken>,
    ) -> Result<T, ApiError> {
        let mut request = self.inner.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token.value());
        }

        let response = request.send().await?;
        let (data, _) = Self::decode_envelope(response).await?;
        Ok(data)
    }

    /// Decode a response into its envelope payload.
    async fn decode_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<(T, Option<Pagination>), ApiError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::InvalidToken);
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        match serde_json::from_str::<Envelope<T>>(&body) {
            Ok(envelope) => envelope.into_result().map_err(ApiError::Backend),
            Err(err) => {
                if status.is_success() {
                    tracing::error!(
                        error = %err,
                        body = %body.chars().take(500).collect::<String>(),
                        "Failed to parse marketplace API response"
                    );
                    Err(ApiError::Decode(err))
                } else {
                    tracing::error!(
                        status = %status,
                        body = %body.chars().take(500).collect::<String>(),
                        "Marketplace API returned non-success status"
                    );
                    Err(ApiError::Status {
                        status: status.as_u16(),
                        snippet: body.chars().take(200).collect(),
                    })
                }
            }
        }
    }

    /// Check backend reachability (used by the readiness probe).
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unreachable or unhealthy.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<(), ApiError> {
        let response = self.inner.http.get(self.url("/health")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                snippet: String::new(),
            })
        }
    }
}
