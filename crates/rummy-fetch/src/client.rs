//! HTTP client for the photo library API.

use bytes::Bytes;
use reqwest::{Client, Response, StatusCode};
use rummy_types::RummyError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::AccessToken;
use crate::url::DEFAULT_BASE_URL;

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL.
    pub base_url: String,
    /// Items requested per listing page.
    pub page_size: u32,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for failed requests.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 100,
            timeout: Duration::from_secs(60),
            max_retries: 5,
            base_delay_ms: 500,
            max_delay_ms: 30_000,
            user_agent: format!("rummy/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors returned by API requests.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, usually a JSON error document.
        body: String,
    },
}

impl From<ApiError> for RummyError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Http(e) => Self::Http(e.to_string()),
            ApiError::Status { status, body } => Self::Api { status, body },
        }
    }
}

/// HTTP client with bearer authentication and retry logic.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Creates a new API client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends an authenticated GET and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all retries, the server
    /// answers with a non-success status, or the body is not valid JSON for `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        token: &AccessToken,
    ) -> Result<T, ApiError> {
        let response = self.send(url, query, token).await?;
        Ok(response.json::<T>().await?)
    }

    /// Sends an authenticated GET and returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all retries or the server
    /// answers with a non-success status.
    pub async fn get_bytes(&self, url: &str, token: &AccessToken) -> Result<Bytes, ApiError> {
        let response = self.send(url, &[], token).await?;
        Ok(response.bytes().await?)
    }

    async fn send(
        &self,
        url: &str,
        query: &[(&str, String)],
        token: &AccessToken,
    ) -> Result<Response, ApiError> {
        let mut attempts = 0;

        loop {
            let request = self
                .client
                .get(url)
                .query(query)
                .bearer_auth(token.secret());

            match request.send().await {
                Ok(response) => {
                    let status = response.status();

                    // Retry on server errors (5xx) and rate limiting (429)
                    if (status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS)
                        && attempts < self.config.max_retries
                    {
                        attempts += 1;
                        let delay = self.calculate_backoff_delay(attempts);
                        debug!(%url, %status, attempts, ?delay, "retrying request");
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        return Err(ApiError::Status {
                            status: status.as_u16(),
                            body,
                        });
                    }

                    return Ok(response);
                }
                Err(e) if self.is_retryable_error(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    let delay = self.calculate_backoff_delay(attempts);
                    debug!(%url, error = %e, attempts, ?delay, "retrying request");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Calculates the backoff delay with exponential backoff and jitter.
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));

        let capped_delay = exp_delay.min(self.config.max_delay_ms);

        // Deterministic jitter (±25%) keyed on the attempt number
        let jitter_range = capped_delay / 4;
        let jitter = if jitter_range > 0 {
            let jitter_offset = (attempt as u64 * 17) % (jitter_range * 2);
            jitter_offset as i64 - jitter_range as i64
        } else {
            0
        };

        let final_delay = (capped_delay as i64 + jitter).max(100) as u64;
        Duration::from_millis(final_delay)
    }

    /// Determines if an error is retryable.
    fn is_retryable_error(&self, error: &reqwest::Error) -> bool {
        if error.is_builder() {
            return false;
        }
        error.is_timeout() || error.is_connect()
    }
}
