//! HTTP backend abstraction for the PokeAPI.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with a per-request timeout and fixed-delay retries.

use crate::config::PokeApiConfig;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `PokemonSourcePort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Every failure counts as a failed attempt: connection errors, timeouts,
/// non-success statuses and undecodable bodies. Attempts are separated by a
/// fixed delay; there is no delay after the last one.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_attempts: u32,
    retry_delay: Duration,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &PokeApiConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_attempts: config.max_attempts.max(1),
            retry_delay: config.retry_delay,
        })
    }

    /// One attempt: send, check status, decode.
    async fn fetch_once<T: DeserializeOwned>(&self, url: &Url) -> ApiResult<T> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch a URL, retrying up to `max_attempts` times in total.
    async fn fetch_with_retry<T: DeserializeOwned>(&self, url: &Url) -> ApiResult<T> {
        let mut last_error: Option<ApiError> = None;

        for attempt in 1..=self.max_attempts {
            match self.fetch_once(url).await {
                Ok(data) => return Ok(data),
                Err(e) => {
                    if attempt < self.max_attempts {
                        warn!(
                            attempt,
                            max_attempts = self.max_attempts,
                            url = %url,
                            error = %e,
                            "Request failed, retrying"
                        );
                        tokio::time::sleep(self.retry_delay).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        debug!(url = %url, "GET");
        self.fetch_with_retry(url).await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
