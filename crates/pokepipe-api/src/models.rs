//! Wire types and internal configuration for the PokeAPI client.

use serde::Deserialize;
use std::time::Duration;
use tokio::sync::Semaphore;
use url::Url;

use crate::config::PokeApiConfig;
use crate::error::ApiResult;

/// A `{name, url}` reference as PokeAPI returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// One page of `/pokemon?limit=&offset=`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPage {
    #[serde(default)]
    pub count: Option<u64>,
    pub results: Vec<NamedApiResource>,
}

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub max_concurrency: usize,
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl ApiConfig {
    /// Limits are clamped into the range the client can honor.
    pub fn from_public(config: &PokeApiConfig) -> ApiResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            max_concurrency: config.max_concurrency.clamp(1, Semaphore::MAX_PERMITS),
            max_attempts: config.max_attempts.max(1),
            retry_delay: config.retry_delay,
        })
    }
}
