//! Public configuration for the PokeAPI client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use pokepipe_core::PipelineSettings;
use pokepipe_core::config::{
    DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_MAX_CONCURRENCY,
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS,
};
use std::time::Duration;

/// Configuration for the PokeAPI client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use pokepipe_api::PokeApiConfig;
/// use std::time::Duration;
///
/// let config = PokeApiConfig::new()
///     .with_base_url("http://localhost:8080/api/v2")
///     .with_max_attempts(5)
///     .with_retry_delay(Duration::from_millis(100));
/// ```
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    /// Base URL of the API, without trailing slash
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout
    pub(crate) timeout: Duration,
    /// Total attempts per request, including the first
    pub(crate) max_attempts: u32,
    /// Fixed delay between attempts
    pub(crate) retry_delay: Duration,
    /// Maximum detail fetches in flight at once
    pub(crate) max_concurrency: usize,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: concat!("pokepipe/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs_f64(DEFAULT_HTTP_TIMEOUT_SECONDS),
            max_attempts: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl PokeApiConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the client configuration from resolved pipeline settings.
    #[must_use]
    pub fn from_settings(settings: &PipelineSettings) -> Self {
        Self::new()
            .with_base_url(settings.api_base_url.clone())
            .with_timeout(settings.http_timeout)
            .with_max_attempts(settings.max_retries)
            .with_retry_delay(settings.retry_delay)
            .with_max_concurrency(settings.max_concurrency)
    }

    /// Set the base URL of the API.
    ///
    /// Defaults to `https://pokeapi.co/api/v2`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout. A request exceeding it counts as a failed attempt.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the total number of attempts per request.
    ///
    /// Defaults to 3. Values below 1 are treated as 1.
    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the fixed delay between attempts.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Set the maximum number of detail fetches in flight.
    ///
    /// Defaults to 8. Values below 1 are treated as 1.
    #[must_use]
    pub const fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit;
        self
    }
}
