//! PokeAPI client for listing pages and detail payloads.
//!
//! This module provides the main client interface for interacting with
//! the PokeAPI.

mod details;
mod listing;

use crate::config::PokeApiConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiConfig;
use crate::port::map_error;
use pokepipe_core::SourceResult;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default PokeAPI client using the reqwest HTTP backend.
pub type DefaultPokeApiClient = PokeApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for interacting with the PokeAPI.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultPokeApiClient` for production code. The generic parameter `B`
/// is an implementation detail - external code should not instantiate this
/// directly but use `DefaultPokeApiClient::new()`.
pub struct PokeApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultPokeApiClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be built.
    pub fn new(config: &PokeApiConfig) -> SourceResult<Self> {
        let internal_config = ApiConfig::from_public(config).map_err(map_error)?;
        let backend = ReqwestBackend::new(config).map_err(map_error)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> SourceResult<Self> {
        Self::new(&PokeApiConfig::default())
    }
}

impl<B: HttpBackend> PokeApiClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
