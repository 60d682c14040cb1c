//! Port trait implementation for `PokeApiClient`.
//!
//! This module implements the core-owned `PokemonSourcePort` trait,
//! converting internal errors to `SourceError` at the boundary.

use async_trait::async_trait;
use pokepipe_core::{ListingItem, PokemonSourcePort, RawDetailPayload, SourceError, SourceResult};

use crate::client::PokeApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `SourceError`.
pub(crate) fn map_error(err: ApiError) -> SourceError {
    match err {
        ApiError::Status { status, url } => SourceError::Status { status, url },
        ApiError::InvalidResponse { message } => SourceError::InvalidResponse { message },
        ApiError::Http(e) if e.is_decode() => SourceError::InvalidResponse {
            message: e.to_string(),
        },
        ApiError::Http(e) if e.is_builder() => SourceError::Configuration {
            message: e.to_string(),
        },
        ApiError::Http(e) => SourceError::Network {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => SourceError::Configuration {
            message: e.to_string(),
        },
        ApiError::Json(e) => SourceError::InvalidResponse {
            message: e.to_string(),
        },
        ApiError::LimiterClosed(e) => SourceError::Network {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> PokemonSourcePort for PokeApiClient<B> {
    async fn fetch_listing(&self, limit: u32, offset: u32) -> SourceResult<Vec<ListingItem>> {
        self.fetch_listing_page(limit, offset)
            .await
            .map_err(map_error)
    }

    async fn fetch_details(&self, targets: &[String]) -> SourceResult<Vec<RawDetailPayload>> {
        self.fetch_detail_payloads(targets).await.map_err(map_error)
    }
}
