//! Source port: where listings and detail payloads come from.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ListingItem, RawDetailPayload};

/// Errors from the remote source, after retries are exhausted.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Connection failure or timeout.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// The client itself is misconfigured (bad base URL, TLS setup).
    #[error("Source configuration error: {message}")]
    Configuration { message: String },
}

/// Result alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Remote source of pokemon data.
#[async_trait]
pub trait PokemonSourcePort: Send + Sync {
    /// Fetch one listing page.
    async fn fetch_listing(&self, limit: u32, offset: u32) -> SourceResult<Vec<ListingItem>>;

    /// Fetch detail payloads for `targets`.
    ///
    /// The result is index-aligned with `targets`. Any failed fetch fails the
    /// whole call; no partial results are returned.
    async fn fetch_details(&self, targets: &[String]) -> SourceResult<Vec<RawDetailPayload>>;
}
