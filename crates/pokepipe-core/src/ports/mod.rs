//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Each port has its own error type, mapped at the adapter boundary
//! - `PipelineError` is what callers of a run see

pub mod catalog;
pub mod source;
pub mod store;

use std::sync::Arc;
use thiserror::Error;

pub use catalog::PokemonCatalogPort;
pub use source::{PokemonSourcePort, SourceError, SourceResult};
pub use store::PokemonStorePort;

/// Container for the storage trait objects.
///
/// Lives in core so services can be wired without depending on `pokepipe-db`.
///
/// # Example
///
/// ```ignore
/// let repos = pokepipe_db::RepositoryFactory::new(pool).build_repos();
/// let catalog = CatalogService::new(repos.catalog.clone());
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Write side: schema management and batch loading.
    pub store: Arc<dyn PokemonStorePort>,
    /// Read side: browsing persisted data.
    pub catalog: Arc<dyn PokemonCatalogPort>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(store: Arc<dyn PokemonStorePort>, catalog: Arc<dyn PokemonCatalogPort>) -> Self {
        Self { store, catalog }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Errors raised while normalizing a detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The payload is missing a field or has the wrong shape.
    #[error("Malformed payload: {message}")]
    MalformedPayload { message: String },

    /// A reference locator has no trailing numeric id.
    #[error("Locator has no numeric id: {locator}")]
    InvalidLocator { locator: String },
}

/// Error type for a pipeline run.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (CLI exit codes).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Fetching from the remote API failed after all attempts.
    #[error(transparent)]
    Network(#[from] SourceError),

    /// A detail payload could not be normalized.
    #[error(transparent)]
    MalformedPayload(#[from] TransformError),

    /// Loading or reading the store failed.
    #[error(transparent)]
    Persistence(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PipelineError {
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub const fn is_malformed_payload(&self) -> bool {
        matches!(self, Self::MalformedPayload(_))
    }

    pub const fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<crate::config::ConfigError> for PipelineError {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_errors_are_network_errors() {
        let err = PipelineError::from(SourceError::Status {
            status: 503,
            url: "https://pokeapi.co/api/v2/pokemon/1".to_string(),
        });
        assert!(err.is_network());
        assert!(!err.is_persistence());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn transform_errors_are_malformed_payloads() {
        let err = PipelineError::from(TransformError::MalformedPayload {
            message: "missing field `id`".to_string(),
        });
        assert!(err.is_malformed_payload());
        assert!(!err.is_network());
    }

    #[test]
    fn repository_errors_are_persistence_errors() {
        let err = PipelineError::from(RepositoryError::Storage("disk full".to_string()));
        assert!(err.is_persistence());
        assert_eq!(err.to_string(), "Storage error: disk full");
    }
}
