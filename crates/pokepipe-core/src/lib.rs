//! Core domain types, the payload transformer and port definitions for pokepipe.
//!
//! The crate is infrastructure-free: HTTP lives in `pokepipe-api`, SQLite in
//! `pokepipe-db`. Both implement the traits in [`ports`], and the services in
//! [`services`] only ever see those traits.
//!
//! A run flows listing → detail payloads → [`CanonicalRecord`]s → persisted rows.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod transform;

// Re-export commonly used types for convenience
pub use config::{ConfigError, PipelineSettings};
pub use domain::{
    AbilityEntry, AbilitySlot, CanonicalRecord, ListingItem, PokemonDetail, PokemonFilter,
    PokemonSummary, RawDetailPayload, ReferenceEntities, StatEntry, StatValue, TableCounts,
    TypeSlot,
};
pub use ports::{
    PipelineError, PokemonCatalogPort, PokemonSourcePort, PokemonStorePort, Repos,
    RepositoryError, SourceError, SourceResult, TransformError,
};
pub use services::{CatalogService, PipelineService, RunSummary};
pub use transform::{transform, transform_batch};
