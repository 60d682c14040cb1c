//! SQLite persistence for pokepipe.
//!
//! [`setup`] owns the schema: seven tables (`pokemon`, `type`, `ability`,
//! `stat` and the three association tables) created idempotently and dropped
//! child-first. [`SqlitePokemonRepository`] implements both the store port
//! (transactional batch upsert) and the catalog port (read queries).

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::RepositoryFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export repository implementations
pub use repositories::SqlitePokemonRepository;

// Re-export setup functions for convenient access
pub use setup::{drop_schema, ensure_schema, setup_database};
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
