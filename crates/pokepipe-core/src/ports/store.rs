//! Store port: the write side of persistence.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::CanonicalRecord;

/// Persistent store for canonical records.
#[async_trait]
pub trait PokemonStorePort: Send + Sync {
    /// Create all tables if they do not exist yet. Safe to call repeatedly.
    async fn ensure_schema(&self) -> Result<(), RepositoryError>;

    /// Drop all tables and their data.
    async fn wipe(&self) -> Result<(), RepositoryError>;

    /// Upsert reference entities and every record of `batch` in one transaction.
    ///
    /// Returns the number of records in the batch. On failure nothing from the
    /// batch is persisted.
    async fn load_batch(&self, batch: &[CanonicalRecord]) -> Result<usize, RepositoryError>;
}
