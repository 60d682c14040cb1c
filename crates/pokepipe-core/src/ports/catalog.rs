//! Catalog port: the read side of persistence.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{PokemonDetail, PokemonFilter, PokemonSummary, TableCounts};

/// Queries over persisted pokemon.
#[async_trait]
pub trait PokemonCatalogPort: Send + Sync {
    /// All stored type names, sorted.
    async fn list_type_names(&self) -> Result<Vec<String>, RepositoryError>;

    /// Stored pokemon matching `filter`, ordered by id.
    async fn list_pokemon(
        &self,
        filter: &PokemonFilter,
    ) -> Result<Vec<PokemonSummary>, RepositoryError>;

    /// One pokemon by exact name.
    ///
    /// Returns `RepositoryError::NotFound` if no row has that name.
    async fn get_pokemon(&self, name: &str) -> Result<PokemonDetail, RepositoryError>;

    /// Row counts of every table.
    async fn table_counts(&self) -> Result<TableCounts, RepositoryError>;
}
