//! Catalog service - read access to persisted pokemon.

use crate::domain::{PokemonDetail, PokemonFilter, PokemonSummary, TableCounts};
use crate::ports::{PipelineError, PokemonCatalogPort, RepositoryError};
use std::sync::Arc;

/// Service for browsing stored data.
///
/// A thin facade over the injected `PokemonCatalogPort`.
pub struct CatalogService {
    catalog: Arc<dyn PokemonCatalogPort>,
}

impl CatalogService {
    /// Create a new catalog service with the given port.
    pub fn new(catalog: Arc<dyn PokemonCatalogPort>) -> Self {
        Self { catalog }
    }

    /// All stored type names, sorted.
    pub async fn type_names(&self) -> Result<Vec<String>, PipelineError> {
        self.catalog.list_type_names().await.map_err(PipelineError::from)
    }

    /// Stored pokemon matching `filter`.
    pub async fn list(&self, filter: &PokemonFilter) -> Result<Vec<PokemonSummary>, PipelineError> {
        self.catalog
            .list_pokemon(filter)
            .await
            .map_err(PipelineError::from)
    }

    /// One pokemon by name, or `None` if not stored.
    pub async fn get(&self, name: &str) -> Result<Option<PokemonDetail>, PipelineError> {
        match self.catalog.get_pokemon(name.trim()).await {
            Ok(detail) => Ok(Some(detail)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(PipelineError::from(e)),
        }
    }

    /// One pokemon by name. Returns error if not found.
    pub async fn find(&self, name: &str) -> Result<PokemonDetail, PipelineError> {
        self.get(name)
            .await?
            .ok_or_else(|| PipelineError::Validation(format!("Pokemon not found: {name}")))
    }

    /// Row counts of every table.
    pub async fn counts(&self) -> Result<TableCounts, PipelineError> {
        self.catalog.table_counts().await.map_err(PipelineError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        Catalog {}

        #[async_trait]
        impl PokemonCatalogPort for Catalog {
            async fn list_type_names(&self) -> Result<Vec<String>, RepositoryError>;
            async fn list_pokemon(&self, filter: &PokemonFilter) -> Result<Vec<PokemonSummary>, RepositoryError>;
            async fn get_pokemon(&self, name: &str) -> Result<PokemonDetail, RepositoryError>;
            async fn table_counts(&self) -> Result<TableCounts, RepositoryError>;
        }
    }

    fn detail(name: &str) -> PokemonDetail {
        PokemonDetail {
            summary: PokemonSummary {
                id: 1,
                name: name.to_string(),
                height_cm: 70,
                weight_kg: 6.9,
                bmi: Some(14.08),
                base_experience: Some(64),
                sprite_url: None,
                types: vec!["grass".to_string()],
                abilities: vec![],
            },
            stats: vec![],
            loaded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn get_maps_not_found_to_none() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_pokemon()
            .withf(|name| name == "missingno")
            .returning(|name| Err(RepositoryError::NotFound(name.to_string())));

        let svc = CatalogService::new(Arc::new(catalog));
        assert!(svc.get("missingno").await.unwrap().is_none());
        assert!(matches!(
            svc.find("missingno").await,
            Err(PipelineError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn get_trims_the_name() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_pokemon()
            .withf(|name| name == "bulbasaur")
            .returning(|name| Ok(detail(name)));

        let svc = CatalogService::new(Arc::new(catalog));
        let found = svc.get("  bulbasaur ").await.unwrap().unwrap();
        assert_eq!(found.summary.name, "bulbasaur");
    }

    #[tokio::test]
    async fn storage_errors_propagate() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_table_counts()
            .returning(|| Err(RepositoryError::Storage("locked".to_string())));

        let svc = CatalogService::new(Arc::new(catalog));
        assert!(svc.counts().await.unwrap_err().is_persistence());
    }

    #[tokio::test]
    async fn list_passes_the_filter_through() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_list_pokemon()
            .withf(|f| f.types == vec!["grass".to_string()])
            .returning(|_| Ok(vec![detail("bulbasaur").summary]));

        let svc = CatalogService::new(Arc::new(catalog));
        let rows = svc
            .list(&PokemonFilter::default().with_type("grass"))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }
}
