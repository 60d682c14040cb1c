//! Composition utilities for wiring core services with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use pokepipe_core::{CatalogService, PipelineService, PokemonSourcePort, Repos};

use crate::repositories::SqlitePokemonRepository;

/// Factory for creating repository instances with `SQLite` backends.
///
/// This struct provides composition utilities only, no domain logic.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Build the store and catalog ports from a pool.
    ///
    /// Both ports share one repository instance.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        let repo = Self::pokemon_repository(pool);
        Repos::new(repo.clone(), repo)
    }

    /// Build a `PipelineService` that loads into `pool`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let pool = setup_database(&settings.db_path).await?;
    /// let source = Arc::new(DefaultPokeApiClient::new(&api_config)?);
    /// let pipeline = RepositoryFactory::build_pipeline(pool, source);
    /// let summary = pipeline.run(20, 0).await?;
    /// ```
    pub fn build_pipeline(pool: SqlitePool, source: Arc<dyn PokemonSourcePort>) -> PipelineService {
        let repos = Self::build_repos(pool);
        PipelineService::new(source, repos.store)
    }

    /// Build a `CatalogService` reading from `pool`.
    pub fn build_catalog(pool: SqlitePool) -> CatalogService {
        let repos = Self::build_repos(pool);
        CatalogService::new(repos.catalog)
    }

    /// Create a pokemon repository from a pool.
    pub fn pokemon_repository(pool: SqlitePool) -> Arc<SqlitePokemonRepository> {
        Arc::new(SqlitePokemonRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository over this database.
    pub fn repository(&self) -> SqlitePokemonRepository {
        SqlitePokemonRepository::new(self.pool.clone())
    }

    /// Store and catalog ports over this database.
    pub fn repos(&self) -> Repos {
        RepositoryFactory::build_repos(self.pool.clone())
    }
}
