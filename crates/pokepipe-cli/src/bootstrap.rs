//! CLI composition root.
//!
//! This module builds the services the handlers use from resolved settings:
//! the SQLite pool, the PokeAPI client and the repository adapters.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use pokepipe_api::{DefaultPokeApiClient, PokeApiConfig};
use pokepipe_core::{CatalogService, PipelineService, PipelineSettings, PokemonSourcePort, Repos};
use pokepipe_db::{RepositoryFactory, setup_database};

use crate::error::CliError;

/// Configuration for CLI bootstrap.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: PipelineSettings,
}

impl CliConfig {
    /// Read settings from the environment, then apply the `--db-path` override.
    pub fn from_env(db_path_override: Option<PathBuf>) -> Result<Self, CliError> {
        let mut settings = PipelineSettings::from_env()?;
        if let Some(path) = db_path_override {
            settings = settings.with_db_path(path);
        }
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Default settings with an explicit database path.
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        Self {
            settings: PipelineSettings::default().with_db_path(path),
        }
    }
}

/// Everything a handler needs.
pub struct CliContext {
    pipeline: PipelineService,
    catalog: CatalogService,
    settings: PipelineSettings,
}

impl CliContext {
    /// Pipeline service for `run`, `init-db` and `wipe`.
    pub const fn pipeline(&self) -> &PipelineService {
        &self.pipeline
    }

    /// Catalog service for the read commands.
    pub const fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Settings this context was built from.
    pub const fn settings(&self) -> &PipelineSettings {
        &self.settings
    }
}

/// Bootstrap the CLI from configuration.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let settings = config.settings;

    // 1. Open the database (creates the file and schema if missing)
    let pool = setup_database(&settings.db_path)
        .await
        .map_err(|e| CliError::Database(format!("{}: {e:#}", settings.db_path.display())))?;

    // 2. Build the PokeAPI client
    let client = DefaultPokeApiClient::new(&PokeApiConfig::from_settings(&settings))
        .map_err(|e| CliError::Config(e.to_string()))?;

    // 3. Wire adapters into services
    let repos = RepositoryFactory::build_repos(pool);
    Ok(bootstrap_with(settings, Arc::new(client), repos))
}

/// Assemble a context from already-built adapters.
pub fn bootstrap_with(
    settings: PipelineSettings,
    source: Arc<dyn PokemonSourcePort>,
    repos: Repos,
) -> CliContext {
    CliContext {
        pipeline: PipelineService::new(source, repos.store),
        catalog: CatalogService::new(repos.catalog),
        settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_bootstrap_creates_database() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("pokemon.db");

        let ctx = bootstrap(CliConfig::with_db_path(&path)).await.unwrap();

        assert!(path.exists());
        assert_eq!(ctx.settings().db_path, path);
        let counts = ctx.catalog().counts().await.unwrap();
        assert_eq!(counts.pokemon, 0);
    }
}
