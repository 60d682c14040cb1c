//! `SQLite` implementation of the store and catalog ports.

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, error, warn};

use pokepipe_core::{
    CanonicalRecord, PokemonCatalogPort, PokemonDetail, PokemonFilter, PokemonStorePort,
    PokemonSummary, ReferenceEntities, RepositoryError, TableCounts,
};

use super::map_sqlx_error;
use super::{catalog_queries, upserts};
use crate::setup;

/// `SQLite` repository for pokemon and their reference entities.
pub struct SqlitePokemonRepository {
    pool: SqlitePool,
}

impl SqlitePokemonRepository {
    /// Create a new repository backed by `pool`.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Reference entities first, then every record in order.
    async fn write_batch(
        conn: &mut SqliteConnection,
        batch: &[CanonicalRecord],
    ) -> Result<(), sqlx::Error> {
        let refs = ReferenceEntities::collect(batch);
        debug!(
            types = refs.types.len(),
            abilities = refs.abilities.len(),
            stats = refs.stats.len(),
            "Upserting reference entities"
        );
        upserts::upsert_reference_entities(conn, &refs).await?;

        for record in batch {
            upserts::upsert_record(conn, record).await?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Store port
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PokemonStorePort for SqlitePokemonRepository {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        setup::ensure_schema(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn wipe(&self) -> Result<(), RepositoryError> {
        setup::drop_schema(&self.pool).await.map_err(map_sqlx_error)
    }

    async fn load_batch(&self, batch: &[CanonicalRecord]) -> Result<usize, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        match Self::write_batch(&mut *tx, batch).await {
            Ok(()) => {
                tx.commit().await.map_err(map_sqlx_error)?;
                debug!(records = batch.len(), "Batch committed");
                Ok(batch.len())
            }
            Err(e) => {
                error!(records = batch.len(), error = %e, "Batch failed, rolling back");
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "Rollback failed");
                }
                Err(map_sqlx_error(e))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog port
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PokemonCatalogPort for SqlitePokemonRepository {
    async fn list_type_names(&self) -> Result<Vec<String>, RepositoryError> {
        catalog_queries::type_names(&self.pool).await
    }

    async fn list_pokemon(
        &self,
        filter: &PokemonFilter,
    ) -> Result<Vec<PokemonSummary>, RepositoryError> {
        catalog_queries::list_pokemon(&self.pool, filter).await
    }

    async fn get_pokemon(&self, name: &str) -> Result<PokemonDetail, RepositoryError> {
        catalog_queries::pokemon_by_name(&self.pool, name).await
    }

    async fn table_counts(&self) -> Result<TableCounts, RepositoryError> {
        catalog_queries::table_counts(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use pokepipe_core::{AbilitySlot, StatValue, TypeSlot};

    fn bulbasaur() -> CanonicalRecord {
        CanonicalRecord {
            id: 1,
            name: "bulbasaur".to_string(),
            base_experience: Some(64),
            height_cm: 70,
            weight_kg: 6.9,
            bmi: Some(14.08),
            sprite_url: Some("https://img/1.png".to_string()),
            types: vec![
                TypeSlot {
                    type_id: 12,
                    name: "grass".to_string(),
                    slot: 1,
                },
                TypeSlot {
                    type_id: 4,
                    name: "poison".to_string(),
                    slot: 2,
                },
            ],
            abilities: vec![
                AbilitySlot {
                    ability_id: 65,
                    name: "overgrow".to_string(),
                    is_hidden: false,
                    slot: 1,
                },
                AbilitySlot {
                    ability_id: 34,
                    name: "chlorophyll".to_string(),
                    is_hidden: true,
                    slot: 3,
                },
            ],
            stats: vec![
                StatValue {
                    stat_id: 1,
                    name: "hp".to_string(),
                    base_value: 45,
                    effort: 0,
                },
                StatValue {
                    stat_id: 2,
                    name: "attack".to_string(),
                    base_value: 49,
                    effort: 0,
                },
            ],
        }
    }

    fn charmander() -> CanonicalRecord {
        CanonicalRecord {
            id: 4,
            name: "charmander".to_string(),
            base_experience: Some(62),
            height_cm: 60,
            weight_kg: 8.5,
            bmi: Some(23.61),
            sprite_url: None,
            types: vec![TypeSlot {
                type_id: 10,
                name: "fire".to_string(),
                slot: 1,
            }],
            abilities: vec![AbilitySlot {
                ability_id: 66,
                name: "blaze".to_string(),
                is_hidden: false,
                slot: 1,
            }],
            stats: vec![StatValue {
                stat_id: 1,
                name: "hp".to_string(),
                base_value: 39,
                effort: 0,
            }],
        }
    }

    async fn repo() -> SqlitePokemonRepository {
        SqlitePokemonRepository::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn test_load_batch_persists_everything() {
        let repo = repo().await;
        let loaded = repo.load_batch(&[bulbasaur(), charmander()]).await.unwrap();
        assert_eq!(loaded, 2);

        let counts = repo.table_counts().await.unwrap();
        assert_eq!(
            counts,
            TableCounts {
                pokemon: 2,
                types: 3,
                abilities: 3,
                stats: 2,
                pokemon_types: 3,
                pokemon_abilities: 3,
                pokemon_stats: 3,
            }
        );
    }

    #[tokio::test]
    async fn test_load_batch_is_idempotent() {
        let repo = repo().await;
        repo.load_batch(&[bulbasaur(), charmander()]).await.unwrap();
        let first = repo.get_pokemon("bulbasaur").await.unwrap();
        let counts_first = repo.table_counts().await.unwrap();

        repo.load_batch(&[bulbasaur(), charmander()]).await.unwrap();
        let second = repo.get_pokemon("bulbasaur").await.unwrap();

        assert_eq!(repo.table_counts().await.unwrap(), counts_first);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_reload_updates_in_place() {
        let repo = repo().await;
        repo.load_batch(&[bulbasaur()]).await.unwrap();

        let mut changed = bulbasaur();
        changed.base_experience = Some(70);
        changed.abilities[1].slot = 2;
        changed.stats[0].base_value = 50;
        repo.load_batch(&[changed]).await.unwrap();

        let detail = repo.get_pokemon("bulbasaur").await.unwrap();
        assert_eq!(detail.summary.base_experience, Some(70));
        assert_eq!(detail.stats[0].base_value, 50);
        let counts = repo.table_counts().await.unwrap();
        assert_eq!(counts.pokemon, 1);
        assert_eq!(counts.pokemon_abilities, 2);
    }

    #[tokio::test]
    async fn test_failed_batch_rolls_back() {
        let repo = repo().await;
        repo.load_batch(&[charmander()]).await.unwrap();

        // Same name as an existing row under a different id
        let mut clash = bulbasaur();
        clash.name = "charmander".to_string();
        let err = repo.load_batch(&[bulbasaur(), clash]).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));

        let counts = repo.table_counts().await.unwrap();
        assert_eq!(counts.pokemon, 1);
        assert_eq!(counts.types, 1);
        assert!(matches!(
            repo.get_pokemon("bulbasaur").await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_batch_loads_nothing() {
        let repo = repo().await;
        assert_eq!(repo.load_batch(&[]).await.unwrap(), 0);
        assert_eq!(repo.table_counts().await.unwrap(), TableCounts::default());
    }

    #[tokio::test]
    async fn test_get_pokemon_returns_ordered_associations() {
        let repo = repo().await;
        repo.load_batch(&[bulbasaur()]).await.unwrap();

        let detail = repo.get_pokemon("bulbasaur").await.unwrap();
        assert_eq!(detail.summary.types, vec!["grass", "poison"]);
        assert_eq!(detail.summary.abilities.len(), 2);
        assert!(detail.summary.abilities[1].is_hidden);
        let stats: Vec<_> = detail.stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(stats, vec!["hp", "attack"]);
        assert_eq!(detail.summary.bmi, Some(14.08));
    }

    #[tokio::test]
    async fn test_wipe_then_ensure_schema() {
        let repo = repo().await;
        repo.load_batch(&[bulbasaur()]).await.unwrap();

        repo.wipe().await.unwrap();
        assert!(repo.table_counts().await.is_err());

        repo.ensure_schema().await.unwrap();
        assert_eq!(repo.table_counts().await.unwrap(), TableCounts::default());
    }

    #[tokio::test]
    async fn test_deleting_pokemon_cascades() {
        let repo = repo().await;
        repo.load_batch(&[bulbasaur()]).await.unwrap();

        sqlx::query("DELETE FROM pokemon WHERE id = 1")
            .execute(repo.pool())
            .await
            .unwrap();

        let counts = repo.table_counts().await.unwrap();
        assert_eq!(counts.pokemon_types, 0);
        assert_eq!(counts.pokemon_abilities, 0);
        assert_eq!(counts.pokemon_stats, 0);
        assert_eq!(counts.types, 2);
    }
}
