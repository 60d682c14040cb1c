//! Row mapping helpers for `SQLite` queries.

use pokepipe_core::{AbilityEntry, PokemonSummary, RepositoryError, StatEntry};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for pokemon queries.
pub const POKEMON_SELECT_COLUMNS: &str =
    "id, name, height_cm, weight_kg, bmi, base_experience, sprite_url, loaded_at";

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Parse a pokemon row. Associations are left empty for the caller to fill.
pub fn row_to_summary(row: &SqliteRow) -> Result<PokemonSummary, RepositoryError> {
    Ok(PokemonSummary {
        id: row.try_get("id").map_err(storage)?,
        name: row.try_get("name").map_err(storage)?,
        height_cm: row.try_get("height_cm").map_err(storage)?,
        weight_kg: row.try_get("weight_kg").map_err(storage)?,
        bmi: row.try_get("bmi").map_err(storage)?,
        base_experience: row.try_get("base_experience").map_err(storage)?,
        sprite_url: row.try_get("sprite_url").map_err(storage)?,
        types: Vec::new(),
        abilities: Vec::new(),
    })
}

pub fn row_to_ability(row: &SqliteRow) -> Result<AbilityEntry, RepositoryError> {
    Ok(AbilityEntry {
        name: row.try_get("name").map_err(storage)?,
        is_hidden: row.try_get("is_hidden").map_err(storage)?,
    })
}

pub fn row_to_stat(row: &SqliteRow) -> Result<StatEntry, RepositoryError> {
    Ok(StatEntry {
        name: row.try_get("name").map_err(storage)?,
        base_value: row.try_get("base_stat").map_err(storage)?,
        effort: row.try_get("effort").map_err(storage)?,
    })
}
