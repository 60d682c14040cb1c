//! Read queries behind `PokemonCatalogPort`.

use pokepipe_core::{
    PokemonDetail, PokemonFilter, PokemonSummary, RepositoryError, StatEntry, TableCounts,
};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use super::map_sqlx_error;
use super::row_mappers::{POKEMON_SELECT_COLUMNS, row_to_ability, row_to_stat, row_to_summary};

/// Escape `%`, `_` and `\` for a `LIKE ... ESCAPE '\'` pattern.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub async fn type_names(pool: &SqlitePool) -> Result<Vec<String>, RepositoryError> {
    let rows = sqlx::query(r#"SELECT name FROM "type" ORDER BY name"#)
        .fetch_all(pool)
        .await
        .map_err(map_sqlx_error)?;

    rows.iter()
        .map(|row| row.try_get("name").map_err(map_sqlx_error))
        .collect()
}

/// Type names of one pokemon in slot order.
async fn types_of(pool: &SqlitePool, pokemon_id: i64) -> Result<Vec<String>, RepositoryError> {
    let rows = sqlx::query(
        r#"
        SELECT t.name
        FROM pokemon_type pt
        JOIN "type" t ON t.id = pt.type_id
        WHERE pt.pokemon_id = ?
        ORDER BY pt.slot, t.id
        "#,
    )
    .bind(pokemon_id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx_error)?;

    rows.iter()
        .map(|row| row.try_get("name").map_err(map_sqlx_error))
        .collect()
}

async fn with_associations(
    pool: &SqlitePool,
    mut summary: PokemonSummary,
) -> Result<PokemonSummary, RepositoryError> {
    summary.types = types_of(pool, summary.id).await?;

    let ability_rows = sqlx::query(
        r"
        SELECT a.name, pa.is_hidden
        FROM pokemon_ability pa
        JOIN ability a ON a.id = pa.ability_id
        WHERE pa.pokemon_id = ?
        ORDER BY pa.slot, a.id
        ",
    )
    .bind(summary.id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx_error)?;
    summary.abilities = ability_rows
        .iter()
        .map(row_to_ability)
        .collect::<Result<_, _>>()?;

    Ok(summary)
}

pub async fn list_pokemon(
    pool: &SqlitePool,
    filter: &PokemonFilter,
) -> Result<Vec<PokemonSummary>, RepositoryError> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
        "SELECT {POKEMON_SELECT_COLUMNS} FROM pokemon p WHERE 1 = 1"
    ));

    if let Some(needle) = filter.normalized_name() {
        qb.push(" AND lower(p.name) LIKE ")
            .push_bind(like_pattern(&needle))
            .push(r" ESCAPE '\'");
    }

    let types = filter.normalized_types();
    if !types.is_empty() {
        qb.push(
            r#" AND EXISTS (
                SELECT 1 FROM pokemon_type pt
                JOIN "type" t ON t.id = pt.type_id
                WHERE pt.pokemon_id = p.id AND lower(t.name) IN ("#,
        );
        let mut names = qb.separated(", ");
        for t in types {
            names.push_bind(t);
        }
        names.push_unseparated("))");
    }

    qb.push(" ORDER BY p.id");

    let rows = qb
        .build()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx_error)?;

    let mut result = Vec::with_capacity(rows.len());
    for row in &rows {
        let summary = row_to_summary(row)?;
        result.push(with_associations(pool, summary).await?);
    }
    Ok(result)
}

pub async fn pokemon_by_name(pool: &SqlitePool, name: &str) -> Result<PokemonDetail, RepositoryError> {
    let row = sqlx::query(&format!(
        "SELECT {POKEMON_SELECT_COLUMNS} FROM pokemon WHERE name = ?"
    ))
    .bind(name)
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx_error)?
    .ok_or_else(|| RepositoryError::NotFound(format!("pokemon name={name}")))?;

    let loaded_at = row.try_get("loaded_at").map_err(map_sqlx_error)?;
    let summary = with_associations(pool, row_to_summary(&row)?).await?;

    let stat_rows = sqlx::query(
        r"
        SELECT s.name, ps.base_stat, ps.effort
        FROM pokemon_stat ps
        JOIN stat s ON s.id = ps.stat_id
        WHERE ps.pokemon_id = ?
        ORDER BY ps.stat_id
        ",
    )
    .bind(summary.id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx_error)?;
    let stats = stat_rows
        .iter()
        .map(row_to_stat)
        .collect::<Result<Vec<StatEntry>, _>>()?;

    Ok(PokemonDetail {
        summary,
        stats,
        loaded_at,
    })
}

pub async fn table_counts(pool: &SqlitePool) -> Result<TableCounts, RepositoryError> {
    let row = sqlx::query(
        r#"
        SELECT
            (SELECT COUNT(*) FROM pokemon) AS pokemon,
            (SELECT COUNT(*) FROM "type") AS types,
            (SELECT COUNT(*) FROM ability) AS abilities,
            (SELECT COUNT(*) FROM stat) AS stats,
            (SELECT COUNT(*) FROM pokemon_type) AS pokemon_types,
            (SELECT COUNT(*) FROM pokemon_ability) AS pokemon_abilities,
            (SELECT COUNT(*) FROM pokemon_stat) AS pokemon_stats
        "#,
    )
    .fetch_one(pool)
    .await
    .map_err(map_sqlx_error)?;

    let get = |column: &str| row.try_get::<i64, _>(column).map_err(map_sqlx_error);
    Ok(TableCounts {
        pokemon: get("pokemon")?,
        types: get("types")?,
        abilities: get("abilities")?,
        stats: get("stats")?,
        pokemon_types: get("pokemon_types")?,
        pokemon_abilities: get("pokemon_abilities")?,
        pokemon_stats: get("pokemon_stats")?,
    })
}
