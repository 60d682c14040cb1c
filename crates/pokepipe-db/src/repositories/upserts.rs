//! Upsert statements used by the batch loader.
//!
//! Every function takes a bare connection so the caller decides the
//! transaction boundary.

use chrono::Utc;
use pokepipe_core::{CanonicalRecord, ReferenceEntities};
use sqlx::SqliteConnection;
use std::collections::BTreeMap;

const UPSERT_TYPE: &str =
    r#"INSERT INTO "type" (id, name) VALUES (?, ?) ON CONFLICT(id) DO UPDATE SET name = excluded.name"#;
const UPSERT_ABILITY: &str =
    "INSERT INTO ability (id, name) VALUES (?, ?) ON CONFLICT(id) DO UPDATE SET name = excluded.name";
const UPSERT_STAT: &str =
    "INSERT INTO stat (id, name) VALUES (?, ?) ON CONFLICT(id) DO UPDATE SET name = excluded.name";

/// `loaded_at` is only written on insert.
const UPSERT_POKEMON: &str = r"
    INSERT INTO pokemon (id, name, base_experience, height_cm, weight_kg, bmi, sprite_url, loaded_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
    ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        base_experience = excluded.base_experience,
        height_cm = excluded.height_cm,
        weight_kg = excluded.weight_kg,
        bmi = excluded.bmi,
        sprite_url = excluded.sprite_url
";

const UPSERT_POKEMON_TYPE: &str = r"
    INSERT INTO pokemon_type (pokemon_id, type_id, slot) VALUES (?, ?, ?)
    ON CONFLICT(pokemon_id, type_id) DO UPDATE SET slot = excluded.slot
";

const UPSERT_POKEMON_ABILITY: &str = r"
    INSERT INTO pokemon_ability (pokemon_id, ability_id, is_hidden, slot) VALUES (?, ?, ?, ?)
    ON CONFLICT(pokemon_id, ability_id) DO UPDATE SET
        is_hidden = excluded.is_hidden,
        slot = excluded.slot
";

const UPSERT_POKEMON_STAT: &str = r"
    INSERT INTO pokemon_stat (pokemon_id, stat_id, base_stat, effort) VALUES (?, ?, ?, ?)
    ON CONFLICT(pokemon_id, stat_id) DO UPDATE SET
        base_stat = excluded.base_stat,
        effort = excluded.effort
";

async fn upsert_named(
    conn: &mut SqliteConnection,
    statement: &str,
    entities: &BTreeMap<i64, String>,
) -> Result<(), sqlx::Error> {
    for (id, name) in entities {
        sqlx::query(statement)
            .bind(*id)
            .bind(name)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

/// One upsert per distinct type, ability and stat id.
pub async fn upsert_reference_entities(
    conn: &mut SqliteConnection,
    refs: &ReferenceEntities,
) -> Result<(), sqlx::Error> {
    upsert_named(conn, UPSERT_TYPE, &refs.types).await?;
    upsert_named(conn, UPSERT_ABILITY, &refs.abilities).await?;
    upsert_named(conn, UPSERT_STAT, &refs.stats).await?;
    Ok(())
}

/// Upsert the pokemon row, then each association row.
///
/// Reference entities must already exist.
pub async fn upsert_record(
    conn: &mut SqliteConnection,
    record: &CanonicalRecord,
) -> Result<(), sqlx::Error> {
    sqlx::query(UPSERT_POKEMON)
        .bind(record.id)
        .bind(&record.name)
        .bind(record.base_experience)
        .bind(record.height_cm)
        .bind(record.weight_kg)
        .bind(record.bmi)
        .bind(&record.sprite_url)
        .bind(Utc::now())
        .execute(&mut *conn)
        .await?;

    for t in &record.types {
        sqlx::query(UPSERT_POKEMON_TYPE)
            .bind(record.id)
            .bind(t.type_id)
            .bind(t.slot)
            .execute(&mut *conn)
            .await?;
    }

    for a in &record.abilities {
        sqlx::query(UPSERT_POKEMON_ABILITY)
            .bind(record.id)
            .bind(a.ability_id)
            .bind(a.is_hidden)
            .bind(a.slot)
            .execute(&mut *conn)
            .await?;
    }

    for s in &record.stats {
        sqlx::query(UPSERT_POKEMON_STAT)
            .bind(record.id)
            .bind(s.stat_id)
            .bind(s.base_value)
            .bind(s.effort)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}
