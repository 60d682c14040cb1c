//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with full schema. Entry points call this with the
//! resolved database path.

use anyhow::Result;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::debug;

/// `CREATE` statements, parents before children.
///
/// Association tables use composite primary keys so each (pokemon, reference)
/// pair exists at most once, and cascade when either side is deleted.
const CREATE_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS pokemon (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        base_experience INTEGER,
        height_cm INTEGER NOT NULL,
        weight_kg REAL NOT NULL,
        bmi REAL,
        sprite_url TEXT,
        loaded_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "type" (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ability (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS stat (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pokemon_type (
        pokemon_id INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
        type_id INTEGER NOT NULL REFERENCES "type"(id) ON DELETE CASCADE,
        slot INTEGER NOT NULL,
        PRIMARY KEY (pokemon_id, type_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pokemon_ability (
        pokemon_id INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
        ability_id INTEGER NOT NULL REFERENCES ability(id) ON DELETE CASCADE,
        is_hidden INTEGER NOT NULL DEFAULT 0,
        slot INTEGER NOT NULL,
        PRIMARY KEY (pokemon_id, ability_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pokemon_stat (
        pokemon_id INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
        stat_id INTEGER NOT NULL REFERENCES stat(id) ON DELETE CASCADE,
        base_stat INTEGER NOT NULL,
        effort INTEGER NOT NULL,
        PRIMARY KEY (pokemon_id, stat_id)
    )
    "#,
];

/// Tables in drop order: children first.
const TABLES_DROP_ORDER: &[&str] = &[
    "pokemon_stat",
    "pokemon_ability",
    "pokemon_type",
    "stat",
    "ability",
    "\"type\"",
    "pokemon",
];

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Creates the parent directory if needed
/// 2. Creates the database file if it doesn't exist
/// 3. Enables foreign key enforcement on every connection
/// 4. Creates all tables
///
/// # Example
///
/// ```rust,no_run
/// use pokepipe_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("pokemon.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    ensure_schema(&pool).await?;
    debug!(path = %db_path.display(), "Database ready");

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool holds exactly one connection that never expires: every
/// connection to `sqlite::memory:` is a separate database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    use sqlx::sqlite::SqlitePoolOptions;
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Creates every table that does not exist yet.
///
/// Safe to call multiple times as all statements use IF NOT EXISTS.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in CREATE_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Drops every table, children first. The database file itself is kept.
pub async fn drop_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in TABLES_DROP_ORDER {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(pool)
            .await?;
    }
    Ok(())
}
