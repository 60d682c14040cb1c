//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod catalog_queries;
mod row_mappers;
mod sqlite_pokemon_repository;
mod upserts;

pub use sqlite_pokemon_repository::SqlitePokemonRepository;

use pokepipe_core::RepositoryError;

/// Map a sqlx error to the port's error type.
///
/// SQLite reports every constraint failure (UNIQUE, FOREIGN KEY, NOT NULL)
/// as "... constraint failed".
pub(crate) fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    let msg = e.to_string();
    match e {
        sqlx::Error::RowNotFound => RepositoryError::NotFound(msg),
        _ if msg.contains("constraint failed") => RepositoryError::Constraint(msg),
        _ => RepositoryError::Storage(msg),
    }
}
