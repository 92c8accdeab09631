//! PostgreSQL storage backend using sqlx.

mod pokemon;

use std::time::Duration;

use crate::error::StorageError;
use pokedex_core::{
    PokemonRecord, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use super::pg_migrations::run_pg_migrations;

/// Columns exposed to callers. `revision` is internal and never selected.
pub(crate) const POKEMON_COLUMNS: &str = "id, name, no";

/// Rows per bulk INSERT statement, keeping bind parameters well under
/// PostgreSQL's 65535 limit.
pub(crate) const BULK_INSERT_CHUNK: usize = 1000;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

/// Convert `usize` to `i64` for SQL LIMIT/OFFSET binds.
/// Saturates to `i64::MAX` on overflow.
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

pub(crate) fn row_to_pokemon(row: &sqlx::postgres::PgRow) -> Result<PokemonRecord, StorageError> {
    Ok(PokemonRecord { id: row.try_get("id")?, name: row.try_get("name")?, no: row.try_get("no")? })
}
