//! PokemonStore implementation for PgStorage.

use super::*;

use crate::traits::PokemonStore;
use async_trait::async_trait;
use pokedex_core::{NewPokemon, PokemonPatch};
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

#[async_trait]
impl PokemonStore for PgStorage {
    async fn insert_pokemon(&self, input: &NewPokemon) -> Result<PokemonRecord, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO pokemon (id, name, no) VALUES ($1, $2, $3) RETURNING {POKEMON_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(input.no)
        .fetch_one(&self.pool)
        .await?;
        row_to_pokemon(&row)
    }

    async fn list_pokemon(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<PokemonRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {POKEMON_COLUMNS} FROM pokemon ORDER BY no ASC OFFSET $1 LIMIT $2"
        ))
        .bind(usize_to_i64(offset))
        .bind(usize_to_i64(limit))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_pokemon).collect()
    }

    async fn find_by_no(&self, no: i32) -> Result<Option<PokemonRecord>, StorageError> {
        let row = sqlx::query(&format!("SELECT {POKEMON_COLUMNS} FROM pokemon WHERE no = $1"))
            .bind(no)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_pokemon(&r)).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PokemonRecord>, StorageError> {
        let row = sqlx::query(&format!("SELECT {POKEMON_COLUMNS} FROM pokemon WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_pokemon(&r)).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<PokemonRecord>, StorageError> {
        let row = sqlx::query(&format!("SELECT {POKEMON_COLUMNS} FROM pokemon WHERE name = $1"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_pokemon(&r)).transpose()
    }

    async fn update_pokemon(
        &self,
        id: Uuid,
        patch: &PokemonPatch,
    ) -> Result<Option<PokemonRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE pokemon
             SET name = COALESCE($2, name), no = COALESCE($3, no), revision = revision + 1
             WHERE id = $1
             RETURNING {POKEMON_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.no)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_pokemon(&r)).transpose()
    }

    async fn delete_pokemon(&self, id: Uuid) -> Result<u64, StorageError> {
        let result =
            sqlx::query("DELETE FROM pokemon WHERE id = $1").bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn replace_all(&self, records: &[NewPokemon]) -> Result<usize, StorageError> {
        let mut tx = self.pool.begin().await?;

        let purged = sqlx::query("DELETE FROM pokemon").execute(&mut *tx).await?;
        tracing::debug!(purged = purged.rows_affected(), "cleared pokemon collection");

        for chunk in records.chunks(BULK_INSERT_CHUNK) {
            let mut builder: QueryBuilder<'_, Postgres> =
                QueryBuilder::new("INSERT INTO pokemon (id, name, no) ");
            builder.push_values(chunk, |mut row, record| {
                row.push_bind(Uuid::new_v4()).push_bind(record.name.clone()).push_bind(record.no);
            });
            builder.build().execute(&mut *tx).await?;
        }

        // Dropping `tx` on an early return above rolls the purge back
        tx.commit().await?;
        Ok(records.len())
    }

    async fn count_pokemon(&self) -> Result<usize, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pokemon")
            .fetch_one(&self.pool)
            .await?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
