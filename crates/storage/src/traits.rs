//! Storage backend trait abstraction.

use async_trait::async_trait;
use pokedex_core::{NewPokemon, PokemonPatch, PokemonRecord};
use uuid::Uuid;

use crate::error::StorageError;

/// Persistence operations over the pokemon collection.
///
/// Names passed in are expected to be normalized already; the store compares
/// them byte for byte.
#[async_trait]
pub trait PokemonStore: Send + Sync {
    /// Insert one record, assigning a fresh id.
    /// Fails with `Duplicate` when `name` or `no` is taken.
    async fn insert_pokemon(&self, input: &NewPokemon) -> Result<PokemonRecord, StorageError>;

    /// Records ordered by `no` ascending, skipping `offset` then taking `limit`.
    async fn list_pokemon(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<PokemonRecord>, StorageError>;

    async fn find_by_no(&self, no: i32) -> Result<Option<PokemonRecord>, StorageError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PokemonRecord>, StorageError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<PokemonRecord>, StorageError>;

    /// Merge `patch` into the record with `id`. Returns `None` if no such record.
    async fn update_pokemon(
        &self,
        id: Uuid,
        patch: &PokemonPatch,
    ) -> Result<Option<PokemonRecord>, StorageError>;

    /// Delete by exact id. Returns the number of removed records.
    async fn delete_pokemon(&self, id: Uuid) -> Result<u64, StorageError>;

    /// Replace the whole collection with `records` as one atomic step.
    /// On failure the previous contents stay in place.
    async fn replace_all(&self, records: &[NewPokemon]) -> Result<usize, StorageError>;

    async fn count_pokemon(&self) -> Result<usize, StorageError>;
}
