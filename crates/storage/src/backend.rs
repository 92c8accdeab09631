//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use pokedex_core::{NewPokemon, PokemonPatch, PokemonRecord};
use uuid::Uuid;

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::pg_storage::PgStorage;
use crate::traits::PokemonStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <PgStorage as PokemonStore>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as PokemonStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl PokemonStore for StorageBackend {
    async fn insert_pokemon(&self, input: &NewPokemon) -> Result<PokemonRecord, StorageError> {
        dispatch!(self, insert_pokemon(input))
    }

    async fn list_pokemon(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<PokemonRecord>, StorageError> {
        dispatch!(self, list_pokemon(offset, limit))
    }

    async fn find_by_no(&self, no: i32) -> Result<Option<PokemonRecord>, StorageError> {
        dispatch!(self, find_by_no(no))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PokemonRecord>, StorageError> {
        dispatch!(self, find_by_id(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<PokemonRecord>, StorageError> {
        dispatch!(self, find_by_name(name))
    }

    async fn update_pokemon(
        &self,
        id: Uuid,
        patch: &PokemonPatch,
    ) -> Result<Option<PokemonRecord>, StorageError> {
        dispatch!(self, update_pokemon(id, patch))
    }

    async fn delete_pokemon(&self, id: Uuid) -> Result<u64, StorageError> {
        dispatch!(self, delete_pokemon(id))
    }

    async fn replace_all(&self, records: &[NewPokemon]) -> Result<usize, StorageError> {
        dispatch!(self, replace_all(records))
    }

    async fn count_pokemon(&self) -> Result<usize, StorageError> {
        dispatch!(self, count_pokemon())
    }
}
