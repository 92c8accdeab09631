use std::sync::Arc;

use pokedex_core::{
    parse_record_id, validate_new_pokemon, validate_pagination, validate_patch, LookupTerm,
    NewPokemon, Pagination, PokemonPatch, PokemonRecord,
};
use pokedex_storage::{PokemonStore, StorageBackend};
use uuid::Uuid;

use crate::ServiceError;

fn not_found(term: &str) -> ServiceError {
    ServiceError::NotFound(format!("Pokemon with id, name or no \"{term}\" not found"))
}

pub struct PokemonService {
    storage: Arc<StorageBackend>,
    default_limit: i64,
}

impl PokemonService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>, default_limit: i64) -> Self {
        Self { storage, default_limit }
    }

    pub async fn create(&self, input: NewPokemon) -> Result<PokemonRecord, ServiceError> {
        validate_new_pokemon(&input)?;
        let input = input.normalized();
        let record = self.storage.insert_pokemon(&input).await?;
        tracing::debug!(id = %record.id, name = %record.name, no = record.no, "pokemon created");
        Ok(record)
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<PokemonRecord>, ServiceError> {
        validate_pagination(&page)?;
        let window = page.window(self.default_limit);
        Ok(self.storage.list_pokemon(window.offset, window.limit).await?)
    }

    /// Resolve `term` as catalog number, then store id, then name.
    pub async fn find_one(&self, term: &str) -> Result<PokemonRecord, ServiceError> {
        let lookup = LookupTerm::new(term);

        if let Some(no) = lookup.ordinal() {
            if let Some(record) = self.storage.find_by_no(no).await? {
                return Ok(record);
            }
        }

        if let Some(id) = lookup.record_id() {
            if let Some(record) = self.storage.find_by_id(id).await? {
                return Ok(record);
            }
        }

        self.storage.find_by_name(&lookup.name()).await?.ok_or_else(|| not_found(term))
    }

    pub async fn update(
        &self,
        term: &str,
        patch: PokemonPatch,
    ) -> Result<PokemonRecord, ServiceError> {
        validate_patch(&patch)?;
        let current = self.find_one(term).await?;
        if patch.is_empty() {
            return Ok(current);
        }

        let patch = patch.normalized();
        // The row can disappear between lookup and write
        self.storage.update_pokemon(current.id, &patch).await?.ok_or_else(|| not_found(term))
    }

    pub async fn remove(&self, id: &str) -> Result<Uuid, ServiceError> {
        let parsed = parse_record_id(id)
            .ok_or_else(|| ServiceError::InvalidArgument(format!("{id} is not a valid id")))?;

        let removed = self.storage.delete_pokemon(parsed).await?;
        if removed == 0 {
            return Err(ServiceError::InvalidArgument(format!("Pokemon with id \"{id}\" not found")));
        }
        tracing::debug!(id = %parsed, "pokemon removed");
        Ok(parsed)
    }

    pub async fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.storage.count_pokemon().await?)
    }
}
