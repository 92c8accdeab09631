//! In-process storage backend.
//!
//! Mirrors the PostgreSQL schema's constraints (unique `name`, unique `no`,
//! internal revision counter) so service behaviour is the same on either
//! backend. Each operation holds the lock for its whole check-then-write.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use pokedex_core::{NewPokemon, PokemonPatch, PokemonRecord};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::traits::PokemonStore;

#[derive(Debug, Clone)]
struct StoredPokemon {
    name: String,
    no: i32,
    revision: u32,
}

impl StoredPokemon {
    fn to_record(&self, id: Uuid) -> PokemonRecord {
        PokemonRecord { id, name: self.name.clone(), no: self.no }
    }
}

type Rows = BTreeMap<Uuid, StoredPokemon>;

/// Returns the first uniqueness conflict `name`/`no` would cause, ignoring
/// the row with id `skip`.
fn find_conflict(rows: &Rows, name: &str, no: i32, skip: Option<Uuid>) -> Option<StorageError> {
    let others = rows.iter().filter(|(id, _)| Some(**id) != skip).map(|(_, row)| row);
    for row in others {
        if row.name == name {
            return Some(StorageError::Duplicate { key: "name".to_owned(), value: name.to_owned() });
        }
        if row.no == no {
            return Some(StorageError::Duplicate { key: "no".to_owned(), value: no.to_string() });
        }
    }
    None
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    rows: Arc<RwLock<Rows>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn revision_of(&self, id: Uuid) -> Option<u32> {
        self.rows.read().await.get(&id).map(|row| row.revision)
    }
}

#[async_trait]
impl PokemonStore for MemoryStorage {
    async fn insert_pokemon(&self, input: &NewPokemon) -> Result<PokemonRecord, StorageError> {
        let mut rows = self.rows.write().await;
        if let Some(conflict) = find_conflict(&rows, &input.name, input.no, None) {
            return Err(conflict);
        }
        let id = Uuid::new_v4();
        let stored = StoredPokemon { name: input.name.clone(), no: input.no, revision: 0 };
        let record = stored.to_record(id);
        rows.insert(id, stored);
        Ok(record)
    }

    async fn list_pokemon(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<PokemonRecord>, StorageError> {
        let rows = self.rows.read().await;
        let mut records: Vec<PokemonRecord> =
            rows.iter().map(|(id, row)| row.to_record(*id)).collect();
        records.sort_by_key(|record| record.no);
        Ok(records.into_iter().skip(offset).take(limit).collect())
    }

    async fn find_by_no(&self, no: i32) -> Result<Option<PokemonRecord>, StorageError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|(_, row)| row.no == no).map(|(id, row)| row.to_record(*id)))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PokemonRecord>, StorageError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).map(|row| row.to_record(id)))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<PokemonRecord>, StorageError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|(_, row)| row.name == name).map(|(id, row)| row.to_record(*id)))
    }

    async fn update_pokemon(
        &self,
        id: Uuid,
        patch: &PokemonPatch,
    ) -> Result<Option<PokemonRecord>, StorageError> {
        let mut rows = self.rows.write().await;
        let Some(current) = rows.get(&id).cloned() else {
            return Ok(None);
        };
        let name = patch.name.clone().unwrap_or(current.name);
        let no = patch.no.unwrap_or(current.no);
        if let Some(conflict) = find_conflict(&rows, &name, no, Some(id)) {
            return Err(conflict);
        }
        let updated = StoredPokemon { name, no, revision: current.revision.saturating_add(1) };
        let record = updated.to_record(id);
        rows.insert(id, updated);
        Ok(Some(record))
    }

    async fn delete_pokemon(&self, id: Uuid) -> Result<u64, StorageError> {
        let mut rows = self.rows.write().await;
        Ok(u64::from(rows.remove(&id).is_some()))
    }

    async fn replace_all(&self, records: &[NewPokemon]) -> Result<usize, StorageError> {
        // Build the replacement off to the side so a conflict leaves the
        // current contents untouched.
        let mut replacement = Rows::new();
        for input in records {
            if let Some(conflict) = find_conflict(&replacement, &input.name, input.no, None) {
                return Err(conflict);
            }
            replacement.insert(
                Uuid::new_v4(),
                StoredPokemon { name: input.name.clone(), no: input.no, revision: 0 },
            );
        }
        let mut rows = self.rows.write().await;
        *rows = replacement;
        Ok(records.len())
    }

    async fn count_pokemon(&self) -> Result<usize, StorageError> {
        Ok(self.rows.read().await.len())
    }
}
