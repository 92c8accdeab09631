use std::sync::Arc;

use pokedex_catalog::{CatalogClient, CatalogEntry};
use pokedex_core::{validate_new_pokemon, NewPokemon, SEED_COMPLETE_MESSAGE};
use pokedex_storage::{PokemonStore, StorageBackend};

use crate::ServiceError;

/// Outcome of a completed seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub message: &'static str,
    pub inserted: usize,
}

fn entry_to_pokemon(entry: &CatalogEntry) -> Result<NewPokemon, ServiceError> {
    let input = NewPokemon::new(entry.name.as_str(), entry.ordinal()?).normalized();
    validate_new_pokemon(&input)?;
    Ok(input)
}

/// Refreshes the whole collection from the external catalog.
///
/// The catalog is fetched and mapped before anything is written, and the
/// purge plus bulk insert run as one swap. A failed fetch leaves the existing
/// collection as it was. When the listing reports a `count` above the
/// configured page size it is fetched once more at that size.
pub struct SeedService {
    storage: Arc<StorageBackend>,
    catalog: Arc<CatalogClient>,
    seed_limit: u32,
}

impl SeedService {
    #[must_use]
    pub const fn new(
        storage: Arc<StorageBackend>,
        catalog: Arc<CatalogClient>,
        seed_limit: u32,
    ) -> Self {
        Self { storage, catalog, seed_limit }
    }

    pub async fn execute_seed(&self) -> Result<SeedReport, ServiceError> {
        let mut page = self.catalog.fetch_listing(self.seed_limit).await?;
        if let Some(total) = page.count.filter(|&total| total > self.seed_limit) {
            tracing::info!(
                total,
                seed_limit = self.seed_limit,
                "catalog exceeds seed page, refetching"
            );
            page = self.catalog.fetch_listing(total).await?;
        }
        let records = page.results.iter().map(entry_to_pokemon).collect::<Result<Vec<_>, _>>()?;

        let inserted = self.storage.replace_all(&records).await?;
        tracing::info!(
            inserted,
            catalog = %self.catalog.base_url(),
            "seed executed"
        );
        Ok(SeedReport { message: SEED_COMPLETE_MESSAGE, inserted })
    }
}
