//! One-shot catalog seed against the configured database.

use anyhow::Result;
use pokedex_core::AppConfig;
use pokedex_http::SeedResponse;
use pokedex_service::SeedService;

use crate::{catalog_client, open_storage};

pub(crate) async fn run(config: &AppConfig) -> Result<()> {
    let storage = open_storage(config, false).await?;
    let seed = SeedService::new(storage, catalog_client(config)?, config.seed_limit);

    let report = seed.execute_seed().await?;
    println!("{}", serde_json::to_string_pretty(&SeedResponse::from(report))?);
    Ok(())
}
