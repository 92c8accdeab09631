use anyhow::Result;
use pokedex_core::{AppConfig, Pagination};
use pokedex_service::PokemonService;

use crate::open_storage;

async fn service(config: &AppConfig) -> Result<PokemonService> {
    let storage = open_storage(config, false).await?;
    Ok(PokemonService::new(storage, config.default_limit))
}

pub(crate) async fn run_get(config: &AppConfig, term: &str) -> Result<()> {
    let service = service(config).await?;
    match service.find_one(term).await {
        Ok(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        Err(e) if e.is_not_found() => println!("Pokemon not found: {term}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub(crate) async fn run_list(
    config: &AppConfig,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<()> {
    let service = service(config).await?;
    let records = service.list(Pagination { limit, offset }).await?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
