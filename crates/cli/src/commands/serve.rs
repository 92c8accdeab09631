use anyhow::Result;
use pokedex_core::AppConfig;
use pokedex_http::{create_router, AppState};
use pokedex_service::{PokemonService, SeedService};
use std::sync::Arc;

use crate::{catalog_client, open_storage};

pub(crate) async fn run(
    config: AppConfig,
    port: Option<u16>,
    host: Option<String>,
    in_memory: bool,
) -> Result<()> {
    let storage = open_storage(&config, in_memory).await?;
    tracing::info!("Storage backend: {}", storage.kind());
    let catalog = catalog_client(&config)?;

    let pokemon_service = Arc::new(PokemonService::new(storage.clone(), config.default_limit));
    let seed_service = Arc::new(SeedService::new(storage, catalog, config.seed_limit));

    let stored = pokemon_service.count().await?;
    tracing::info!(stored, "Pokemon collection ready");

    let state = Arc::new(AppState {
        pokemon_service,
        seed_service,
        public_dir: Some(config.public_dir.clone()),
    });

    let router = create_router(state);
    let addr = format!("{}:{}", host.unwrap_or(config.host), port.unwrap_or(config.port));
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
