use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pokedex_catalog::CatalogClient;
use pokedex_core::{AppConfig, CATALOG_TIMEOUT_SECS};
use pokedex_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "REST backend for a Pokemon catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Listen port (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
        /// Listen address (overrides HOST)
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Keep records in process memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },
    /// Replace the collection with the external catalog's listing
    Seed,
    /// Look up one pokemon by number, id or name
    Get { term: String },
    /// List pokemon ordered by number
    List {
        #[arg(short, long)]
        limit: Option<i64>,
        #[arg(short, long)]
        offset: Option<i64>,
    },
}

pub(crate) async fn open_storage(
    config: &AppConfig,
    in_memory: bool,
) -> Result<Arc<StorageBackend>> {
    if in_memory {
        tracing::info!("Using in-memory storage; data is lost on exit");
        return Ok(Arc::new(StorageBackend::new_memory()));
    }
    let url = config.require_database_url()?;
    Ok(Arc::new(StorageBackend::new_postgres(url).await?))
}

pub(crate) fn catalog_client(config: &AppConfig) -> Result<Arc<CatalogClient>> {
    let client =
        CatalogClient::new(&config.catalog_url, Duration::from_secs(CATALOG_TIMEOUT_SECS))?;
    Ok(Arc::new(client))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    match cli.command {
        Commands::Serve { port, host, in_memory } => {
            commands::serve::run(config, port, host, in_memory).await?;
        },
        Commands::Seed => {
            commands::seed::run(&config).await?;
        },
        Commands::Get { term } => {
            commands::query::run_get(&config, &term).await?;
        },
        Commands::List { limit, offset } => {
            commands::query::run_list(&config, limit, offset).await?;
        },
    }

    Ok(())
}
