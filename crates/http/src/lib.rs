//! HTTP API server for the pokedex.
//!
//! All resource routes live under `/api/v2`. Requests that match no route
//! fall through to static files from the configured public directory.

#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
mod static_files;

use axum::{routing::get, Json, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use pokedex_service::{PokemonService, SeedService};

pub use query_types::PaginationQuery;
pub use response_types::{DeleteResponse, SeedResponse, VersionResponse};

/// Global prefix for every API route.
pub const API_PREFIX: &str = "/api/v2";

/// Shared application state for all HTTP handlers.
///
/// Built explicitly at startup and wrapped in `Arc` for sharing across
/// handlers.
pub struct AppState {
    /// CRUD and lookup over the pokemon collection
    pub pokemon_service: Arc<PokemonService>,
    /// Bulk refresh from the external catalog
    pub seed_service: Arc<SeedService>,
    /// Directory served for non-API paths; `None` disables static serving
    pub public_dir: Option<PathBuf>,
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/version", get(version))
        .route(
            "/pokemon",
            get(handlers::pokemon::list_pokemon).post(handlers::pokemon::create_pokemon),
        )
        .route(
            "/pokemon/{term}",
            get(handlers::pokemon::get_pokemon)
                .patch(handlers::pokemon::update_pokemon)
                .delete(handlers::pokemon::delete_pokemon),
        )
        .route("/seed", get(handlers::seed::execute_seed))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let router = Router::new().route("/health", get(health)).nest(API_PREFIX, api_routes());

    let router = match state.public_dir.as_deref() {
        Some(dir) => router.fallback_service(static_files::serve_dir(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
