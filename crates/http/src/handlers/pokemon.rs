use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use pokedex_core::{NewPokemon, PokemonPatch, PokemonRecord};

use crate::api_error::ApiError;
use crate::query_types::PaginationQuery;
use crate::response_types::DeleteResponse;
use crate::AppState;

pub async fn create_pokemon(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewPokemon>, JsonRejection>,
) -> Result<(StatusCode, Json<PokemonRecord>), ApiError> {
    let Json(input) = payload?;
    let record = state.pokemon_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_pokemon(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<Json<Vec<PokemonRecord>>, ApiError> {
    let Query(query) = query?;
    let records = state.pokemon_service.list(query.into()).await?;
    Ok(Json(records))
}

pub async fn get_pokemon(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<Json<PokemonRecord>, ApiError> {
    Ok(Json(state.pokemon_service.find_one(&term).await?))
}

pub async fn update_pokemon(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
    payload: Result<Json<PokemonPatch>, JsonRejection>,
) -> Result<Json<PokemonRecord>, ApiError> {
    let Json(patch) = payload?;
    Ok(Json(state.pokemon_service.update(&term, patch).await?))
}

pub async fn delete_pokemon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = state.pokemon_service.remove(&id).await?;
    Ok(Json(DeleteResponse { id }))
}
