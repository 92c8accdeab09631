use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api_error::ApiError;
use crate::response_types::SeedResponse;
use crate::AppState;

pub async fn execute_seed(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SeedResponse>, ApiError> {
    let report = state.seed_service.execute_seed().await.map_err(ApiError::from_seed_failure)?;
    Ok(Json(report.into()))
}
