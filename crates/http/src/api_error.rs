//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and the
//! matching status code. Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pokedex_service::ServiceError;

/// Message shown to callers for any internal failure.
const INTERNAL_MESSAGE: &str = "internal server error - check server logs";

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input, duplicate key, or no-op delete.
    BadRequest(String),
    /// 404 Not Found: lookup target doesn't exist.
    NotFound(String),
    /// 502 Bad Gateway: the external catalog failed.
    BadGateway(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl ApiError {
    /// Seed failures are always the server's problem: catalog faults become
    /// 502 and everything else 500, including conflicts inside the batch.
    pub fn from_seed_failure(err: ServiceError) -> Self {
        match err {
            ServiceError::Fetch(ref e) if e.is_upstream() => Self::BadGateway(err.to_string()),
            other => Self::Internal(other.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadGateway(msg) => {
                tracing::warn!(error = %msg, "catalog fetch failed");
                (StatusCode::BAD_GATEWAY, msg)
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::DuplicateResource { .. } => Self::BadRequest(err.to_string()),
            ServiceError::InvalidArgument(msg) => Self::BadRequest(msg),
            ServiceError::Persistence(_) | ServiceError::Fetch(_) => Self::Internal(err.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
