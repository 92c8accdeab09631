//! Typed error enum for the service layer.
//!
//! The taxonomy the HTTP layer renders into status codes: lookups that miss,
//! uniqueness violations, rejected arguments, storage faults and catalog
//! fetch failures.

use pokedex_catalog::CatalogError;
use pokedex_core::ValidationError;
use pokedex_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Lookup or update target is absent.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation on `key`.
    #[error("pokemon already exists with {key} {value:?}")]
    DuplicateResource { key: String, value: String },

    /// Malformed identifier, failed validation, or a delete that matched nothing.
    #[error("{0}")]
    InvalidArgument(String),

    /// Unexpected storage fault. Detail stays server-side.
    #[error("persistence: {0}")]
    Persistence(#[source] StorageError),

    /// External catalog could not be fetched or understood.
    #[error("catalog fetch: {0}")]
    Fetch(#[from] CatalogError),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate { key, value } => Self::DuplicateResource { key, value },
            other => Self::Persistence(other),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
