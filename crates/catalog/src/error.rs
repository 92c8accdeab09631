//! Typed error enum for the catalog crate.

use thiserror::Error;

/// Errors from fetching or interpreting the external catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog entry {name:?} has no ordinal in url {url:?}")]
    MalformedEntry { name: String, url: String },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl CatalogError {
    /// Whether the remote side, rather than this process, is at fault.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        !matches!(self, Self::ClientInit(_))
    }
}
