use std::time::Duration;

use crate::error::CatalogError;
use crate::types::CatalogPage;

/// Longest error body kept in `CatalogError::HttpStatus`.
pub const MAX_ERROR_BODY_LEN: usize = 500;

/// Client for the external catalog's list endpoint.
///
/// One GET per call: no retries, no caching.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl CatalogClient {
    /// Creates a client rooted at `base_url` (e.g. `https://pokeapi.co/api/v2`).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one listing page of up to `limit` pokemon.
    ///
    /// # Errors
    /// Returns an error if the request fails, the catalog answers with a
    /// non-success status, or the body is not a listing.
    pub async fn fetch_listing(&self, limit: u32) -> Result<CatalogPage, CatalogError> {
        let url = format!("{}/pokemon", self.base_url);
        tracing::debug!(%url, limit, "fetching catalog listing");

        let response = self.client.get(&url).query(&[("limit", limit)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(CatalogError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_LEN).to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::JsonParse {
            context: format!("catalog listing (body: {})", truncate(&body, 200)),
            source: e,
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
