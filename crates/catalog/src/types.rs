use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One page of the catalog's named-resource listing.
///
/// Only `results` is required; the paging links are informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

impl CatalogEntry {
    /// The catalog ordinal, taken from the second-to-last path segment of
    /// `url` (`https://pokeapi.co/api/v2/pokemon/25/` → 25).
    pub fn ordinal(&self) -> Result<i32, CatalogError> {
        let segments: Vec<&str> = self.url.split('/').collect();
        segments
            .len()
            .checked_sub(2)
            .and_then(|idx| segments.get(idx))
            .and_then(|segment| segment.parse::<i32>().ok())
            .ok_or_else(|| CatalogError::MalformedEntry {
                name: self.name.clone(),
                url: self.url.clone(),
            })
    }
}
