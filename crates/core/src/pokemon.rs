//! Pokemon resource types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical form of a pokemon name: trimmed and lowercased.
///
/// Every name is stored and compared in this form.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A stored pokemon as returned to callers.
///
/// The store's internal revision counter is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    /// Store-assigned identifier, immutable once created.
    pub id: Uuid,
    /// Lowercase, unique name.
    pub name: String,
    /// External catalog ordinal, unique and positive.
    pub no: i32,
}

/// Input for creating a pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPokemon {
    pub name: String,
    pub no: i32,
}

impl NewPokemon {
    pub fn new(name: impl Into<String>, no: i32) -> Self {
        Self { name: name.into(), no }
    }

    /// Returns a copy with the name in canonical form.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self { name: normalize_name(&self.name), no: self.no }
    }
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PokemonPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub no: Option<i32>,
}

impl PokemonPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.no.is_none()
    }

    #[must_use]
    pub fn normalized(self) -> Self {
        Self { name: self.name.as_deref().map(normalize_name), no: self.no }
    }

    /// Applies the patch on top of `record`.
    #[must_use]
    pub fn apply_to(&self, record: &PokemonRecord) -> PokemonRecord {
        PokemonRecord {
            id: record.id,
            name: self.name.clone().unwrap_or_else(|| record.name.clone()),
            no: self.no.unwrap_or(record.no),
        }
    }
}

/// Optional paging parameters as supplied by a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Concrete offset/limit pair after defaults have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl Pagination {
    /// Fills in defaults. Negative values clamp to zero; callers validate
    /// first so this only matters for direct use.
    #[must_use]
    pub fn window(&self, default_limit: i64) -> PageWindow {
        let to_usize = |v: i64| usize::try_from(v).unwrap_or(0);
        PageWindow {
            offset: to_usize(self.offset.unwrap_or(0)),
            limit: to_usize(self.limit.unwrap_or(default_limit)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_name("  PikaChu \n"), "pikachu");
        assert_eq!(normalize_name("mr. mime"), "mr. mime");
    }

    #[test]
    fn patch_keeps_unset_fields() {
        let record = PokemonRecord { id: Uuid::new_v4(), name: "pikachu".to_owned(), no: 25 };
        let patch = PokemonPatch { name: Some("raichu".to_owned()), no: None };
        let merged = patch.apply_to(&record);
        assert_eq!(merged.id, record.id);
        assert_eq!(merged.name, "raichu");
        assert_eq!(merged.no, 25);
    }

    #[test]
    fn patch_normalizes_only_name() {
        let patch = PokemonPatch { name: Some(" Raichu ".to_owned()), no: Some(26) }.normalized();
        assert_eq!(patch.name.as_deref(), Some("raichu"));
        assert_eq!(patch.no, Some(26));
    }

    #[test]
    fn window_applies_defaults() {
        let window = Pagination::default().window(6);
        assert_eq!(window, PageWindow { offset: 0, limit: 6 });

        let window = Pagination { limit: Some(2), offset: Some(1) }.window(6);
        assert_eq!(window, PageWindow { offset: 1, limit: 2 });
    }

    #[test]
    fn new_pokemon_rejects_unknown_fields() {
        let parsed = serde_json::from_str::<NewPokemon>(r#"{"name":"a","no":1,"extra":true}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn record_serializes_public_fields_only() {
        let record = PokemonRecord { id: Uuid::nil(), name: "bulbasaur".to_owned(), no: 1 };
        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&"id") && keys.contains(&"name") && keys.contains(&"no"));
    }
}
