//! Interpretation of a free-form lookup term.
//!
//! A single term may identify a pokemon by catalog ordinal, by store id, or
//! by name. Callers try the candidates in that order and stop at the first
//! hit.

use uuid::Uuid;
use uuid::fmt::Hyphenated;

use crate::pokemon::normalize_name;

/// Parses a store id in its canonical hyphenated form only.
///
/// Simple, braced and URN spellings of the same UUID are rejected.
#[must_use]
pub fn parse_record_id(raw: &str) -> Option<Uuid> {
    let raw = raw.trim();
    if raw.len() != Hyphenated::LENGTH {
        return None;
    }
    Uuid::try_parse(raw).ok()
}

#[derive(Debug, Clone, Copy)]
pub struct LookupTerm<'a> {
    raw: &'a str,
}

impl<'a> LookupTerm<'a> {
    #[must_use]
    pub const fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The term as a catalog ordinal, if it is an integer that fits the column.
    #[must_use]
    pub fn ordinal(&self) -> Option<i32> {
        self.raw.trim().parse::<i32>().ok()
    }

    /// The term as a store id, if it is a hyphenated UUID.
    #[must_use]
    pub fn record_id(&self) -> Option<Uuid> {
        parse_record_id(self.raw)
    }

    /// The term in canonical name form.
    #[must_use]
    pub fn name(&self) -> String {
        normalize_name(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_term() {
        let term = LookupTerm::new(" 25 ");
        assert_eq!(term.ordinal(), Some(25));
        assert_eq!(term.record_id(), None);
    }

    #[test]
    fn uuid_term() {
        let id = Uuid::new_v4();
        let raw = id.to_string();
        let term = LookupTerm::new(&raw);
        assert_eq!(term.ordinal(), None);
        assert_eq!(term.record_id(), Some(id));
    }

    #[test]
    fn only_hyphenated_ids_are_accepted() {
        let id = Uuid::new_v4();
        assert_eq!(parse_record_id(&id.hyphenated().to_string()), Some(id));
        assert_eq!(parse_record_id(&id.simple().to_string()), None);
        assert_eq!(parse_record_id(&id.braced().to_string()), None);
        assert_eq!(parse_record_id(&id.urn().to_string()), None);
        assert_eq!(parse_record_id("not-a-uuid-but-thirty-six-chars-long"), None);
    }

    #[test]
    fn name_term() {
        let term = LookupTerm::new("  Pikachu ");
        assert_eq!(term.ordinal(), None);
        assert_eq!(term.record_id(), None);
        assert_eq!(term.name(), "pikachu");
    }

    #[test]
    fn out_of_range_number_is_not_an_ordinal() {
        assert_eq!(LookupTerm::new("99999999999").ordinal(), None);
    }
}
