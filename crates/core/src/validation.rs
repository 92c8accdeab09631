//! Explicit input validation.
//!
//! Each check reports the first violated constraint only.

use crate::error::ValidationError;
use crate::pokemon::{NewPokemon, Pagination, PokemonPatch};

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

fn check_no(no: i32) -> Result<(), ValidationError> {
    if no < 1 {
        return Err(ValidationError::NonPositiveNo(i64::from(no)));
    }
    Ok(())
}

pub fn validate_new_pokemon(input: &NewPokemon) -> Result<(), ValidationError> {
    check_name(&input.name)?;
    check_no(input.no)
}

pub fn validate_patch(patch: &PokemonPatch) -> Result<(), ValidationError> {
    if let Some(name) = patch.name.as_deref() {
        check_name(name)?;
    }
    if let Some(no) = patch.no {
        check_no(no)?;
    }
    Ok(())
}

pub fn validate_pagination(page: &Pagination) -> Result<(), ValidationError> {
    if let Some(limit) = page.limit {
        if limit < 1 {
            return Err(ValidationError::InvalidLimit(limit));
        }
    }
    if let Some(offset) = page.offset {
        if offset < 0 {
            return Err(ValidationError::NegativeOffset(offset));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input() {
        assert!(validate_new_pokemon(&NewPokemon::new("pikachu", 25)).is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            validate_new_pokemon(&NewPokemon::new("   ", 25)),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn first_violation_wins() {
        assert_eq!(validate_new_pokemon(&NewPokemon::new("", 0)), Err(ValidationError::EmptyName));
    }

    #[test]
    fn non_positive_no_is_rejected() {
        assert_eq!(
            validate_new_pokemon(&NewPokemon::new("pikachu", -3)),
            Err(ValidationError::NonPositiveNo(-3))
        );
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(validate_patch(&PokemonPatch::default()).is_ok());
    }

    #[test]
    fn patch_fields_are_checked_when_present() {
        let patch = PokemonPatch { name: Some(String::new()), no: None };
        assert_eq!(validate_patch(&patch), Err(ValidationError::EmptyName));

        let patch = PokemonPatch { name: None, no: Some(0) };
        assert_eq!(validate_patch(&patch), Err(ValidationError::NonPositiveNo(0)));
    }

    #[test]
    fn pagination_bounds() {
        assert!(validate_pagination(&Pagination { limit: Some(1), offset: Some(0) }).is_ok());
        assert_eq!(
            validate_pagination(&Pagination { limit: Some(0), offset: None }),
            Err(ValidationError::InvalidLimit(0))
        );
        assert_eq!(
            validate_pagination(&Pagination { limit: None, offset: Some(-1) }),
            Err(ValidationError::NegativeOffset(-1))
        );
    }
}
