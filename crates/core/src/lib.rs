//! Core types for the pokedex service
//!
//! Domain records, input validation and runtime configuration shared by
//! every other crate in the workspace.

pub mod config;
pub mod constants;
mod error;
mod lookup;
mod pokemon;
mod validation;

pub use config::AppConfig;
pub use constants::*;
pub use error::*;
pub use lookup::{parse_record_id, LookupTerm};
pub use pokemon::*;
pub use validation::{validate_new_pokemon, validate_pagination, validate_patch};
