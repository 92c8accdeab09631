//! Service layer for the pokedex
//!
//! Business logic between the HTTP handlers and storage/catalog: flexible
//! lookup, partial updates, validation and the catalog seed.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod pokemon_service;
mod seed_service;


pub use error::ServiceError;
pub use pokemon_service::PokemonService;
pub use seed_service::{SeedReport, SeedService};
