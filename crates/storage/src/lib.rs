//! Storage layer for the pokedex service
//!
//! PostgreSQL-backed persistence via sqlx, plus an in-process backend with
//! the same constraints for tests and database-less runs.

mod backend;
pub mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_storage::PgStorage;
pub use traits::PokemonStore;
