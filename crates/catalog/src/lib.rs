//! Client for the external pokemon catalog.
//!
//! Wraps a single GET against the catalog's list endpoint and returns the
//! decoded page, or a `CatalogError` describing the transport, status or
//! decoding failure.

mod client;
pub mod error;
mod types;


pub use client::{truncate, CatalogClient, MAX_ERROR_BODY_LEN};
pub use error::CatalogError;
pub use types::{CatalogEntry, CatalogPage};
