//! Shared constants for the pokedex service.

/// HTTP listen port when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

/// HTTP listen address when neither `--host` nor `HOST` is given.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Page size for list queries that omit `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 6;

/// Base URL of the external catalog (PokeAPI v2).
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";

/// Page size requested from the catalog during a seed.
/// Above PokeAPI's current count (1302). A listing whose `count` exceeds
/// the page is fetched again at that size.
pub const DEFAULT_SEED_LIMIT: u32 = 2000;

/// Directory served for requests that match no API route.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Catalog HTTP request timeout in seconds.
pub const CATALOG_TIMEOUT_SECS: u64 = 30;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Completion message returned by a successful seed.
pub const SEED_COMPLETE_MESSAGE: &str = "Seed executed";
