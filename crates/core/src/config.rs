//! Runtime configuration, populated once at startup.
//!
//! Recognized environment variables:
//!
//! | variable        | default                      |
//! |-----------------|------------------------------|
//! | `DATABASE_URL`  | required for PostgreSQL      |
//! | `HOST`          | `0.0.0.0`                    |
//! | `PORT`          | `3000`                       |
//! | `DEFAULT_LIMIT` | `6`                          |
//! | `CATALOG_URL`   | `https://pokeapi.co/api/v2`  |
//! | `SEED_LIMIT`    | `2000`                       |
//! | `PUBLIC_DIR`    | `public`                     |

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_CATALOG_URL, DEFAULT_HOST, DEFAULT_PAGE_LIMIT, DEFAULT_PORT, DEFAULT_PUBLIC_DIR,
    DEFAULT_SEED_LIMIT,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub default_limit: i64,
    pub catalog_url: String,
    pub seed_limit: u32,
    pub public_dir: PathBuf,
}

/// Parse a variable with a default fallback.
///
/// Unset variables return `default` silently. Set-but-unparseable values log a
/// warning and also return `default`.
pub fn parse_with_default<T, F>(lookup: &F, var: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

fn non_empty<F: Fn(&str) -> Option<String>>(lookup: &F, var: &str) -> Option<String> {
    lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_limit = parse_with_default(&lookup, "DEFAULT_LIMIT", DEFAULT_PAGE_LIMIT);
        if default_limit < 1 {
            return Err(ConfigError::Zero { var: "DEFAULT_LIMIT" });
        }
        let seed_limit = parse_with_default(&lookup, "SEED_LIMIT", DEFAULT_SEED_LIMIT);
        if seed_limit == 0 {
            return Err(ConfigError::Zero { var: "SEED_LIMIT" });
        }

        Ok(Self {
            database_url: non_empty(&lookup, "DATABASE_URL"),
            host: non_empty(&lookup, "HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: parse_with_default(&lookup, "PORT", DEFAULT_PORT),
            default_limit,
            catalog_url: non_empty(&lookup, "CATALOG_URL")
                .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_owned()),
            seed_limit,
            public_dir: non_empty(&lookup, "PUBLIC_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from),
        })
    }

    /// The connection string, which PostgreSQL-backed runs cannot do without.
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url.as_deref().ok_or(ConfigError::Missing("DATABASE_URL"))
    }
}
