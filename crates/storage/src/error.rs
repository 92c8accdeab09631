//! Typed error enum for the storage layer.
//!
//! Lets callers match on a duplicate key or a database fault instead of
//! downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique constraint violation on `key` with the offending `value`.
    #[error("duplicate {key}: {value}")]
    Duplicate { key: String, value: String },

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Schema bootstrap failure.
    #[error("migration error: {0}")]
    Migration(String),
}

/// Splits PostgreSQL's unique-violation detail into key and value.
///
/// The detail has the form `Key (name)=(pikachu) already exists.`
pub(crate) fn parse_unique_violation_detail(detail: &str) -> Option<(String, String)> {
    let rest = detail.strip_prefix("Key (")?;
    let (key, rest) = rest.split_once(")=(")?;
    let value = rest.strip_suffix(") already exists.")?;
    Some((key.to_owned(), value.to_owned()))
}

/// Best-effort column name for a constraint such as `pokemon_name_key`.
fn key_from_constraint(constraint: &str) -> String {
    constraint
        .strip_prefix("pokemon_")
        .and_then(|c| c.strip_suffix("_key"))
        .unwrap_or(constraint)
        .to_owned()
}

/// Custom `From<sqlx::Error>`, not a blanket `#[from]`.
///
/// - SQLSTATE 23505 → `Duplicate`
/// - everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                let detail = db_err
                    .try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
                    .and_then(|pg| pg.detail())
                    .and_then(parse_unique_violation_detail);
                match detail {
                    Some((key, value)) => Self::Duplicate { key, value },
                    None => Self::Duplicate {
                        key: db_err
                            .constraint()
                            .map_or_else(|| "unknown".to_owned(), key_from_constraint),
                        value: db_err.message().to_owned(),
                    },
                }
            },
            _ => Self::Database(err),
        }
    }
}
