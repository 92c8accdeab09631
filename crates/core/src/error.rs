use thiserror::Error;

/// A rejected input, reported for the first constraint it violates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be a non-empty string")]
    EmptyName,

    #[error("no must be a positive integer, got {0}")]
    NonPositiveNo(i64),

    #[error("limit must be a positive integer, got {0}")]
    InvalidLimit(i64),

    #[error("offset must not be negative, got {0}")]
    NegativeOffset(i64),
}

/// Startup configuration could not be assembled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}
