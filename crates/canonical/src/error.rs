use thiserror::Error;

/// Errors that can occur while canonicalizing a query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("query empty after normalization")]
    EmptyInput,
    #[error("query has {len} chars, limit is {max}")]
    TooLong { len: usize, max: usize },
}
