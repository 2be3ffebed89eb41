//! Domain error types for rating-control
//!
//! Provides structured error types for different domains:
//! - `DomainError` for building an ordered domain
//! - `RatingError` as the top-level error type

use thiserror::Error;

/// Top-level error type for rating-control
#[derive(Debug, Error)]
pub enum RatingError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while constructing an ordered domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Domain must contain at least one element")]
    Empty,

    #[error("Element at position {index} repeats the identity of an earlier element")]
    DuplicateId { index: usize },

    #[error("'{0}' is not a member of the domain")]
    UnknownElement(String),
}

/// Result type alias for RatingError
pub type Result<T> = std::result::Result<T, RatingError>;

/// Result type alias for DomainError
pub type DomainResult<T> = std::result::Result<T, DomainError>;
