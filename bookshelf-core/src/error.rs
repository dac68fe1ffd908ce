//! Error types for Bookshelf Core
//!
//! Catalog operations never return these. Invalid catalog input is ignored
//! and leaves state unchanged. The errors below only cover building a
//! catalog from configuration.

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all Bookshelf configuration
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Genre policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("Invalid genre config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Errors that occur while building a genre policy
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Genre names must not be blank")]
    BlankGenre,

    #[error("Genre listed twice: {0}")]
    DuplicateGenre(String),

    #[error("Age-restricted genre is not in the allowed set: {0}")]
    UnknownRestricted(String),

    #[error("At least one genre must be allowed")]
    NoGenres,
}
