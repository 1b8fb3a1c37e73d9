//! Core error types for seqdyn

use thiserror::Error;

/// Main error type for sequence-distance operations
#[derive(Error, Debug)]
pub enum SeqdynError {
    #[error("Missing distance model: supply a distance type or both a substitution matrix and an indel cost")]
    MissingModel,

    #[error("Unequal sequence length: sequence {index} has length {found}, expected {expected}")]
    UnequalLength {
        expected: usize,
        found: usize,
        index: usize,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Encoding collision: sequences {first} and {second} share a canonical key but differ")]
    EncodingCollision { first: usize, second: usize },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for seqdyn operations
pub type SeqdynResult<T> = Result<T, SeqdynError>;

impl SeqdynError {
    /// Shorthand for building an `InvalidInput` error
    pub fn invalid(msg: impl Into<String>) -> Self {
        SeqdynError::InvalidInput(msg.into())
    }
}
