//! Catalog error types.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Referenced entity does not exist.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Uniqueness violation or a relationship mutation that clashes with the
    /// current state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Malformed input rejected before any mutation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Well-formed request for an operation that is not permitted.
    #[error("Operation not allowed: {0}")]
    NotAllowed(String),
}

impl CatalogError {
    /// Creates a not found error.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a not allowed error.
    pub fn not_allowed(message: impl Into<String>) -> Self {
        Self::NotAllowed(message.into())
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
