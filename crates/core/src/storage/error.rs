use thiserror::Error;

use crate::product::ProductError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Expected one {entity_type} with id {id}, found {count}")]
    MultipleRows {
        entity_type: &'static str,
        id: String,
        count: usize,
    },
    /// A failure reported by the remote store. The message is forwarded as-is.
    #[error("{0}")]
    Remote(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Returns true if the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<ProductError> for RepositoryError {
    fn from(err: ProductError) -> Self {
        Self::InvalidData(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
