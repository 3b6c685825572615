//! Client error types.

use pizzeria_core::product::ProductError;
use pizzeria_core::storage::RepositoryError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid store URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ProductError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for RepositoryError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) if e.is_decode() => Self::Serialization(e.to_string()),
            ClientError::Request(e) => Self::ConnectionFailed(e.to_string()),
            ClientError::InvalidUrl(e) => Self::InvalidData(e.to_string()),
            ClientError::InvalidResponse(message) => Self::Serialization(message),
            ClientError::InvalidInput(e) => e.into(),
            ClientError::Repository(e) => e,
            ClientError::Json(e) => Self::Serialization(e.to_string()),
        }
    }
}
