use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache capacity must be greater than 0")]
    ZeroCapacity,
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_display() {
        assert_eq!(
            CacheError::ZeroCapacity.to_string(),
            "Cache capacity must be greater than 0"
        );
    }

    #[test]
    fn test_connection_failed_display() {
        let error = CacheError::ConnectionFailed("refused".to_string());
        assert_eq!(error.to_string(), "Cache connection failed: refused");
    }
}
