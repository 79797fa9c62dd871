//! Error types for the session cache
//!
//! Provides unified error handling using thiserror.
//!
//! These errors never cross the public `save`/`load`/`delete` boundary:
//! the cache is an optimization layer, so every failure degrades to
//! "behave as if there is no cache" instead of reaching the caller.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing store cannot be read or written
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Payload could not be serialized or deserialized
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key is empty, too long, or contains unsupported characters
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

// == Result Type Alias ==
/// Convenience Result type for the session cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CacheError::StorageUnavailable("disk full".to_string());
        assert_eq!(err.to_string(), "storage unavailable: disk full");

        let err = CacheError::InvalidKey("key cannot be empty".to_string());
        assert_eq!(err.to_string(), "invalid key: key cannot be empty");
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let bad = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CacheError = bad.into();
        assert!(matches!(err, CacheError::Serialization(_)));
    }
}
