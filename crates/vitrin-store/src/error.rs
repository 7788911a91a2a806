//! # Store Error Types
//!
//! Error types for key-value persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the key and categorization            │
//! │       │                                                                 │
//! │       ├──► PersistentStore::read/write: logged, default used           │
//! │       │                                                                 │
//! │       └──► try_read/try_write callers: ApiError in the storefront      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Key-value store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    ///
    /// ## When This Occurs
    /// - Data directory is not writable
    /// - Disk full
    /// - Rename across filesystems
    #[error("I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Value could not be encoded as JSON.
    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored payload is not valid JSON for the requested type.
    #[error("Failed to deserialize '{key}': {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key contains characters outside `[A-Za-z0-9_.-]` or is empty.
    #[error("Invalid key: '{0}'")]
    InvalidKey(String),

    /// Write would push the namespace over its quota.
    #[error("Quota exceeded writing '{key}': {size} bytes needed, limit {limit}")]
    QuotaExceeded {
        key: String,
        size: usize,
        limit: usize,
    },

    /// Backend cannot be used at all.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub(crate) fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::QuotaExceeded {
            key: "cartItems".to_string(),
            size: 6_000_000,
            limit: 5_242_880,
        };
        assert_eq!(
            err.to_string(),
            "Quota exceeded writing 'cartItems': 6000000 bytes needed, limit 5242880"
        );

        let err = StoreError::InvalidKey("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid key: '../etc'");
    }
}
