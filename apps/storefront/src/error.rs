//! # API Error Types
//!
//! Error types returned from storefront commands to the UI.
//!
//! ## Error Conversion Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Conversion                                     │
//! │                                                                         │
//! │  CoreError (vitrin-core) ──┐                                           │
//! │                            │                                            │
//! │  StoreError (vitrin-store) ┼──► ApiError { code, message } ──► UI     │
//! │                            │                                            │
//! │  ConfigError (this crate) ─┘                                           │
//! │                                                                         │
//! │  The UI switches on `code` and shows `message` in a toast.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;
use vitrin_core::CoreError;
use vitrin_store::StoreError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Product or category is not in the catalog
    NotFound,

    /// Input validation failed (bad quantity, unknown color)
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Persistent store could not be used
    StorageError,

    /// Configuration could not be loaded
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::CategoryNotFound(id) => ApiError::not_found("Category", id),
            CoreError::InvalidQuantity { requested } => {
                ApiError::validation(format!("Invalid quantity: {}", requested))
            }
            err @ CoreError::QuantityOverflow { .. } => {
                ApiError::new(ErrorCode::CartError, err.to_string())
            }
            err @ CoreError::InvalidVariant { .. } => ApiError::validation(err.to_string()),
            CoreError::InvalidCatalog(reason) => {
                tracing::error!(reason = %reason, "Catalog rejected");
                ApiError::internal(format!("Invalid catalog: {}", reason))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidKey(key) => {
                ApiError::new(ErrorCode::StorageError, format!("Invalid storage key: {}", key))
            }
            StoreError::QuotaExceeded { .. } => {
                ApiError::new(ErrorCode::StorageError, "Storage quota exceeded")
            }
            other => {
                // Log the actual error but return a generic message
                tracing::error!(error = %other, "Store operation failed");
                ApiError::new(ErrorCode::StorageError, "Storage operation failed")
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `ConfigState`.
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An environment override could not be parsed.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: String, value: String },
}
