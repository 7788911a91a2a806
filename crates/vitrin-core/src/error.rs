//! # Error Types
//!
//! Domain-specific error types for vitrin-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrin-core errors (this file)                                        │
//! │  ├── CoreError        - Cart/catalog rule violations                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vitrin-store errors (separate crate)                                  │
//! │  └── StoreError       - Persistence failures (never fatal)             │
//! │                                                                         │
//! │  Storefront API errors (in app)                                        │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::{CategoryId, ProductId};

// =============================================================================
// Core Error
// =============================================================================

/// Core storefront errors.
///
/// None of these are fatal: the state managers reject the intent and leave
/// their collections untouched.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category id is not in the catalog.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Quantity argument is out of the accepted range.
    ///
    /// ## When This Occurs
    /// - add-to-cart with quantity 0 or below
    /// - update-quantity with a negative value
    #[error("Invalid quantity: {requested}")]
    InvalidQuantity { requested: i64 },

    /// Merging quantities on repeat add would overflow.
    #[error("Quantity for product {id} would overflow (current {current}, adding {adding})")]
    QuantityOverflow {
        id: ProductId,
        current: u32,
        adding: u32,
    },

    /// Requested variant is not offered by the product.
    #[error("Product {id} has no color '{color}'")]
    InvalidVariant { id: ProductId, color: String },

    /// Catalog document is inconsistent.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., duplicate product id in a catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
