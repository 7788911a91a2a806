//! # Validation Module
//!
//! Argument and record validation for the storefront core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront UI                                                │
//! │  ├── Quantity steppers never go below 1                                │
//! │  └── Color pickers only offer catalog colors                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Commands (apps/storefront)                                   │
//! │  └── Resolve product ids, check the requested color                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Quantities for cart operations                                    │
//! │  └── Catalog records on load                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity that must name at least one unit.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must fit the stored line quantity (`u32`)
///
/// ## Returns
/// The quantity narrowed to the stored type.
///
/// ## Example
/// ```rust
/// use vitrin_core::validation::validate_quantity;
///
/// assert_eq!(validate_quantity(3).unwrap(), 3);
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: i64::from(u32::MAX),
    })
}

/// Validates a catalog price.
///
/// Zero is allowed (free gifts); negative prices are not.
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a review score (0.0 - 5.0).
pub fn validate_rating(rating: f32) -> ValidationResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name (product or category).
///
/// ## Example
/// ```rust
/// use vitrin_core::validation::validate_name;
///
/// assert!(validate_name("product name", "Deri Ceket").is_ok());
/// assert!(validate_name("product name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1).unwrap(), 1);
        assert_eq!(validate_quantity(250).unwrap(), 250);

        assert!(matches!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_quantity(-4).is_err());
        assert!(matches!(
            validate_quantity(i64::from(u32::MAX) + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", Money::zero()).is_ok());
        assert!(validate_price("price", Money::from_minor(1_999)).is_ok());
        assert!(validate_price("price", Money::from_minor(-1)).is_err());
    }

    #[test]
    fn test_validate_rating() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(4.5).is_ok());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(f32::NAN).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("category name", "Elektronik").is_ok());
        assert!(validate_name("category name", "").is_err());
    }
}
