//! # Backend Trait
//!
//! Raw string key-value storage. Backends know nothing about the types
//! stored in them; [`crate::PersistentStore`] owns (de)serialization.

use std::fmt::Debug;

use crate::error::{StoreError, StoreResult};

/// A persistent key-value backend holding JSON text.
///
/// All methods take `&self`; implementations use interior mutability.
pub trait KvBackend: Send + Sync + Debug {
    /// Returns `Ok(None)` when the key does not exist.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Inserts or replaces a value. A concurrent `get` sees either the old
    /// or the new value, never a partial one.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes a key. Succeeds when the key is already absent.
    fn delete(&self, key: &str) -> StoreResult<()>;

    /// All keys currently stored, sorted.
    fn keys(&self) -> StoreResult<Vec<String>>;
}

/// Checks that a key is safe to use as a file stem.
///
/// Allowed: ASCII letters, digits, `_`, `-`, `.`; must not start with `.`.
pub fn validate_key(key: &str) -> StoreResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("cartItems").is_ok());
        assert!(validate_key("favorites").is_ok());
        assert!(validate_key("profile-2.cart_v1").is_ok());

        assert!(validate_key("").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("sepet ürünleri").is_err());
    }
}
