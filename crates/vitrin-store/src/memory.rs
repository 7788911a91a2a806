//! # Memory Backend
//!
//! Process-local backend with the same key and quota rules as the file
//! backend. Values vanish with the process.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::backend::{validate_key, KvBackend};
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    pub fn new(quota_bytes: Option<usize>) -> Self {
        MemoryBackend {
            entries: Mutex::new(HashMap::new()),
            quota_bytes,
        }
    }

    fn entries(&self) -> StoreResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;
        let mut entries = self.entries()?;

        if let Some(limit) = self.quota_bytes {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let size = used.saturating_add(value.len());
            if size > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    size,
                    limit,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        validate_key(key)?;
        self.entries()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let mut keys: Vec<String> = self.entries()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_delete() {
        let backend = MemoryBackend::new(None);

        backend.put("favorites", "[1]").unwrap();
        assert_eq!(backend.get("favorites").unwrap().as_deref(), Some("[1]"));

        backend.delete("favorites").unwrap();
        assert_eq!(backend.get("favorites").unwrap(), None);
        assert!(backend.keys().unwrap().is_empty());
    }

    #[test]
    fn test_quota_rejects_and_keeps_old_value() {
        let backend = MemoryBackend::new(Some(8));
        backend.put("cartItems", "[]").unwrap();

        let err = backend.put("cartItems", "[1,2,3,4,5]").unwrap_err();

        assert!(matches!(err, StoreError::QuotaExceeded { .. }));
        assert_eq!(backend.get("cartItems").unwrap().as_deref(), Some("[]"));
    }
}
