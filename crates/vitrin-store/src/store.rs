//! # Typed Store
//!
//! JSON (de)serialization over a [`KvBackend`].
//!
//! Two flavours of every operation:
//! - `read` / `write` never fail. Problems are logged at `warn` and the
//!   caller gets its default back (or `false` from `write`).
//! - `try_read` / `try_write` surface the [`StoreError`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::backend::{validate_key, KvBackend};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::file::FileBackend;
use crate::memory::MemoryBackend;

/// Namespaced, typed key-value store.
///
/// Cloning is cheap; clones share the backend.
#[derive(Debug, Clone)]
pub struct PersistentStore {
    backend: Arc<dyn KvBackend>,
    namespace: String,
}

impl PersistentStore {
    /// Opens the store described by `config`.
    ///
    /// With a `data_dir` this is a [`FileBackend`] rooted at
    /// `<data_dir>/<namespace>`; otherwise a [`MemoryBackend`].
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        validate_key(&config.namespace)?;

        let backend: Arc<dyn KvBackend> = match config.namespace_dir() {
            Some(dir) => {
                info!(dir = %dir.display(), namespace = %config.namespace, "Opening file store");
                Arc::new(FileBackend::open(dir, config.quota_bytes)?)
            }
            None => {
                info!(namespace = %config.namespace, "Opening in-memory store");
                Arc::new(MemoryBackend::new(config.quota_bytes))
            }
        };

        Ok(PersistentStore {
            backend,
            namespace: config.namespace.clone(),
        })
    }

    /// Wraps an existing backend.
    pub fn with_backend(namespace: impl Into<String>, backend: Arc<dyn KvBackend>) -> Self {
        PersistentStore {
            backend,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Reads and decodes `key`. `Ok(None)` when the key is absent.
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Deserialize {
                key: key.to_string(),
                source,
            })
    }

    /// Reads `key`, falling back to `default` when it is absent,
    /// unreadable or malformed.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(key, "Key absent, using default");
                default
            }
            Err(e) => {
                warn!(key, error = %e, "Stored value unusable, using default");
                default
            }
        }
    }

    pub fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.read(key, T::default())
    }

    /// Encodes and writes `value` under `key`, replacing any previous value.
    pub fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.backend.put(key, &raw)
    }

    /// Writes `value`; returns `false` (after logging) when the write did
    /// not take. The previous value stays in place in that case.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_write(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "Failed to persist value");
                false
            }
        }
    }

    pub fn try_remove(&self, key: &str) -> StoreResult<()> {
        self.backend.delete(key)
    }

    pub fn remove(&self, key: &str) -> bool {
        match self.try_remove(key) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "Failed to remove value");
                false
            }
        }
    }

    pub fn keys(&self) -> StoreResult<Vec<String>> {
        self.backend.keys()
    }
}
