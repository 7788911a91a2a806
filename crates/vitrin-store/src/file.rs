//! # File Backend
//!
//! One JSON file per key inside the namespace directory.
//!
//! ## Atomic Replacement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  put("cartItems", json)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write   .cartItems.XXXXXX.tmp  (NamedTempFile, fsync)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  persist .cartItems.XXXXXX.tmp ──► cartItems.json                      │
//! │                                                                         │
//! │  A reader opens either the old cartItems.json or the new one.          │
//! │  A failed write drops the temp file, never leaving a torn value.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::debug;

use crate::backend::{validate_key, KvBackend};
use crate::error::{StoreError, StoreResult};

const EXTENSION: &str = "json";

/// File-per-key backend.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileBackend {
    /// Opens (creating if needed) the directory `dir`.
    pub fn open(dir: impl Into<PathBuf>, quota_bytes: Option<usize>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(dir.display().to_string(), e))?;
        debug!(dir = %dir.display(), "File store opened");
        Ok(FileBackend { dir, quota_bytes })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, EXTENSION)))
    }

    /// Bytes used by every stored value except `key`.
    fn used_bytes_excluding(&self, key: &str) -> StoreResult<usize> {
        let mut used = 0usize;
        for stored in self.keys()? {
            if stored == key {
                continue;
            }
            let path = self.dir.join(format!("{}.{}", stored, EXTENSION));
            match fs::metadata(&path) {
                Ok(meta) => used = used.saturating_add(meta.len() as usize),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(StoreError::io(stored, e)),
            }
        }
        Ok(used)
    }

    fn check_quota(&self, key: &str, value: &str) -> StoreResult<()> {
        let Some(limit) = self.quota_bytes else {
            return Ok(());
        };
        let size = self.used_bytes_excluding(key)?.saturating_add(value.len());
        if size > limit {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                size,
                limit,
            });
        }
        Ok(())
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        self.check_quota(key, value)?;

        // Dropping the temp file on any error below removes it
        let mut tmp = Builder::new()
            .prefix(&format!(".{}.", key))
            .suffix(".tmp")
            .tempfile_in(&self.dir)
            .map_err(|e| StoreError::io(key, e))?;
        tmp.write_all(value.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io(key, e))?;
        tmp.persist(&path)
            .map_err(|e| StoreError::io(key, e.error))?;

        debug!(key, bytes = value.len(), "Value written");
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let entries =
            fs::read_dir(&self.dir).map_err(|e| StoreError::io(self.dir.display().to_string(), e))?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(self.dir.display().to_string(), e))?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_key(stem).is_ok() {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_put_get_delete() {
        let dir = temp_dir();
        let backend = FileBackend::open(dir.path(), None).unwrap();

        assert_eq!(backend.get("cartItems").unwrap(), None);

        backend.put("cartItems", "[]").unwrap();
        assert_eq!(backend.get("cartItems").unwrap().as_deref(), Some("[]"));

        backend.put("cartItems", "[1]").unwrap();
        assert_eq!(backend.get("cartItems").unwrap().as_deref(), Some("[1]"));

        backend.delete("cartItems").unwrap();
        backend.delete("cartItems").unwrap();
        assert_eq!(backend.get("cartItems").unwrap(), None);
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = temp_dir();
        let backend = FileBackend::open(dir.path(), None).unwrap();

        backend.put("favorites", "[1,2,3]").unwrap();
        backend.put("cartItems", "[]").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().all(|n| !n.ends_with(".tmp")));
        assert_eq!(backend.keys().unwrap(), vec!["cartItems", "favorites"]);
    }

    #[test]
    fn test_failed_replace_cleans_up_temp_file() {
        let dir = temp_dir();
        let backend = FileBackend::open(dir.path(), None).unwrap();
        // A directory in the way makes the final rename fail
        fs::create_dir(dir.path().join("cartItems.json")).unwrap();

        let err = backend.put("cartItems", "[]").unwrap_err();

        assert!(matches!(err, StoreError::Io { .. }));
        let leftovers = fs::read_dir(dir.path())
            .unwrap()
            .filter(|e| {
                let name = e.as_ref().unwrap().file_name();
                name.to_string_lossy().ends_with(".tmp")
            })
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_quota_counts_other_keys() {
        let dir = temp_dir();
        let backend = FileBackend::open(dir.path(), Some(10)).unwrap();

        backend.put("a", "123456").unwrap();
        // Replacing a key does not count its old size
        backend.put("a", "1234567890").unwrap();

        let err = backend.put("b", "1").unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { size: 11, limit: 10, .. }));
        assert_eq!(backend.get("b").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = temp_dir();
        let backend = FileBackend::open(dir.path(), None).unwrap();

        assert!(matches!(
            backend.put("../outside", "{}"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(backend.get("a/b").is_err());
    }
}
