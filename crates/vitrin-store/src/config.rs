//! # Store Configuration
//!
//! Where values live and how much room they get.

use std::path::PathBuf;

/// Default namespace when none is configured.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Default per-namespace quota: 5 MiB, the common browser storage limit.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Store configuration.
///
/// ## Example
/// ```rust
/// use vitrin_store::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/vitrin")
///     .namespace("guest")
///     .quota_bytes(Some(64 * 1024));
///
/// assert_eq!(
///     config.namespace_dir().unwrap(),
///     std::path::Path::new("/tmp/vitrin/guest")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Root directory for the file backend. `None` selects the memory backend.
    pub data_dir: Option<PathBuf>,

    /// Sub-directory (and key scope) under `data_dir`.
    /// Default: "default"
    pub namespace: String,

    /// Upper bound on the total bytes stored in the namespace.
    /// Default: 5 MiB. `None` disables the check.
    pub quota_bytes: Option<usize>,
}

impl StoreConfig {
    /// File-backed store rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: Some(data_dir.into()),
            namespace: DEFAULT_NAMESPACE.to_string(),
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
        }
    }

    /// Memory-backed store (for testing and throwaway sessions).
    pub fn in_memory() -> Self {
        StoreConfig {
            data_dir: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
        }
    }

    /// Sets the namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the quota.
    pub fn quota_bytes(mut self, quota: Option<usize>) -> Self {
        self.quota_bytes = quota;
        self
    }

    /// Directory holding this namespace's files, if file-backed.
    pub fn namespace_dir(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(&self.namespace))
    }

    pub fn is_in_memory(&self) -> bool {
        self.data_dir.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("/var/lib/vitrin")
            .namespace("profile-1")
            .quota_bytes(None);

        assert_eq!(config.namespace, "profile-1");
        assert_eq!(config.quota_bytes, None);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_in_memory_defaults() {
        let config = StoreConfig::in_memory();

        assert!(config.is_in_memory());
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
        assert_eq!(config.quota_bytes, Some(DEFAULT_QUOTA_BYTES));
        assert!(config.namespace_dir().is_none());
    }
}
