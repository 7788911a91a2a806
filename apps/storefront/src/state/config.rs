//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VITRIN_*`)
//! 2. Config file (`vitrin.toml` in the platform config directory)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vitrin_core::money::MINOR_PER_MAJOR;
use vitrin_core::Money;
use vitrin_store::StoreConfig;

use crate::error::ConfigError;

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "vitrin.toml";

/// Storefront configuration.
///
/// ## Example `vitrin.toml`
/// ```toml
/// storeName = "Vitrin Outlet"
/// currencySymbol = "₺"
/// namespace = "guest"
///
/// [messages]
/// addedToCart = "Sepete eklendi"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigState {
    /// Store name (shown in the navbar)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Put the symbol after the amount ("299.90₺") instead of before.
    pub symbol_after_amount: bool,

    /// Cart subtotal at which shipping is free. `None` disables the banner.
    pub free_shipping_threshold: Option<Money>,

    /// Root of the persistent store. `None` uses the platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Store namespace (one per profile).
    pub namespace: String,

    /// Per-namespace storage quota in bytes.
    pub quota_bytes: Option<usize>,

    /// User-facing notification texts.
    pub messages: Messages,
}

/// Notification texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Messages {
    pub added_to_cart: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            added_to_cart: "Ürün sepete eklendi!".to_string(),
        }
    }
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Vitrin"
    /// - Currency: TRY (₺, after the amount)
    /// - Free shipping from 2000₺
    /// - Namespace "default", 5 MiB quota
    fn default() -> Self {
        ConfigState {
            store_name: "Vitrin".to_string(),
            currency_code: "TRY".to_string(),
            currency_symbol: "₺".to_string(),
            symbol_after_amount: true,
            free_shipping_threshold: Some(Money::from_major_minor(2000, 0)),
            data_dir: None,
            namespace: vitrin_store::config::DEFAULT_NAMESPACE.to_string(),
            quota_bytes: Some(vitrin_store::config::DEFAULT_QUOTA_BYTES),
            messages: Messages::default(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from the default config file and the environment.
    ///
    /// `VITRIN_CONFIG` points at a different config file.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("VITRIN_CONFIG")
            .map(PathBuf::from)
            .or_else(default_config_path);
        Self::load_from(path.as_deref(), |var| std::env::var(var).ok())
    }

    /// Loads defaults, then `path` (if it exists), then overrides from `env`.
    pub fn load_from<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            Some(path) => {
                debug!(path = %path.display(), "No config file, using defaults");
                ConfigState::default()
            }
            None => ConfigState::default(),
        };
        config.apply_env(env)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Config file loaded");
        Ok(config)
    }

    /// Applies `VITRIN_*` overrides.
    ///
    /// ## Environment Variables
    /// - `VITRIN_DATA_DIR`: store root directory
    /// - `VITRIN_NAMESPACE`: store namespace
    /// - `VITRIN_QUOTA_BYTES`: quota in bytes, `0` disables it
    /// - `VITRIN_CURRENCY_SYMBOL`: currency symbol
    /// - `VITRIN_STORE_NAME`: store name
    pub fn apply_env<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = env("VITRIN_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(namespace) = env("VITRIN_NAMESPACE") {
            self.namespace = namespace;
        }

        if let Some(quota) = env("VITRIN_QUOTA_BYTES") {
            let bytes: usize = quota.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: "VITRIN_QUOTA_BYTES".to_string(),
                value: quota.clone(),
            })?;
            self.quota_bytes = (bytes > 0).then_some(bytes);
        }

        if let Some(symbol) = env("VITRIN_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(name) = env("VITRIN_STORE_NAME") {
            self.store_name = name;
        }

        Ok(())
    }

    /// Store configuration for this storefront.
    ///
    /// Without an explicit `data_dir` the platform data directory is used;
    /// when there is none the store is kept in memory.
    pub fn store_config(&self) -> StoreConfig {
        let data_dir = self.data_dir.clone().or_else(crate::resolve_data_dir);
        let config = match data_dir {
            Some(dir) => StoreConfig::new(dir),
            None => {
                tracing::warn!("No data directory available, cart will not survive restarts");
                StoreConfig::in_memory()
            }
        };
        config
            .namespace(self.namespace.clone())
            .quota_bytes(self.quota_bytes)
    }

    /// Formats a minor-unit amount as a currency string.
    ///
    /// The number of decimals follows `MINOR_PER_MAJOR`, the only scale
    /// `Money` knows.
    ///
    /// ## Example
    /// ```rust
    /// use vitrin_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(29_990), "299.90₺");
    /// ```
    pub fn format_currency(&self, minor: i64) -> String {
        let decimals = MINOR_PER_MAJOR.ilog10() as usize;
        let whole = (minor / MINOR_PER_MAJOR).unsigned_abs();
        let frac = (minor % MINOR_PER_MAJOR).unsigned_abs();
        let sign = if minor < 0 { "-" } else { "" };
        let amount = format!("{}.{:0width$}", whole, frac, width = decimals);

        if self.symbol_after_amount {
            format!("{}{}{}", sign, amount, self.currency_symbol)
        } else {
            format!("{}{}{}", sign, self.currency_symbol, amount)
        }
    }

    pub fn format_money(&self, money: Money) -> String {
        self.format_currency(money.minor())
    }

    /// Whether `subtotal` reaches the free shipping threshold.
    pub fn qualifies_for_free_shipping(&self, subtotal: Money) -> bool {
        self.free_shipping_threshold
            .is_some_and(|threshold| subtotal >= threshold)
    }
}

/// `<platform config dir>/vitrin.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "vitrin", "storefront")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
