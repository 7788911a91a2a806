//! # Vitrin Storefront Library
//!
//! The storefront shell: configuration, session state, notifications and
//! the commands a UI calls.
//!
//! ## Module Organization
//! ```text
//! vitrin_storefront/
//! ├── lib.rs          ◄─── You are here (tracing, bootstrap)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state (write-through)
//! │   ├── favorites.rs◄─── Favorites state (write-through)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Product/category listings
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── favorites.rs◄─── Favorite toggling
//! │   └── config.rs   ◄─── Config for the UI
//! ├── notify.rs       ◄─── Toast notifications
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. ConfigState::load()     defaults → vitrin.toml → VITRIN_* env       │
//! │  2. PersistentStore::open() <data_dir>/<namespace>/                     │
//! │  3. CartState::load()       store["cartItems"]  (empty if unreadable)   │
//! │  4. FavoritesState::load()  store["favorites"]  (empty if unreadable)   │
//! │  5. Catalog                 embedded data/catalog.json                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod notify;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vitrin_core::{CoreResult, StaticCatalog};
use vitrin_store::PersistentStore;

use error::ApiError;
use notify::{NotificationQueue, Notifier};
use state::{CartState, ConfigState, FavoritesState};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vitrin_store=trace` - Trace the store only
/// - Default: INFO, DEBUG for vitrin crates
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vitrin=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Platform data directory for the persistent store.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.vitrin.storefront`
/// - **Windows**: `%APPDATA%\vitrin\storefront\data`
/// - **Linux**: `~/.local/share/storefront`
///
/// `VITRIN_DATA_DIR` takes precedence.
pub fn resolve_data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("VITRIN_DATA_DIR") {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "vitrin", "storefront").map(|dirs| dirs.data_dir().to_path_buf())
}

/// The catalog shipped with the binary.
pub fn builtin_catalog() -> CoreResult<StaticCatalog> {
    StaticCatalog::from_json(BUILTIN_CATALOG)
}

/// Everything one storefront session needs.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub config: ConfigState,
    pub catalog: Arc<StaticCatalog>,
    pub cart: CartState,
    pub favorites: FavoritesState,
    pub notifications: Arc<NotificationQueue>,
}

impl Storefront {
    /// Opens the configured store and restores the session with the
    /// built-in catalog.
    pub fn bootstrap(config: ConfigState) -> Result<Self, ApiError> {
        let store = PersistentStore::open(&config.store_config())?;
        let catalog = builtin_catalog()?;
        Ok(Self::with_store(config, catalog, store))
    }

    /// Restores a session from an already opened store.
    pub fn with_store(config: ConfigState, catalog: StaticCatalog, store: PersistentStore) -> Self {
        let notifications = Arc::new(NotificationQueue::new());
        let notifier: Arc<dyn Notifier> = notifications.clone();

        let cart = CartState::load(
            store.clone(),
            notifier,
            config.messages.added_to_cart.clone(),
        );
        let favorites = FavoritesState::load(store);

        info!(
            store = %config.store_name,
            products = catalog.len(),
            cart_lines = cart.line_count(),
            favorites = favorites.len(),
            "Storefront session ready"
        );

        Storefront {
            config,
            catalog: Arc::new(catalog),
            cart,
            favorites,
            notifications,
        }
    }
}
