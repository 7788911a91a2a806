//! # State Module
//!
//! Session state for the storefront. Separate state types instead of one
//! `AppState`, so each command declares exactly what it touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌────────────────┐  ┌──────────────────┐            │
//! │  │  CartState   │  │ FavoritesState │  │   ConfigState    │            │
//! │  │              │  │                │  │                  │            │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<    │  │  currency        │            │
//! │  │    Cart>>    │  │    Favorites>> │  │  data_dir        │            │
//! │  └──────┬───────┘  └───────┬────────┘  └──────────────────┘            │
//! │         │ "cartItems"      │ "favorites"                                │
//! │         └────────┬─────────┘                                            │
//! │                  ▼                                                      │
//! │          PersistentStore (shared backend, one namespace)                │
//! │                                                                         │
//! │  • CartState / FavoritesState: lock held across mutate + persist       │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod favorites;

pub use cart::{CartState, CART_KEY};
pub use config::{default_config_path, ConfigState, Messages, CONFIG_FILE_NAME};
pub use favorites::{FavoritesState, FAVORITES_KEY};
