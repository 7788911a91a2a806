//! # vitrin-store: Persistent Key-Value Store for Vitrin
//!
//! A small, synchronous key-value store with typed JSON values. It plays the
//! role browser `localStorage` plays for a web storefront: values survive
//! restarts and are scoped to a namespace (one per profile).
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        vitrin-store                                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  PersistentStore                                                │   │
//! │  │  read(key, default) ── never fails, falls back to default       │   │
//! │  │  write(key, &value) ── never fails, returns whether it stuck    │   │
//! │  │  try_read / try_write ── same, with the StoreError              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw JSON strings                       │
//! │                ┌───────────────┴───────────────┐                        │
//! │                ▼                               ▼                        │
//! │  ┌──────────────────────────┐   ┌──────────────────────────┐           │
//! │  │  FileBackend             │   │  MemoryBackend           │           │
//! │  │  <dir>/<ns>/<key>.json   │   │  HashMap behind a Mutex  │           │
//! │  │  temp file + rename      │   │  (tests, ephemeral)      │           │
//! │  └──────────────────────────┘   └──────────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use vitrin_store::{PersistentStore, StoreConfig};
//!
//! let store = PersistentStore::open(&StoreConfig::in_memory()).unwrap();
//!
//! assert!(store.write("favorites", &vec![1u64, 4]));
//! let favorites: Vec<u64> = store.read("favorites", Vec::new());
//! assert_eq!(favorites, vec![1, 4]);
//!
//! // Missing keys fall back to the caller's default
//! let missing: Vec<u64> = store.read("nope", vec![7]);
//! assert_eq!(missing, vec![7]);
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use backend::KvBackend;
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use store::PersistentStore;
