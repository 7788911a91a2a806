//! # Favorites State
//!
//! Session favorites, written through to the store on every toggle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;
use vitrin_core::{Favorites, ProductId};
use vitrin_store::PersistentStore;

/// Store key holding the favorite ids.
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Clone)]
pub struct FavoritesState {
    favorites: Arc<Mutex<Favorites>>,
    store: PersistentStore,
}

impl FavoritesState {
    /// Restores favorites from `store`; empty when absent or unreadable.
    pub fn load(store: PersistentStore) -> Self {
        let favorites: Favorites = store.read_or_default(FAVORITES_KEY);
        debug!(count = favorites.len(), "Favorites restored");

        FavoritesState {
            favorites: Arc::new(Mutex::new(favorites)),
            store,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Favorites> {
        self.favorites.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `id` if absent, removes it if present. Returns the new membership.
    pub fn toggle_favorite(&self, id: ProductId) -> bool {
        let mut favorites = self.lock();
        let now_favorite = favorites.toggle(id);
        self.store.write(FAVORITES_KEY, &*favorites);
        debug!(product_id = %id, now_favorite, "Favorite toggled");
        now_favorite
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.lock().contains(id)
    }

    pub fn snapshot(&self) -> Favorites {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear_favorites(&self) {
        let mut favorites = self.lock();
        favorites.clear();
        self.store.write(FAVORITES_KEY, &*favorites);
    }
}
