//! # Favorites
//!
//! The set of favorited product ids. Kept as a `Vec` so the favorites page
//! lists products in the order they were hearted; membership is what counts.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Favorited product ids, each present at most once.
///
/// Serialized as a bare JSON array. Duplicates in a loaded payload are
/// dropped, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ProductId>", into = "Vec<ProductId>")]
pub struct Favorites {
    ids: Vec<ProductId>,
}

impl Favorites {
    pub fn new() -> Self {
        Favorites { ids: Vec::new() }
    }

    /// Flips membership of `id`. Returns `true` if it is now a favorite.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if let Some(pos) = self.ids.iter().position(|f| *f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl From<Vec<ProductId>> for Favorites {
    fn from(raw: Vec<ProductId>) -> Self {
        let mut ids = Vec::with_capacity(raw.len());
        for id in raw {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Favorites { ids }
    }
}

impl From<Favorites> for Vec<ProductId> {
    fn from(favorites: Favorites) -> Self {
        favorites.ids
    }
}
