//! # Favorites Commands

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;
use vitrin_core::{Catalog, ProductId};

use crate::commands::catalog::ProductView;
use crate::state::{ConfigState, FavoritesState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ToggleFavoriteResponse {
    pub product_id: ProductId,
    pub is_favorite: bool,
    pub count: usize,
}

/// Flips the heart on a product. Never fails; the id is not checked
/// against the catalog.
pub fn toggle_favorite(
    favorites: &FavoritesState,
    product_id: ProductId,
) -> ToggleFavoriteResponse {
    debug!(product_id = %product_id, "toggle_favorite command");
    let is_favorite = favorites.toggle_favorite(product_id);
    ToggleFavoriteResponse {
        product_id,
        is_favorite,
        count: favorites.len(),
    }
}

/// Favorited products in the order they were added. Ids no longer in the
/// catalog are skipped.
pub fn get_favorites(
    catalog: &dyn Catalog,
    favorites: &FavoritesState,
    config: &ConfigState,
) -> Vec<ProductView> {
    debug!("get_favorites command");
    favorites
        .snapshot()
        .ids()
        .iter()
        .filter_map(|id| catalog.product(*id))
        .map(|p| ProductView::build(p, favorites, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrin_core::{Money, Product, StaticCatalog};
    use vitrin_store::{PersistentStore, StoreConfig};

    #[test]
    fn test_toggle_and_list() {
        let catalog = StaticCatalog::new(
            vec![
                Product::new(ProductId(1), "Lamba", Money::from_minor(45_000)),
                Product::new(ProductId(2), "Kupa", Money::from_minor(9_950)),
            ],
            vec![],
        )
        .unwrap();
        let favorites =
            FavoritesState::load(PersistentStore::open(&StoreConfig::in_memory()).unwrap());
        let config = ConfigState::default();

        let response = toggle_favorite(&favorites, ProductId(2));
        assert!(response.is_favorite);
        assert_eq!(response.count, 1);

        // Unknown id is stored but not listed
        toggle_favorite(&favorites, ProductId(50));
        toggle_favorite(&favorites, ProductId(1));

        let listed = get_favorites(&catalog, &favorites, &config);
        let ids: Vec<ProductId> = listed.iter().map(|v| v.product.id).collect();
        assert_eq!(ids, vec![ProductId(2), ProductId(1)]);
        assert!(listed.iter().all(|v| v.is_favorite));

        let response = toggle_favorite(&favorites, ProductId(2));
        assert!(!response.is_favorite);
        assert_eq!(response.count, 2);
    }
}
