//! # Catalog Commands
//!
//! Read-only product and category listings for the home page, category
//! pages and the product detail page.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;
use vitrin_core::{Catalog, Category, CategoryId, CoreError, Product, ProductId};

use crate::error::ApiError;
use crate::state::{ConfigState, FavoritesState};

/// A product as the UI renders it.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,

    /// Heart icon state
    pub is_favorite: bool,

    pub formatted_price: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub formatted_original_price: Option<String>,

    /// "%20 İndirim" badge
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub discount_percent: Option<u8>,
}

impl ProductView {
    pub fn build(product: &Product, favorites: &FavoritesState, config: &ConfigState) -> Self {
        ProductView {
            product: product.clone(),
            is_favorite: favorites.is_favorite(product.id),
            formatted_price: config.format_money(product.price),
            formatted_original_price: product.original_price.map(|p| config.format_money(p)),
            discount_percent: product.percent_off(),
        }
    }
}

/// All products in display order.
pub fn list_products(
    catalog: &dyn Catalog,
    favorites: &FavoritesState,
    config: &ConfigState,
) -> Vec<ProductView> {
    debug!("list_products command");
    catalog
        .products()
        .iter()
        .map(|p| ProductView::build(p, favorites, config))
        .collect()
}

/// A single product for the detail page.
pub fn get_product(
    catalog: &dyn Catalog,
    favorites: &FavoritesState,
    config: &ConfigState,
    product_id: ProductId,
) -> Result<ProductView, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    let product = catalog
        .product(product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;
    Ok(ProductView::build(product, favorites, config))
}

pub fn list_categories(catalog: &dyn Catalog) -> Vec<Category> {
    debug!("list_categories command");
    catalog.categories().to_vec()
}

/// Products of one category. Unknown categories are `NOT_FOUND`.
pub fn list_category_products(
    catalog: &dyn Catalog,
    favorites: &FavoritesState,
    config: &ConfigState,
    category_id: CategoryId,
) -> Result<Vec<ProductView>, ApiError> {
    debug!(category_id = %category_id, "list_category_products command");
    catalog
        .category(category_id)
        .ok_or(CoreError::CategoryNotFound(category_id))?;

    Ok(catalog
        .products_in_category(category_id)
        .into_iter()
        .map(|p| ProductView::build(p, favorites, config))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use vitrin_core::{Money, StaticCatalog};
    use vitrin_store::{PersistentStore, StoreConfig};

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(
            vec![
                Product::new(ProductId(1), "Kulaklık", Money::from_minor(79_900))
                    .with_original_price(Money::from_minor(99_900))
                    .with_category(CategoryId(1)),
                Product::new(ProductId(2), "Tişört", Money::from_minor(29_990))
                    .with_category(CategoryId(2)),
            ],
            vec![
                Category {
                    id: CategoryId(1),
                    name: "Elektronik".to_string(),
                    image: String::new(),
                },
                Category {
                    id: CategoryId(2),
                    name: "Giyim".to_string(),
                    image: String::new(),
                },
                Category {
                    id: CategoryId(3),
                    name: "Kitap".to_string(),
                    image: String::new(),
                },
            ],
        )
        .unwrap()
    }

    fn favorites() -> FavoritesState {
        FavoritesState::load(PersistentStore::open(&StoreConfig::in_memory()).unwrap())
    }

    #[test]
    fn test_list_products_marks_favorites() {
        let favorites = favorites();
        favorites.toggle_favorite(ProductId(2));

        let views = list_products(&catalog(), &favorites, &ConfigState::default());

        assert_eq!(views.len(), 2);
        assert!(!views[0].is_favorite);
        assert!(views[1].is_favorite);
    }

    #[test]
    fn test_product_view_discount() {
        let view = get_product(&catalog(), &favorites(), &ConfigState::default(), ProductId(1))
            .unwrap();

        assert_eq!(view.formatted_price, "799.00₺");
        assert_eq!(view.formatted_original_price.as_deref(), Some("999.00₺"));
        assert_eq!(view.discount_percent, Some(20));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["name"], "Kulaklık");
        assert_eq!(json["isFavorite"], false);
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let catalog = catalog();
        let favorites = favorites();
        let config = ConfigState::default();

        let err = get_product(&catalog, &favorites, &config, ProductId(9)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err =
            list_category_products(&catalog, &favorites, &config, CategoryId(9)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_category_listing() {
        let catalog = catalog();
        let favorites = favorites();
        let config = ConfigState::default();

        assert_eq!(list_categories(&catalog).len(), 3);

        let clothing =
            list_category_products(&catalog, &favorites, &config, CategoryId(2)).unwrap();
        assert_eq!(clothing.len(), 1);
        assert_eq!(clothing[0].product.id, ProductId(2));

        let books = list_category_products(&catalog, &favorites, &config, CategoryId(3)).unwrap();
        assert!(books.is_empty());
    }
}
