//! # Catalog
//!
//! Read-only product and category source.
//!
//! ## Providers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Providers                                    │
//! │                                                                         │
//! │  trait Catalog ◄──────────┬──────────────────────────┐                  │
//! │                           │                          │                  │
//! │                 ┌─────────┴────────┐      ┌──────────┴─────────┐        │
//! │                 │  StaticCatalog   │      │  (remote catalog)  │        │
//! │                 │  embedded JSON,  │      │  implements the    │        │
//! │                 │  fixed at build  │      │  same trait        │        │
//! │                 └──────────────────┘      └────────────────────┘        │
//! │                                                                         │
//! │  All lookups are synchronous. No pagination.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Deserialize;
use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Category, CategoryId, Product, ProductId};
use crate::validation::{validate_name, validate_price, validate_rating};

// =============================================================================
// Catalog Trait
// =============================================================================

/// Read-only access to the storefront's products and categories.
pub trait Catalog: Send + Sync {
    /// All products in display order.
    fn products(&self) -> &[Product];

    /// All categories in display order.
    fn categories(&self) -> &[Category];

    fn product(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories().iter().find(|c| c.id == id)
    }

    /// Products assigned to a category, in display order.
    fn products_in_category(&self, id: CategoryId) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| p.category_id == Some(id))
            .collect()
    }
}

// =============================================================================
// Static Catalog
// =============================================================================

/// Catalog document layout.
///
/// ```json
/// {
///   "categories": [{ "id": 1, "name": "Elektronik", "image": "..." }],
///   "products":   [{ "id": 1, "name": "...", "price": 129990, "categoryId": 1 }]
/// }
/// ```
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    products: Vec<Product>,
}

/// In-memory catalog fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl StaticCatalog {
    /// Builds a catalog after checking it is self-consistent.
    ///
    /// ## Rules
    /// - Product and category ids are unique
    /// - Names are non-empty, prices non-negative, ratings within 0-5
    /// - Every `category_id` refers to a listed category
    /// - Catalog products carry no `selected_color` (that is a cart concern)
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> CoreResult<Self> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            validate_name("category name", &category.name)?;
            if !category_ids.insert(category.id) {
                return Err(ValidationError::Duplicate {
                    field: "category id".to_string(),
                    value: category.id.to_string(),
                }
                .into());
            }
        }

        let mut product_ids = HashSet::new();
        for product in &products {
            validate_name("product name", &product.name)?;
            validate_price("price", product.price)?;
            if let Some(original) = product.original_price {
                validate_price("original price", original)?;
            }
            if let Some(rating) = product.rating {
                validate_rating(rating)?;
            }
            if !product_ids.insert(product.id) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.to_string(),
                }
                .into());
            }
            if let Some(category_id) = product.category_id {
                if !category_ids.contains(&category_id) {
                    return Err(CoreError::InvalidCatalog(format!(
                        "product {} refers to unknown category {}",
                        product.id, category_id
                    )));
                }
            }
            if product.selected_color.is_some() {
                return Err(CoreError::InvalidCatalog(format!(
                    "product {} has a selected color in the catalog",
                    product.id
                )));
            }
        }

        Ok(StaticCatalog {
            products,
            categories,
        })
    }

    /// Parses and validates a catalog JSON document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let doc: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;
        Self::new(doc.products, doc.categories)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    const DOC: &str = r#"{
        "categories": [
            {"id": 1, "name": "Elektronik", "image": "https://img/1"},
            {"id": 2, "name": "Moda", "image": "https://img/2"}
        ],
        "products": [
            {"id": 10, "name": "Kulaklık", "price": 129990, "categoryId": 1,
             "colors": ["black", "white"], "rating": 4.5},
            {"id": 11, "name": "Ceket", "price": 89990, "originalPrice": 119990,
             "categoryId": 2},
            {"id": 12, "name": "Hediye Kartı", "price": 0}
        ]
    }"#;

    #[test]
    fn test_from_json_and_lookups() {
        let catalog = StaticCatalog::from_json(DOC).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.product(ProductId(10)).unwrap().colors.len(), 2);
        assert!(catalog.product(ProductId(99)).is_none());
        assert_eq!(catalog.category(CategoryId(2)).unwrap().name, "Moda");

        let fashion: Vec<_> = catalog
            .products_in_category(CategoryId(2))
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(fashion, vec![ProductId(11)]);
    }

    #[test]
    fn test_rejects_duplicate_product_id() {
        let product = Product::new(ProductId(1), "A", Money::from_minor(100));
        let err = StaticCatalog::new(vec![product.clone(), product], vec![]).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let product =
            Product::new(ProductId(1), "A", Money::from_minor(100)).with_category(CategoryId(7));
        let err = StaticCatalog::new(vec![product], vec![]).unwrap_err();

        assert!(matches!(err, CoreError::InvalidCatalog(_)));
    }

    #[test]
    fn test_rejects_negative_price_and_selected_color() {
        let negative = Product::new(ProductId(1), "A", Money::from_minor(-1));
        assert!(StaticCatalog::new(vec![negative], vec![]).is_err());

        let preselected =
            Product::new(ProductId(2), "B", Money::from_minor(1)).with_selected_color("red");
        assert!(StaticCatalog::new(vec![preselected], vec![]).is_err());
    }

    #[test]
    fn test_malformed_json_is_invalid_catalog() {
        let err = StaticCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCatalog(_)));
    }
}
