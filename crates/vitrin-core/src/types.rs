//! # Domain Types
//!
//! Catalog records and identity keys used throughout Vitrin.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │     Product     │   │     LineKey     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  category_id    │   │  id             │       │
//! │  │  name           │   │  id             │──►│  selected_color │       │
//! │  │  image          │   │  selected_color │   └─────────────────┘       │
//! │  └─────────────────┘   │  name, price... │     cart identity key       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Variant Identity
//! A cart line is identified by product id *and* selected color. A product
//! without a selected color is its own variant (`None`), distinct from every
//! colored variant of the same product.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Stable product identifier assigned by the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

/// Stable category identifier assigned by the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A catalog category shown in the category grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display image URL.
    #[serde(default)]
    pub image: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product record from the catalog.
///
/// Everything except `id` and `selected_color` is display data that the cart
/// carries through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    /// Current selling price.
    pub price: Money,

    /// Pre-discount price, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub original_price: Option<Money>,

    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category_id: Option<CategoryId>,

    /// Colors a shopper can choose on the detail page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[ts(as = "Option<Vec<String>>", optional)]
    pub colors: Vec<String>,

    /// Average review score, 0.0 - 5.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub rating: Option<f32>,

    /// The variant picked by the shopper. Part of the cart identity key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub selected_color: Option<String>,
}

impl Product {
    /// Creates a product with only the required fields set.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Product {
            id,
            name: name.into(),
            price,
            original_price: None,
            image: String::new(),
            description: None,
            category_id: None,
            colors: Vec::new(),
            rating: None,
            selected_color: None,
        }
    }

    pub fn with_selected_color(mut self, color: impl Into<String>) -> Self {
        self.selected_color = Some(color.into());
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Cart identity key of this product as currently configured.
    pub fn key(&self) -> LineKey {
        LineKey {
            id: self.id,
            selected_color: self.selected_color.clone(),
        }
    }

    /// Whether `color` is one of the variants this product offers.
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Discount badge percentage, if the product is on sale.
    pub fn percent_off(&self) -> Option<u8> {
        self.original_price
            .and_then(|original| self.price.percent_off(original))
    }
}

// =============================================================================
// Line Key
// =============================================================================

/// Identity of a cart line: product id plus selected variant.
///
/// ## Equality
/// `None` only equals `None`, so `(1, None)` and `(1, Some("red"))` are
/// two distinct lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub id: ProductId,
    pub selected_color: Option<String>,
}

impl LineKey {
    pub fn new(id: ProductId, selected_color: Option<&str>) -> Self {
        LineKey {
            id,
            selected_color: selected_color.map(str::to_owned),
        }
    }

    /// Compares against borrowed parts without allocating.
    #[inline]
    pub fn matches(&self, id: ProductId, selected_color: Option<&str>) -> bool {
        self.id == id && self.selected_color.as_deref() == selected_color
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selected_color {
            Some(color) => write!(f, "{}/{}", self.id, color),
            None => write!(f, "{}", self.id),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_key_distinguishes_missing_variant() {
        let plain = LineKey::new(ProductId(1), None);
        let red = LineKey::new(ProductId(1), Some("red"));

        assert_ne!(plain, red);
        assert!(plain.matches(ProductId(1), None));
        assert!(!plain.matches(ProductId(1), Some("red")));
        assert!(red.matches(ProductId(1), Some("red")));
        assert!(!red.matches(ProductId(2), Some("red")));
    }

    #[test]
    fn test_product_key_follows_selected_color() {
        let product = Product::new(ProductId(3), "Sneaker", Money::from_minor(99_900))
            .with_colors(["white", "black"])
            .with_selected_color("black");

        assert_eq!(product.key(), LineKey::new(ProductId(3), Some("black")));
        assert!(product.offers_color("white"));
        assert!(!product.offers_color("green"));
    }

    #[test]
    fn test_product_json_uses_camel_case() {
        let product = Product::new(ProductId(1), "Tee", Money::from_minor(100))
            .with_selected_color("red")
            .with_original_price(Money::from_minor(200));

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["selectedColor"], "red");
        assert_eq!(json["originalPrice"], 200);
        assert!(json.get("colors").is_none());
        assert_eq!(product.percent_off(), Some(50));
    }

    #[test]
    fn test_product_binding_marks_skipped_fields_optional() {
        let decl = Product::decl();

        assert!(decl.contains("selectedColor?: string"), "{decl}");
        assert!(decl.contains("originalPrice?: Money"), "{decl}");
        assert!(decl.contains("colors?: Array<string>"), "{decl}");
        assert!(!decl.contains("selectedColor: string | null"), "{decl}");
    }

    #[test]
    fn test_product_parses_with_missing_optional_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": 9, "name": "Mug", "price": 4500}"#).unwrap();

        assert_eq!(product.id, ProductId(9));
        assert!(product.selected_color.is_none());
        assert!(product.colors.is_empty());
        assert_eq!(product.image, "");
    }
}
