//! # Cart Commands
//!
//! Commands for the cart drawer, the cart page and the "Sepete Ekle" button.
//!
//! ## Available Commands
//! - `get_cart`: current cart with totals
//! - `add_to_cart`: add a catalog product (merges on repeat)
//! - `update_cart_item`: set a line's quantity (0 removes)
//! - `remove_from_cart`: remove a line
//! - `clear_cart`: empty the cart

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;
use vitrin_core::{Cart, CartLineItem, Catalog, CoreError, Money, Product, ProductId};

use crate::error::ApiError;
use crate::state::{CartState, ConfigState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

/// Cart totals summary.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct lines
    pub line_count: usize,

    /// Sum of quantities (navbar badge)
    pub badge_count: u64,

    pub subtotal: Money,

    /// Subtotal rendered with the configured currency
    pub formatted_subtotal: String,

    /// Whether the free shipping banner applies
    pub free_shipping: bool,
}

impl CartResponse {
    pub fn build(cart: &Cart, config: &ConfigState) -> Self {
        let subtotal = cart.subtotal();
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals {
                line_count: cart.line_count(),
                badge_count: cart.badge_count(),
                subtotal,
                formatted_subtotal: config.format_money(subtotal),
                free_shipping: config.qualifies_for_free_shipping(subtotal),
            },
        }
    }
}

/// Checks the requested variant against the product.
///
/// A requested color must be one the product offers. No color is its own
/// variant (the home grid adds that way), even for products with colors.
fn resolve_color(
    product: &Product,
    requested: Option<String>,
) -> Result<Option<String>, CoreError> {
    match requested {
        Some(color) if product.offers_color(&color) => Ok(Some(color)),
        Some(color) => Err(CoreError::InvalidVariant {
            id: product.id,
            color,
        }),
        None => Ok(None),
    }
}

/// Gets the current cart contents.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  SEPETİM                                              3 ürün            │
/// ├─────────────────────────────────────────────────────────────────────────┤
/// │  Basic T-Shirt (Kırmızı)     x2                      599.80₺            │
/// │  Seramik Kupa                x1                       99.50₺            │
/// ├─────────────────────────────────────────────────────────────────────────┤
/// │  Ara Toplam                                          699.30₺            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::build(c, config))
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - Same product and color already in cart: quantity increases
/// - Otherwise: appended as a new line with a snapshot of the product
///
/// ## Arguments
/// * `product_id` - Catalog product id
/// * `selected_color` - Variant; `None` is the plain, color-less line
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    catalog: &dyn Catalog,
    cart: &CartState,
    config: &ConfigState,
    product_id: ProductId,
    selected_color: Option<String>,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(vitrin_core::DEFAULT_ADD_QUANTITY);
    debug!(product_id = %product_id, ?selected_color, quantity, "add_to_cart command");

    let product = catalog
        .product(product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;

    let mut line = product.clone();
    line.selected_color = resolve_color(product, selected_color)?;

    cart.add_to_cart(&line, quantity)?;
    Ok(get_cart(cart, config))
}

/// Updates the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0: removes the line
/// - Negative quantity: validation error, cart unchanged
/// - Unknown line: no change
pub fn update_cart_item(
    cart: &CartState,
    config: &ConfigState,
    product_id: ProductId,
    selected_color: Option<String>,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, ?selected_color, quantity, "update_cart_item command");

    cart.update_quantity(product_id, selected_color.as_deref(), quantity)?;
    Ok(get_cart(cart, config))
}

/// Removes a cart line. Removing an absent line is not an error.
pub fn remove_from_cart(
    cart: &CartState,
    config: &ConfigState,
    product_id: ProductId,
    selected_color: Option<String>,
) -> CartResponse {
    debug!(product_id = %product_id, ?selected_color, "remove_from_cart command");

    cart.remove_from_cart(product_id, selected_color.as_deref());
    get_cart(cart, config)
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    cart.clear_cart();
    get_cart(cart, config)
}
