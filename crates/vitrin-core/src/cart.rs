//! # Cart
//!
//! The cart reducer: an ordered list of line items with merge-on-add
//! semantics. Pure data, no persistence. The storefront's `CartState`
//! wraps this and writes every change through to the store.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Reducer Operations                              │
//! │                                                                         │
//! │  Intent                     Key present?        Effect                  │
//! │  ──────                     ────────────        ──────                  │
//! │                                                                         │
//! │  add(product, q)            yes ──────────────► line.qty += q          │
//! │                             no  ──────────────► push(product + q)      │
//! │                                                                         │
//! │  update_quantity(k, 0)      yes ──────────────► remove line            │
//! │  update_quantity(k, n>0)    yes ──────────────► line.qty = n (in place)│
//! │  update_quantity(k, _)      no  ──────────────► no-op                  │
//! │                                                                         │
//! │  remove(k)                  yes ──────────────► remove line            │
//! │                             no  ──────────────► no-op                  │
//! │                                                                         │
//! │  key = (product id, selected color)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two lines share a `LineKey`
//! - Every stored quantity is >= 1
//! - New keys are appended; existing lines never move

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineKey, Product, ProductId};
use crate::validation::validate_quantity;

// =============================================================================
// Line Item
// =============================================================================

/// A product snapshot plus its quantity.
///
/// The product is flattened so the persisted JSON object is the product's
/// own fields with `quantity` alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,

    /// Always >= 1 while the line is in a cart.
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        CartLineItem { product, quantity }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn selected_color(&self) -> Option<&str> {
        self.product.selected_color.as_deref()
    }

    pub fn key(&self) -> LineKey {
        self.product.key()
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// What `Cart::add` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Inserted,
    /// An existing line absorbed the quantity; `quantity` is the new total.
    Merged { quantity: u32 },
}

/// What `Cart::update_quantity` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Updated { previous: u32 },
    Removed,
    /// No line with that key.
    Unchanged,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Serialized as a bare JSON array of line items. Deserialization goes
/// through [`Cart::from_items`], so a hand-edited payload with duplicate
/// keys or zero quantities is normalized on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLineItem>", into = "Vec<CartLineItem>")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from raw line items, restoring the invariants.
    ///
    /// - lines with quantity 0 are dropped
    /// - lines with a repeated key are merged into the first occurrence
    pub fn from_items(raw: Vec<CartLineItem>) -> Self {
        let mut cart = Cart::new();
        for item in raw {
            if item.quantity == 0 {
                continue;
            }
            match cart.position(&item.key()) {
                Some(idx) => {
                    let existing = &mut cart.items[idx];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.items
            .iter()
            .position(|i| key.matches(i.id(), i.selected_color()))
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Looks up the line for a key.
    pub fn get(&self, id: ProductId, selected_color: Option<&str>) -> Option<&CartLineItem> {
        self.position(&LineKey::new(id, selected_color))
            .map(|idx| &self.items[idx])
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - Key already in cart: quantities are summed. The stored snapshot
    ///   wins; nothing else on the line is refreshed from `product`.
    /// - Key not in cart: a new line is appended at the end.
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity` < 1 (cart is untouched)
    /// - `QuantityOverflow` if the merged quantity does not fit
    pub fn add(&mut self, product: &Product, quantity: i64) -> CoreResult<AddOutcome> {
        let quantity = validate_quantity(quantity)
            .map_err(|_| CoreError::InvalidQuantity { requested: quantity })?;

        if let Some(idx) = self.position(&product.key()) {
            let item = &mut self.items[idx];
            let merged = item
                .quantity
                .checked_add(quantity)
                .ok_or(CoreError::QuantityOverflow {
                    id: product.id,
                    current: item.quantity,
                    adding: quantity,
                })?;
            item.quantity = merged;
            return Ok(AddOutcome::Merged { quantity: merged });
        }

        self.items.push(CartLineItem::new(product.clone(), quantity));
        Ok(AddOutcome::Inserted)
    }

    /// Removes the line for a key.
    ///
    /// Returns `false` (not an error) when no such line exists.
    pub fn remove(&mut self, id: ProductId, selected_color: Option<&str>) -> bool {
        match self.position(&LineKey::new(id, selected_color)) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Sets the quantity of a line in place.
    ///
    /// ## Behavior
    /// - `0`: same as [`Cart::remove`]
    /// - positive: replaces the quantity, position preserved
    /// - no matching line: no-op
    ///
    /// ## Errors
    /// - `InvalidQuantity` for negative values (cart is untouched)
    pub fn update_quantity(
        &mut self,
        id: ProductId,
        selected_color: Option<&str>,
        new_quantity: i64,
    ) -> CoreResult<QuantityChange> {
        if new_quantity == 0 {
            return Ok(if self.remove(id, selected_color) {
                QuantityChange::Removed
            } else {
                QuantityChange::Unchanged
            });
        }

        let new_quantity = validate_quantity(new_quantity).map_err(|_| {
            CoreError::InvalidQuantity {
                requested: new_quantity,
            }
        })?;

        match self.position(&LineKey::new(id, selected_color)) {
            Some(idx) => {
                let item = &mut self.items[idx];
                let previous = item.quantity;
                item.quantity = new_quantity;
                Ok(QuantityChange::Updated { previous })
            }
            None => Ok(QuantityChange::Unchanged),
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines (the navbar badge number).
    pub fn badge_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<CartLineItem>> for Cart {
    fn from(items: Vec<CartLineItem>) -> Self {
        Cart::from_items(items)
    }
}

impl From<Cart> for Vec<CartLineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
