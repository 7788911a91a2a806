//! # vitrin-core: Pure Storefront Logic for Vitrin
//!
//! This crate is the **heart** of the Vitrin storefront. It contains the cart
//! reducer, the favorites set and the catalog model as pure data structures
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrin Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (presentation)                    │   │
//! │  │   Catalog Grid ──► Product Detail ──► Cart Drawer ──► Cart Page │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          State managers (apps/storefront, write-through)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrin-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ favorites │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Cart    │  │ Favorites │  │  Catalog  │  │   │
//! │  │   │  LineKey  │  │  LineItem │  │           │  │  Static   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog records and identity keys (Product, Category, LineKey)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart reducer with merge-on-add semantics
//! - [`favorites`] - Favorited product id set
//! - [`catalog`] - Read-only catalog provider
//! - [`error`] - Domain error types
//! - [`validation`] - Argument validation
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrin_core::{Cart, Money, Product, ProductId};
//!
//! let shirt = Product::new(ProductId(1), "Basic T-Shirt", Money::from_minor(29_900))
//!     .with_selected_color("red");
//!
//! let mut cart = Cart::new();
//! cart.add(&shirt, 1).unwrap();
//! cart.add(&shirt, 2).unwrap();
//!
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.badge_count(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{AddOutcome, Cart, CartLineItem, QuantityChange};
pub use catalog::{Catalog, StaticCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use favorites::Favorites;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity used when the caller does not specify one on add-to-cart.
pub const DEFAULT_ADD_QUANTITY: i64 = 1;
