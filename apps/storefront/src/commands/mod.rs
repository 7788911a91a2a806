//! # Storefront Commands
//!
//! The surface the presentation layer calls. Each command takes the state
//! it needs by reference, delegates the rules to `vitrin-core`, and returns
//! a serializable view or an [`ApiError`](crate::error::ApiError).
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Organization                                 │
//! │                                                                         │
//! │  catalog.rs                cart.rs                  favorites.rs        │
//! │  ─────────────             ───────────              ──────────────      │
//! │  • list_products           • get_cart               • toggle_favorite   │
//! │  • get_product             • add_to_cart            • get_favorites     │
//! │  • list_categories         • update_cart_item                           │
//! │  • list_category_products  • remove_from_cart       config.rs           │
//! │                            • clear_cart             ──────────          │
//! │                                                     • get_config        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod favorites;
