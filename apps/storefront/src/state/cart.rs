//! # Cart State
//!
//! Owns the session's cart and writes every change through to the store.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//!
//! The lock is held across mutate-then-persist, so two intents never
//! interleave and the stored value always matches some committed state.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action                Command                 Cart State Change     │
//! │  ─────────                ───────                 ─────────────────     │
//! │                                                                         │
//! │  "Sepete Ekle" ──────────► add_to_cart() ───────► merge or append      │
//! │                                                    + toast              │
//! │  Change Quantity ────────► update_cart_item() ──► items[i].qty = n     │
//! │                                                    (n = 0 removes)      │
//! │  Click Remove ───────────► remove_from_cart() ──► items.remove(i)      │
//! │                                                                         │
//! │  Empty Cart ─────────────► clear_cart() ────────► items.clear()        │
//! │                                                                         │
//! │  Every change ──────────────────────────────────► store["cartItems"]   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;
use vitrin_core::{AddOutcome, Cart, CoreResult, Money, Product, ProductId, QuantityChange};
use vitrin_store::PersistentStore;

use crate::notify::{Notification, Notifier};

/// Store key holding the serialized cart.
pub const CART_KEY: &str = "cartItems";

/// Session cart state.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    store: PersistentStore,
    notifier: Arc<dyn Notifier>,
    added_message: String,
}

impl CartState {
    /// Restores the cart from `store`. A missing or unreadable value
    /// yields an empty cart.
    pub fn load(
        store: PersistentStore,
        notifier: Arc<dyn Notifier>,
        added_message: impl Into<String>,
    ) -> Self {
        let cart: Cart = store.read_or_default(CART_KEY);
        debug!(lines = cart.line_count(), badge = cart.badge_count(), "Cart restored");

        CartState {
            cart: Arc::new(Mutex::new(cart)),
            store,
            notifier,
            added_message: added_message.into(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, cart: &Cart) -> bool {
        self.store.write(CART_KEY, cart)
    }

    /// Adds `quantity` of `product` (keyed by id and selected color).
    ///
    /// Emits exactly one success notification when the add is accepted.
    /// A rejected add leaves the cart untouched and emits nothing.
    pub fn add_to_cart(&self, product: &Product, quantity: i64) -> CoreResult<AddOutcome> {
        let outcome = {
            let mut cart = self.lock();
            let outcome = cart.add(product, quantity)?;
            self.persist(&cart);
            outcome
        };

        debug!(
            product_id = %product.id,
            color = ?product.selected_color,
            quantity,
            ?outcome,
            "Added to cart"
        );
        self.notifier
            .notify(Notification::success(self.added_message.clone()));
        Ok(outcome)
    }

    /// Removes the line for `(id, selected_color)`. Returns whether a line
    /// was removed; an absent line is not an error.
    pub fn remove_from_cart(&self, id: ProductId, selected_color: Option<&str>) -> bool {
        let mut cart = self.lock();
        let removed = cart.remove(id, selected_color);
        if removed {
            self.persist(&cart);
            debug!(product_id = %id, color = ?selected_color, "Removed from cart");
        }
        removed
    }

    /// Sets the quantity of an existing line; `0` removes it.
    pub fn update_quantity(
        &self,
        id: ProductId,
        selected_color: Option<&str>,
        quantity: i64,
    ) -> CoreResult<QuantityChange> {
        let mut cart = self.lock();
        let change = cart.update_quantity(id, selected_color, quantity)?;
        if change != QuantityChange::Unchanged {
            self.persist(&cart);
        }
        debug!(
            product_id = %id,
            color = ?selected_color,
            quantity,
            ?change,
            "Cart quantity updated"
        );
        Ok(change)
    }

    /// Empties the cart.
    pub fn clear_cart(&self) {
        let mut cart = self.lock();
        cart.clear();
        self.persist(&cart);
        debug!("Cart cleared");
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let response = cart_state.with_cart(|cart| CartResponse::build(cart, &config));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    /// Sum of quantities (navbar badge).
    pub fn badge_count(&self) -> u64 {
        self.lock().badge_count()
    }

    pub fn line_count(&self) -> usize {
        self.lock().line_count()
    }

    pub fn subtotal(&self) -> Money {
        self.lock().subtotal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationQueue;
    use vitrin_core::CoreError;
    use vitrin_store::{KvBackend, MemoryBackend, StoreConfig};

    fn shirt(color: &str) -> Product {
        Product::new(ProductId(1), "Basic T-Shirt", Money::from_minor(29_990))
            .with_selected_color(color)
    }

    fn mug() -> Product {
        Product::new(ProductId(2), "Kupa", Money::from_minor(9_950))
    }

    fn setup() -> (CartState, PersistentStore, Arc<NotificationQueue>) {
        let store = PersistentStore::open(&StoreConfig::in_memory()).unwrap();
        let queue = Arc::new(NotificationQueue::new());
        let state = CartState::load(store.clone(), queue.clone(), "Ürün sepete eklendi!");
        (state, store, queue)
    }

    fn quantities(state: &CartState) -> Vec<(u64, Option<String>, u32)> {
        state.with_cart(|cart| {
            cart.items()
                .iter()
                .map(|i| (i.id().0, i.selected_color().map(str::to_string), i.quantity))
                .collect()
        })
    }

    #[test]
    fn test_add_merge_update_walkthrough() {
        let (state, _, _) = setup();

        state.add_to_cart(&shirt("red"), 1).unwrap();
        assert_eq!(quantities(&state), vec![(1, Some("red".into()), 1)]);

        state.add_to_cart(&shirt("red"), 2).unwrap();
        assert_eq!(quantities(&state), vec![(1, Some("red".into()), 3)]);

        state.add_to_cart(&shirt("blue"), 1).unwrap();
        assert_eq!(
            quantities(&state),
            vec![(1, Some("red".into()), 3), (1, Some("blue".into()), 1)]
        );

        state.update_quantity(ProductId(1), Some("red"), 0).unwrap();
        assert_eq!(quantities(&state), vec![(1, Some("blue".into()), 1)]);
    }

    #[test]
    fn test_every_change_is_written_through() {
        let (state, store, _) = setup();

        state.add_to_cart(&shirt("red"), 2).unwrap();
        state.add_to_cart(&mug(), 1).unwrap();
        let stored: Cart = store.read_or_default(CART_KEY);
        assert_eq!(stored, state.snapshot());

        state.update_quantity(ProductId(2), None, 5).unwrap();
        let stored: Cart = store.read_or_default(CART_KEY);
        assert_eq!(stored.badge_count(), 7);

        state.remove_from_cart(ProductId(1), Some("red"));
        let stored: Cart = store.read_or_default(CART_KEY);
        assert_eq!(stored.line_count(), 1);

        state.clear_cart();
        let stored: Cart = store.read_or_default(CART_KEY);
        assert!(stored.is_empty());
    }

    #[test]
    fn test_one_notification_per_accepted_add() {
        let (state, _, queue) = setup();

        state.add_to_cart(&mug(), 1).unwrap();
        state.add_to_cart(&mug(), 1).unwrap();
        assert_eq!(queue.len(), 2);

        let err = state.add_to_cart(&mug(), 0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity { requested: 0 }));
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert!(drained.iter().all(|n| n.message == "Ürün sepete eklendi!"));
    }

    #[test]
    fn test_rejected_update_leaves_cart_untouched() {
        let (state, _, _) = setup();
        state.add_to_cart(&mug(), 3).unwrap();

        assert!(state.update_quantity(ProductId(2), None, -1).is_err());
        assert_eq!(state.badge_count(), 3);

        // Unknown line is a no-op
        let change = state.update_quantity(ProductId(99), None, 4).unwrap();
        assert_eq!(change, QuantityChange::Unchanged);
        assert!(!state.remove_from_cart(ProductId(99), None));
    }

    #[test]
    fn test_quota_rejected_write_keeps_memory_state() {
        let backend = Arc::new(MemoryBackend::new(Some(4)));
        let store = PersistentStore::with_backend("default", backend.clone());
        let state = CartState::load(store, Arc::new(NotificationQueue::new()), "ok");

        state.add_to_cart(&mug(), 2).unwrap();

        assert_eq!(state.badge_count(), 2);
        assert_eq!(backend.get(CART_KEY).unwrap(), None);
    }

    #[test]
    fn test_load_restores_and_totals() {
        let (state, store, _) = setup();
        state.add_to_cart(&shirt("red"), 2).unwrap();
        state.add_to_cart(&mug(), 1).unwrap();

        let reloaded = CartState::load(store, Arc::new(NotificationQueue::new()), "ok");

        assert_eq!(reloaded.snapshot(), state.snapshot());
        assert_eq!(reloaded.line_count(), 2);
        assert_eq!(reloaded.badge_count(), 3);
        assert_eq!(reloaded.subtotal(), Money::from_minor(2 * 29_990 + 9_950));
    }

    #[test]
    fn test_corrupt_payload_loads_empty() {
        let backend = Arc::new(MemoryBackend::new(None));
        backend.put(CART_KEY, "[{\"id\": \"oops\"").unwrap();
        let store = PersistentStore::with_backend("default", backend);

        let state = CartState::load(store, Arc::new(NotificationQueue::new()), "ok");

        assert!(state.snapshot().is_empty());
    }
}
