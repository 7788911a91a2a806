//! Restart behavior over the file-backed store.

use std::fs;

use tempfile::TempDir;
use vitrin_core::{Cart, ProductId};
use vitrin_storefront::commands::{cart, favorites};
use vitrin_storefront::state::{ConfigState, CART_KEY, FAVORITES_KEY};
use vitrin_storefront::Storefront;

fn add(session: &Storefront, id: u64, color: Option<&str>, qty: Option<i64>) {
    cart::add_to_cart(
        &*session.catalog,
        &session.cart,
        &session.config,
        ProductId(id),
        color.map(str::to_string),
        qty,
    )
    .unwrap();
}

fn config_for(dir: &TempDir, namespace: &str) -> ConfigState {
    ConfigState {
        data_dir: Some(dir.path().to_path_buf()),
        namespace: namespace.to_string(),
        ..ConfigState::default()
    }
}

#[test]
fn cart_and_favorites_survive_restart() {
    let dir = TempDir::new().unwrap();

    let before = {
        let session = Storefront::bootstrap(config_for(&dir, "default")).unwrap();

        add(&session, 3, Some("Mavi"), Some(2));
        add(&session, 3, Some("Beyaz"), None);
        add(&session, 5, None, None);
        cart::update_cart_item(
            &session.cart,
            &session.config,
            ProductId(3),
            Some("Mavi".to_string()),
            4,
        )
        .unwrap();

        favorites::toggle_favorite(&session.favorites, ProductId(8));
        favorites::toggle_favorite(&session.favorites, ProductId(1));

        session.cart.snapshot()
    };

    let session = Storefront::bootstrap(config_for(&dir, "default")).unwrap();

    assert_eq!(session.cart.snapshot(), before);
    assert_eq!(session.cart.badge_count(), 6);
    let order: Vec<(ProductId, Option<String>)> = session.cart.with_cart(|c| {
        c.items()
            .iter()
            .map(|i| (i.id(), i.selected_color().map(str::to_string)))
            .collect()
    });
    assert_eq!(
        order,
        vec![
            (ProductId(3), Some("Mavi".to_string())),
            (ProductId(3), Some("Beyaz".to_string())),
            (ProductId(5), None),
        ]
    );

    assert!(session.favorites.is_favorite(ProductId(8)));
    assert!(session.favorites.is_favorite(ProductId(1)));
    assert_eq!(session.favorites.snapshot().ids(), &[ProductId(8), ProductId(1)]);
}

#[test]
fn persisted_layout_is_flat_json() {
    let dir = TempDir::new().unwrap();
    let session = Storefront::bootstrap(config_for(&dir, "default")).unwrap();

    add(&session, 3, Some("Kırmızı"), Some(1));
    favorites::toggle_favorite(&session.favorites, ProductId(2));

    let ns = dir.path().join("default");
    let raw = fs::read_to_string(ns.join(format!("{}.json", CART_KEY))).unwrap();
    let items: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(items[0]["id"], 3);
    assert_eq!(items[0]["name"], "Basic T-Shirt");
    assert_eq!(items[0]["selectedColor"], "Kırmızı");
    assert_eq!(items[0]["quantity"], 1);

    let raw = fs::read_to_string(ns.join(format!("{}.json", FAVORITES_KEY))).unwrap();
    assert_eq!(raw, "[2]");
}

#[test]
fn corrupt_cart_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let ns = dir.path().join("default");
    fs::create_dir_all(&ns).unwrap();
    fs::write(ns.join("cartItems.json"), "{{ definitely not a cart").unwrap();
    fs::write(ns.join("favorites.json"), "[4, 4, 6]").unwrap();

    let session = Storefront::bootstrap(config_for(&dir, "default")).unwrap();

    assert_eq!(session.cart.snapshot(), Cart::new());
    assert_eq!(session.favorites.len(), 2);

    // The next mutation replaces the corrupt payload
    add(&session, 5, None, None);
    let raw = fs::read_to_string(ns.join("cartItems.json")).unwrap();
    let reloaded: Cart = serde_json::from_str(&raw).unwrap();
    assert_eq!(reloaded.badge_count(), 1);
}

#[test]
fn namespaces_are_isolated() {
    let dir = TempDir::new().unwrap();

    {
        let guest = Storefront::bootstrap(config_for(&dir, "guest")).unwrap();
        add(&guest, 1, None, Some(3));
    }

    let other = Storefront::bootstrap(config_for(&dir, "profile-2")).unwrap();
    assert_eq!(other.cart.badge_count(), 0);

    let guest = Storefront::bootstrap(config_for(&dir, "guest")).unwrap();
    assert_eq!(guest.cart.badge_count(), 3);
}
