//! # Demo Session
//!
//! A scripted walkthrough of the store operations against the demo catalog,
//! with persistence to a temp-style local file.
//!
//! ## Usage
//! ```bash
//! cargo run -p lumina-store --bin demo
//!
//! # With verbose store logging
//! RUST_LOG=debug cargo run -p lumina-store --bin demo
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use lumina_core::ShippingPolicy;
use lumina_store::{build_order, Catalog, CheckoutRequest, JsonFileStore, Store};

fn main() {
    // Default INFO, override with RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let catalog = Catalog::demo();
    let policy = ShippingPolicy::default();

    let mut store = match JsonFileStore::at_default_location() {
        Some(persister) => {
            info!(path = %persister.path().display(), "persisting snapshots");
            Store::with_persister(Box::new(persister))
        }
        None => {
            info!("no data directory available, running in-memory only");
            Store::new()
        }
    };

    store.subscribe(|snap| {
        info!(
            cart_lines = snap.cart.line_count(),
            orders = snap.orders.len(),
            wishlist = snap.wishlist.len(),
            "snapshot published"
        );
    });

    store.login("alex@example.com");

    // Browse and fill the cart
    let headphones = catalog.product("1").expect("demo catalog has product 1");
    let beans = catalog.product("13").expect("demo catalog has product 13");
    store.add_to_cart(headphones);
    store.add_to_cart(headphones);
    store.add_to_cart(beans);
    store.toggle_wishlist(catalog.product("10").expect("demo catalog has product 10"));

    let totals = store.cart_totals(&policy);
    info!(
        subtotal = %totals.subtotal,
        savings = %totals.savings,
        shipping = %totals.shipping,
        total = %totals.total,
        "cart totals"
    );

    // Check out
    let request = CheckoutRequest {
        shipping_address: lumina_core::Address {
            full_name: "Alex Johnson".to_string(),
            street: "123 Main Street".to_string(),
            city: "Springfield".to_string(),
            zip_code: "12345".to_string(),
            country: "United States".to_string(),
        },
        payment_method: "Stripe Credit Card".to_string(),
    };

    match build_order(store.snapshot().user.as_ref(), store.cart(), &policy, request) {
        Ok(order) => {
            info!(order_id = %order.id, total = %order.total, "placing order");
            store.place_order(order);
        }
        Err(err) => {
            info!(error = %err, "checkout rejected");
        }
    }

    info!(
        orders = store.snapshot().orders.len(),
        cart_empty = store.cart().is_empty(),
        "session complete"
    );
}
