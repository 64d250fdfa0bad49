//! # lumina-store: State Container for the Lumina Storefront
//!
//! The application-state layer: one snapshot-valued container with named
//! mutations, an observer contract, best-effort JSON persistence, and the
//! read-only catalog + checkout collaborators around it.
//!
//! ## Module Organization
//! ```text
//! lumina_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── snapshot.rs     ◄─── AppSnapshot root value
//! ├── store.rs        ◄─── The state container and its operations
//! ├── persist.rs      ◄─── SnapshotPersister trait + JSON file impl
//! ├── catalog.rs      ◄─── Read-only catalog with demo seed data
//! ├── checkout.rs     ◄─── Order builder
//! ├── error.rs        ◄─── StoreError
//! └── bin/demo.rs     ◄─── Scripted walkthrough binary
//! ```
//!
//! ## Example
//! ```rust
//! use lumina_store::{Catalog, Store};
//! use lumina_core::ShippingPolicy;
//!
//! let catalog = Catalog::demo();
//! let mut store = Store::new();
//!
//! store.login("alex@example.com");
//! if let Some(product) = catalog.product("1") {
//!     store.add_to_cart(product);
//! }
//!
//! let totals = store.cart_totals(&ShippingPolicy::default());
//! assert_eq!(totals.total_quantity, 1);
//! ```

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod persist;
pub mod snapshot;
pub mod store;

pub use catalog::{Catalog, CatalogSort};
pub use checkout::{build_order, CheckoutRequest};
pub use error::{StoreError, StoreResult};
pub use persist::{JsonFileStore, SnapshotPersister};
pub use snapshot::AppSnapshot;
pub use store::{Store, SubscriberId};
