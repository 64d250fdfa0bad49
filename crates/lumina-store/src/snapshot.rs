//! # Application Snapshot
//!
//! The single root of truth: session + cart + wishlist + order ledger +
//! the cart-drawer flag, as one value.
//!
//! ## Atomicity Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every store mutation builds the next snapshot and publishes it as     │
//! │  one replacement. A subscriber observes either the pre-mutation or    │
//! │  the post-mutation snapshot, never partial state. This is what makes  │
//! │  place_order's "prepend order AND clear cart" pair atomic: both land  │
//! │  in the same replacement.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use lumina_core::{Cart, Order, User, Wishlist};

/// The complete application state at a point in time.
///
/// `is_cart_open` is pure UI visibility: it participates in snapshots (so
/// views re-render off it) but is skipped by serde, so it is never persisted
/// and every process start begins with the drawer closed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    /// Signed-in identity, if any.
    pub user: Option<User>,

    /// Current cart contents.
    pub cart: Cart,

    /// Placed orders, newest first.
    pub orders: Vec<Order>,

    /// Saved products.
    pub wishlist: Wishlist,

    /// Whether the cart drawer is open. UI-only, not persisted.
    #[serde(skip)]
    pub is_cart_open: bool,
}
