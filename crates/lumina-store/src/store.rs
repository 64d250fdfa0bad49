//! # The Store
//!
//! The explicit application-state container: every storefront mutation in
//! one place, over one snapshot value.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  View event ──► one named operation ──► next snapshot ──► commit       │
//! │                                                              │          │
//! │                                          ┌───────────────────┤          │
//! │                                          ▼                   ▼          │
//! │                                   notify subscribers   best-effort     │
//! │                                   (observer pattern)    persist (save   │
//! │                                                         failure logged, │
//! │                                                         never raised)   │
//! │                                                                         │
//! │  Exactly one logical actor (the UI dispatch loop) calls mutations;     │
//! │  each runs to completion with no suspension point. No queue, no async  │
//! │  boundary, no cross-operation transaction.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Constructed once at application root (optionally hydrated from the
//! persisted blob), injected into views, torn down never. All mutation goes
//! through the named operations below; there is no other write path.

use tracing::{debug, warn};

use lumina_core::{
    Cart, CartTotals, Order, OrderStatus, Product, ShippingPolicy, User, UserPatch, UserRole,
};

use crate::persist::SnapshotPersister;
use crate::snapshot::AppSnapshot;

/// Handle returned by [`Store::subscribe`]; pass to [`Store::unsubscribe`].
pub type SubscriberId = u64;

type SubscriberFn = Box<dyn FnMut(&AppSnapshot)>;

// =============================================================================
// Demo Identity
// =============================================================================

/// The fixed mock identity installed by `login`.
///
/// There is no credential check anywhere: login replaces the user wholesale
/// with this identity carrying whatever email was typed, empty string
/// included.
fn demo_identity(email: String) -> User {
    User {
        id: "u1".to_string(),
        name: "Alex Johnson".to_string(),
        email,
        role: UserRole::Admin,
        image: Some(
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=facearea&facepad=2&w=256&h=256&q=80"
                .to_string(),
        ),
    }
}

// =============================================================================
// Store
// =============================================================================

/// The application-state container.
///
/// Owns the current [`AppSnapshot`], an ordered subscriber list, and an
/// optional persister driven as a post-commit hook.
pub struct Store {
    state: AppSnapshot,
    subscribers: Vec<(SubscriberId, SubscriberFn)>,
    next_subscriber: SubscriberId,
    persister: Option<Box<dyn SnapshotPersister>>,
}

impl Store {
    /// Creates a store with default (empty) state and no persistence.
    pub fn new() -> Self {
        Store {
            state: AppSnapshot::default(),
            subscribers: Vec::new(),
            next_subscriber: 0,
            persister: None,
        }
    }

    /// Creates a store backed by a persister, hydrating from it if a
    /// snapshot exists.
    ///
    /// ## Startup Semantics
    /// Load-if-present, else defaults. One shot: a load failure is logged
    /// and treated as "nothing persisted" - the store must come up either
    /// way.
    pub fn with_persister(persister: Box<dyn SnapshotPersister>) -> Self {
        let state = match persister.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => AppSnapshot::default(),
            Err(err) => {
                warn!(error = %err, "failed to load persisted snapshot, starting fresh");
                AppSnapshot::default()
            }
        };

        Store {
            state,
            subscribers: Vec::new(),
            next_subscriber: 0,
            persister: Some(persister),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &AppSnapshot {
        &self.state
    }

    /// Derived cart totals under a shipping policy. Never stored; always
    /// recomputed so no view can drift from the cart.
    pub fn cart_totals(&self, policy: &ShippingPolicy) -> CartTotals {
        self.state.cart.totals(policy)
    }

    // =========================================================================
    // Observer Contract
    // =========================================================================

    /// Registers a subscriber invoked with the new snapshot after every
    /// committed mutation.
    pub fn subscribe(&mut self, f: impl FnMut(&AppSnapshot) + 'static) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Removes a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Publishes the committed snapshot: notify every subscriber once, then
    /// attempt the durable write.
    ///
    /// The save is best-effort by contract - the in-memory transition has
    /// already succeeded, so a failed write is logged and swallowed.
    fn commit(&mut self) {
        let state = &self.state;
        for (_, f) in self.subscribers.iter_mut() {
            f(state);
        }

        if let Some(persister) = &self.persister {
            if let Err(err) = persister.save(state) {
                warn!(error = %err, "snapshot save failed; in-memory state is authoritative");
            }
        }
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    /// Signs in: replaces the user with the demo identity carrying `email`.
    ///
    /// No credential check, no failure path. The new identity is visible to
    /// every subsequent operation immediately.
    pub fn login(&mut self, email: impl Into<String>) {
        let email = email.into();
        debug!(email = %email, "login");
        self.state.user = Some(demo_identity(email));
        self.commit();
    }

    /// Signs out. Cart, wishlist, and the order ledger are untouched.
    pub fn logout(&mut self) {
        debug!("logout");
        self.state.user = None;
        self.commit();
    }

    /// Shallow-merges profile fields into the current user.
    ///
    /// Silently a no-op when nobody is signed in - not an error.
    pub fn update_profile(&mut self, patch: UserPatch) {
        debug!("update_profile");
        if let Some(user) = &mut self.state.user {
            user.apply(patch);
            self.commit();
        }
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds a product to the cart (increment-or-append).
    pub fn add_to_cart(&mut self, product: &Product) {
        debug!(product_id = %product.id, "add_to_cart");
        self.state.cart.add(product);
        self.commit();
    }

    /// Removes the cart line for a product id; no-op if absent.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        debug!(product_id = %product_id, "remove_from_cart");
        self.state.cart.remove(product_id);
        self.commit();
    }

    /// Sets a line's quantity. Negative input clamps to 0; 0 removes the
    /// line, leaving the same end state as [`Store::remove_from_cart`].
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        debug!(product_id = %product_id, quantity = %quantity, "update_quantity");
        self.state.cart.set_quantity(product_id, quantity);
        self.commit();
    }

    /// Empties the cart unconditionally.
    pub fn clear_cart(&mut self) {
        debug!("clear_cart");
        self.state.cart.clear();
        self.commit();
    }

    /// Flips the cart-drawer visibility flag. Cart contents are untouched.
    pub fn toggle_cart(&mut self) {
        self.state.is_cart_open = !self.state.is_cart_open;
        debug!(is_cart_open = %self.state.is_cart_open, "toggle_cart");
        self.commit();
    }

    // =========================================================================
    // Wishlist Operations
    // =========================================================================

    /// Toggles wishlist membership for a product.
    pub fn toggle_wishlist(&mut self, product: &Product) {
        let saved = self.state.wishlist.toggle(product);
        debug!(product_id = %product.id, saved = %saved, "toggle_wishlist");
        self.commit();
    }

    // =========================================================================
    // Order Operations
    // =========================================================================

    /// Places a fully-constructed order: prepends it to the ledger and
    /// clears the cart as one snapshot transition.
    ///
    /// ## Contract
    /// The caller (the checkout builder) has already resolved id, items,
    /// total, and address; the store validates nothing and cannot fail. No
    /// observer ever sees the order appended without the cart cleared, or
    /// vice versa: both land in the same commit.
    pub fn place_order(&mut self, order: Order) {
        debug!(order_id = %order.id, total = %order.total, "place_order");
        self.state.orders.insert(0, order);
        self.state.cart.clear();
        self.commit();
    }

    /// Looks up an order by id. A miss is `None`, not an error; what to do
    /// about it (redirect, message) is a view decision.
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.state.orders.iter().find(|o| o.id == order_id)
    }

    /// Administrative action: moves an order's status.
    ///
    /// The ONLY mutation the ledger permits after placement. Returns `false`
    /// on a miss; nothing is committed in that case.
    pub fn set_order_status(&mut self, order_id: &str, status: OrderStatus) -> bool {
        debug!(order_id = %order_id, status = ?status, "set_order_status");
        match self.state.orders.iter_mut().find(|o| o.id == order_id) {
            Some(order) => {
                order.status = status;
                self.commit();
                true
            }
            None => false,
        }
    }

    /// Read access to the current cart (for views and the checkout builder).
    pub fn cart(&self) -> &Cart {
        &self.state.cart
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
