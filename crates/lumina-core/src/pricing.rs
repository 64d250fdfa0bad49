//! # Pricing Rules
//!
//! Shipping policy and the price rules shared by the cart, checkout, and
//! catalog sorting.
//!
//! ## One Comparator, One Branch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The storefront shows prices in (at least) five places:                │
//! │    cart drawer, cart page, checkout summary, product card, admin list  │
//! │                                                                         │
//! │  Each needs "sale price if present, else list price" and most need    │
//! │  "free shipping strictly over the threshold". Both rules live ONCE:   │
//! │                                                                         │
//! │    Product::effective_price()        (types.rs)                       │
//! │    ShippingPolicy::shipping_fee()    (this file)                      │
//! │                                                                         │
//! │  Views consume the results; none reimplement the branch.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{FLAT_SHIPPING_FEE_CENTS, FREE_SHIPPING_THRESHOLD_CENTS};

/// Shipping configuration: a free-shipping threshold and a flat fee below it.
///
/// Configuration, not state: the policy is owned by the application root and
/// passed into totals calculations; it is never part of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPolicy {
    /// Subtotals strictly greater than this ship free.
    pub free_threshold: Money,

    /// Flat fee charged at or below the threshold.
    pub flat_fee: Money,
}

impl ShippingPolicy {
    /// Shipping fee for a given cart subtotal.
    ///
    /// The comparison is strict `>`: a subtotal of exactly the threshold
    /// still pays the flat fee. An empty cart's zero subtotal also pays it;
    /// checkout refuses empty carts before this matters.
    pub fn shipping_fee(&self, subtotal: Money) -> Money {
        if subtotal > self.free_threshold {
            Money::zero()
        } else {
            self.flat_fee
        }
    }
}

impl Default for ShippingPolicy {
    /// $15.00 flat, free strictly over $150.00.
    fn default() -> Self {
        ShippingPolicy {
            free_threshold: Money::from_cents(FREE_SHIPPING_THRESHOLD_CENTS),
            flat_fee: Money::from_cents(FLAT_SHIPPING_FEE_CENTS),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
