//! # Domain Types
//!
//! Core domain types used throughout the Lumina storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id ("LUM-..")  │   │  id             │       │
//! │  │  slug           │   │  status         │   │  email          │       │
//! │  │  price          │   │  total          │   │  role           │       │
//! │  │  sale_price?    │   │  items snapshot │   │  image?         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderStatus   │   │    UserRole     │   │    Address      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Pending        │   │  Admin          │   │  full_name      │       │
//! │  │  Processing     │   │  User           │   │  street, city   │       │
//! │  │  Shipped        │   └─────────────────┘   │  zip, country   │       │
//! │  │  Delivered      │                         └─────────────────┘       │
//! │  │  Cancelled      │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serde Conventions
//! Wire-facing structs rename to camelCase so the persisted snapshot and the
//! generated TypeScript bindings match the storefront's field names
//! (`salePrice`, `reviewsCount`, `zipCode`, ...). Status and role enums are
//! SCREAMING_SNAKE_CASE on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::Money;

// =============================================================================
// User
// =============================================================================

/// Role attached to a signed-in user. Admin screens branch on this; the
/// store itself never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    User,
}

/// The signed-in identity, or rather the mock of one.
///
/// ## No Credentials
/// Login replaces this wholesale with a fixed demo identity carrying the
/// given email; there is no password, no session token, no backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Avatar URI, if any.
    pub image: Option<String>,
}

/// A partial user update applied by `update_profile`.
///
/// Present fields overwrite; absent fields are left alone (shallow merge).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub image: Option<String>,
}

impl User {
    /// Shallow-merges a patch into this user.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
    }
}

// =============================================================================
// Catalog Types
// =============================================================================

/// A top-level catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// URL-safe identifier; products reference categories by this slug.
    pub slug: String,
    pub image: String,
}

/// A product in the catalog.
///
/// Immutable by contract: the catalog is a read-only collaborator and the
/// store never writes back to it. Cart lines and wishlist entries carry
/// frozen copies, never references into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// URL-safe identifier, unique across the catalog.
    pub slug: String,

    /// Long-form description for the product page.
    pub description: String,

    /// List price in cents; always positive.
    pub price: Money,

    /// Sale price in cents, if the product is on sale.
    ///
    /// Expected to be below `price`; the catalog does not enforce this, so
    /// savings math floors at zero (see [`Money::saturating_sub`]).
    pub sale_price: Option<Money>,

    /// Category slug into the fixed category set.
    pub category: String,

    /// Ordered image URIs; the first is the primary image.
    pub images: Vec<String>,

    /// Units on hand.
    pub stock: i64,

    /// Average review rating, 0.0 - 5.0.
    pub rating: f64,

    /// Number of reviews behind the rating.
    pub reviews_count: i64,

    /// Whether the product appears in the home-page featured rail.
    pub is_featured: bool,
}

impl Product {
    /// The price a buyer actually pays: sale price if present, else list.
    ///
    /// This is the ONE place the `salePrice ?? price` branch lives. Cart
    /// subtotals, checkout totals, and catalog price sorting all go through
    /// here; do not reimplement the fallback at call sites.
    #[inline]
    pub fn effective_price(&self) -> Money {
        self.sale_price.unwrap_or(self.price)
    }

    /// Whether a sale price is set.
    #[inline]
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Per-unit saving against the list price, floored at zero.
    pub fn savings_per_unit(&self) -> Money {
        match self.sale_price {
            Some(sale) => self.price.saturating_sub(sale),
            None => Money::zero(),
        }
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Lifecycle of a placed order.
///
/// Orders are created as Processing by checkout; status only moves via the
/// administrative `set_order_status` action afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// A shipping address. All fields are required strings; the checkout builder
/// validates them before an order is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// A placed order.
///
/// ## Ledger Semantics
/// Orders are append-only once placed. `items` is a snapshot of the cart
/// lines at placement time and `total` is fixed then; later cart mutations
/// and catalog changes never reach back into an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Generated at placement, `LUM-` prefixed.
    pub id: String,

    /// Owner's user id, or `"guest"` for guest checkout.
    pub user_id: String,

    /// Cart lines frozen at placement time.
    pub items: Vec<CartLine>,

    /// Grand total (subtotal + shipping) fixed at placement.
    pub total: Money,

    pub status: OrderStatus,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Opaque payment label, e.g. "Stripe Credit Card". No gateway exists.
    pub payment_method: String,

    pub shipping_address: Address,
}

// =============================================================================
// Unit Tests
// =============================================================================
