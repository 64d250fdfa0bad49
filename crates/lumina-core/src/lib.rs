//! # lumina-core: Pure Domain Logic for the Lumina Storefront
//!
//! This crate is the **heart** of the Lumina storefront. It contains all
//! domain logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Lumina Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront Views (TypeScript)                  │   │
//! │  │    Home ──► Product ──► Cart Drawer ──► Checkout ──► Account    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshot + operations                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   lumina-store (state container)                │   │
//! │  │    login, add_to_cart, toggle_wishlist, place_order, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lumina-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ Shipping  │  │   │
//! │  │   │   Order   │  │  (cents)  │  │ CartLine  │  │  Policy   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, User, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart container and its derived totals
//! - [`wishlist`] - Saved-products set with toggle semantics
//! - [`pricing`] - Effective price and shipping fee rules
//! - [`validation`] - Checkout input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system, network, persistence access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Operations**: Cart and wishlist mutations never fail; bad quantity
//!    input is clamped, not rejected
//!
//! ## Example Usage
//!
//! ```rust
//! use lumina_core::money::Money;
//! use lumina_core::pricing::ShippingPolicy;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(16_000); // $160.00
//!
//! // Orders strictly over the threshold ship free
//! let policy = ShippingPolicy::default();
//! assert_eq!(policy.shipping_fee(subtotal), Money::zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lumina_core::Money` instead of
// `use lumina_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use pricing::ShippingPolicy;
pub use types::*;
pub use wishlist::Wishlist;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Owner recorded on orders placed without a signed-in user.
///
/// ## Why a constant?
/// Checkout is allowed as a guest; the ledger still needs an owner value so
/// account views can partition orders without a null check.
pub const GUEST_USER_ID: &str = "guest";

/// Free-shipping threshold in cents ($150.00).
///
/// ## Business Rule
/// A cart subtotal strictly greater than this ships free. The comparison is
/// strict: a subtotal of exactly $150.00 still pays the flat fee.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 15_000;

/// Flat shipping fee in cents ($15.00) applied below the free threshold.
pub const FLAT_SHIPPING_FEE_CENTS: i64 = 1_500;
