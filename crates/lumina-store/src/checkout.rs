//! # Checkout
//!
//! Builds the `Order` value that `Store::place_order` appends to the ledger.
//!
//! ## Division of Labor
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  Shipping form ──► build_order() ───────────► Store::place_order()     │
//! │                    │                          │                         │
//! │                    ├── validate address       ├── prepend to ledger    │
//! │                    ├── refuse empty cart      └── clear cart           │
//! │                    ├── generate LUM- id           (atomic pair)        │
//! │                    ├── snapshot cart lines                             │
//! │                    └── fix the total                                   │
//! │                                                                         │
//! │  All failure lives HERE, before any mutation. Once an Order exists,    │
//! │  placing it cannot fail.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no payment gateway: the payment method is an opaque label and
//! "processing" is storefront theater.

use chrono::Utc;
use uuid::Uuid;

use lumina_core::validation::{validate_address, validate_checkout_cart, validate_required};
use lumina_core::{
    Address, Cart, Order, OrderStatus, ShippingPolicy, User, ValidationResult, GUEST_USER_ID,
};

/// Checkout form input: where to ship and how the buyer "paid".
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub shipping_address: Address,
    /// Opaque label, e.g. "Stripe Credit Card".
    pub payment_method: String,
}

/// Generates an order id: `LUM-` plus six characters of a fresh UUID.
fn generate_order_id() -> String {
    let raw = Uuid::new_v4().simple().to_string();
    // Six hex chars is plenty for a client-side ledger
    format!("LUM-{}", raw[..6].to_uppercase())
}

/// Builds a well-formed order from the current cart.
///
/// ## Behavior
/// - Validates the request (all address fields, non-empty payment label,
///   non-empty cart) BEFORE constructing anything
/// - Items are cloned cart lines, independent of later cart mutations
/// - Total = subtotal + shipping under `policy`, fixed here forever
/// - Owner is the signed-in user's id, or `"guest"`
/// - Status starts at Processing
///
/// The returned order is exactly what [`crate::Store::place_order`] expects.
pub fn build_order(
    user: Option<&User>,
    cart: &Cart,
    policy: &ShippingPolicy,
    request: CheckoutRequest,
) -> ValidationResult<Order> {
    validate_checkout_cart(cart)?;
    validate_address(&request.shipping_address)?;
    validate_required("paymentMethod", &request.payment_method)?;

    let totals = cart.totals(policy);

    Ok(Order {
        id: generate_order_id(),
        user_id: user
            .map(|u| u.id.clone())
            .unwrap_or_else(|| GUEST_USER_ID.to_string()),
        items: cart.lines().to_vec(),
        total: totals.total,
        status: OrderStatus::Processing,
        created_at: Utc::now(),
        payment_method: request.payment_method,
        shipping_address: request.shipping_address,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_core::{Money, Product, UserRole, ValidationError};

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            slug: format!("product-{}", id),
            description: String::new(),
            price: Money::from_cents(price_cents),
            sale_price: None,
            category: "fashion".to_string(),
            images: vec![],
            stock: 10,
            rating: 4.0,
            reviews_count: 12,
            is_featured: false,
        }
    }

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            shipping_address: Address {
                full_name: "Test User".to_string(),
                street: "123 Fake Street".to_string(),
                city: "Anytown".to_string(),
                zip_code: "12345".to_string(),
                country: "United States".to_string(),
            },
            payment_method: "Stripe Credit Card".to_string(),
        }
    }

    #[test]
    fn test_empty_cart_is_refused() {
        let cart = Cart::new();
        let err = build_order(None, &cart, &ShippingPolicy::default(), request()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyCart);
    }

    #[test]
    fn test_missing_address_field_is_refused() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));

        let mut req = request();
        req.shipping_address.city = String::new();

        let err = build_order(None, &cart, &ShippingPolicy::default(), req).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "city".to_string()
            }
        );
    }

    #[test]
    fn test_guest_checkout_gets_sentinel_owner() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));

        let order = build_order(None, &cart, &ShippingPolicy::default(), request()).unwrap();
        assert_eq!(order.user_id, GUEST_USER_ID);
    }

    #[test]
    fn test_signed_in_checkout_uses_user_id() {
        let user = User {
            id: "u1".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
            role: UserRole::User,
            image: None,
        };
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));

        let order = build_order(Some(&user), &cart, &ShippingPolicy::default(), request()).unwrap();
        assert_eq!(order.user_id, "u1");
    }

    #[test]
    fn test_total_includes_shipping_below_threshold() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 5_000)); // $50.00 subtotal

        let order = build_order(None, &cart, &ShippingPolicy::default(), request()).unwrap();
        assert_eq!(order.total.cents(), 6_500); // + $15.00 flat fee
        assert_eq!(order.status, OrderStatus::Processing);
    }

    #[test]
    fn test_items_are_a_snapshot_independent_of_the_cart() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));

        let order = build_order(None, &cart, &ShippingPolicy::default(), request()).unwrap();

        // Later cart mutations must not reach into the placed order
        cart.set_quantity("1", 5);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 1);
    }

    #[test]
    fn test_order_id_shape() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));

        let order = build_order(None, &cart, &ShippingPolicy::default(), request()).unwrap();
        assert!(order.id.starts_with("LUM-"));
        assert_eq!(order.id.len(), 10);
    }
}
