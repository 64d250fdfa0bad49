//! # Cart
//!
//! The shopping cart: an ordered collection of product lines, each a frozen
//! product snapshot paired with a quantity.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Storefront Action        Store Operation         Cart Change           │
//! │  ─────────────────        ───────────────         ───────────           │
//! │                                                                         │
//! │  Click "Add to Cart" ───► add_to_cart() ────────► qty += 1 or append   │
//! │                                                                         │
//! │  Change Quantity ───────► update_quantity() ────► qty = max(0, n),     │
//! │                                                    0 removes the line   │
//! │                                                                         │
//! │  Click Remove ──────────► remove_from_cart() ───► line deleted         │
//! │                                                                         │
//! │  Place Order ───────────► place_order() ────────► cart emptied         │
//! │                                                                         │
//! │  Every operation is TOTAL: bad input is clamped, misses are no-ops.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id (adding the same product increments)
//! - Every stored line has quantity >= 1 (a line driven to 0 is removed)
//! - Line order is insertion order; new lines append at the end

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::ShippingPolicy;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// One cart entry: a product snapshot plus a quantity.
///
/// ## Snapshot Pattern
/// The product data is a frozen copy taken when the line was created, not a
/// reference into the catalog. The storefront wire shape treats a cart item
/// as "product fields plus quantity", hence the serde flatten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Frozen product data at time of adding.
    #[serde(flatten)]
    pub product: Product,

    /// Quantity in cart; >= 1 while the line exists.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line with quantity 1 from a catalog product.
    pub fn new(product: &Product) -> Self {
        CartLine {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Line total at the effective (sale-aware) price.
    pub fn line_total(&self) -> Money {
        self.product.effective_price().multiply_quantity(self.quantity)
    }

    /// Line saving against list price; zero when not on sale.
    pub fn line_savings(&self) -> Money {
        self.product.savings_per_unit().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Lines are only reachable through the named operations so the uniqueness
/// and quantity invariants cannot be broken from outside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by 1
    /// - Otherwise: a new line with quantity 1 appends at the end
    ///
    /// Existing line order is preserved either way.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine::new(product));
    }

    /// Removes the line for a product id. No-op if absent.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Sets the quantity of a line, clamping negative input to 0.
    ///
    /// ## Behavior
    /// - Clamped quantity 0: the line is removed (identical end state to
    ///   [`Cart::remove`])
    /// - Product not in cart: no-op
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        let quantity = quantity.max(0);
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up a line by product id.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines (the cart badge number).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Subtotal at effective prices.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total saving against list prices across on-sale lines.
    pub fn savings(&self) -> Money {
        self.lines.iter().map(CartLine::line_savings).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Full totals summary under a shipping policy.
    pub fn totals(&self, policy: &ShippingPolicy) -> CartTotals {
        let subtotal = self.subtotal();
        let shipping = policy.shipping_fee(subtotal);
        CartTotals {
            total_quantity: self.total_quantity(),
            subtotal,
            savings: self.savings(),
            shipping,
            total: subtotal + shipping,
        }
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived totals summary for checkout and cart views.
///
/// Never stored: always recomputed from the cart so the drawer, the cart
/// page, and the checkout summary cannot diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub total_quantity: i64,
    pub subtotal: Money,
    pub savings: Money,
    pub shipping: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            slug: format!("product-{}", id),
            description: String::new(),
            price: Money::from_cents(price_cents),
            sale_price: None,
            category: "electronics".to_string(),
            images: vec![format!("https://example.com/{}.jpg", id)],
            stock: 10,
            rating: 4.0,
            reviews_count: 5,
            is_featured: false,
        }
    }

    fn sale_product(id: &str, price_cents: i64, sale_cents: i64) -> Product {
        Product {
            sale_price: Some(Money::from_cents(sale_cents)),
            ..test_product(id, price_cents)
        }
    }

    #[test]
    fn test_add_new_line_starts_at_one() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line("1").unwrap().quantity, 1);
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::new();
        let p = test_product("1", 999);

        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.line_count(), 1); // Still one unique line
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().cents(), 1998);
    }

    #[test]
    fn test_add_preserves_line_order() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 100));
        cart.add(&test_product("2", 200));
        cart.add(&test_product("1", 100)); // increment, not reorder
        cart.add(&test_product("3", 300));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_uniqueness_invariant_under_add_sequences() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add(&test_product("a", 100));
        }
        for _ in 0..3 {
            cart.add(&test_product("b", 200));
        }

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.line("a").unwrap().quantity, 5);
        assert_eq!(cart.line("b").unwrap().quantity, 3);
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn test_remove_then_empty() {
        // Scenario: add twice, remove once
        let mut cart = Cart::new();
        let p = test_product("1", 999);
        cart.add(&p);
        cart.add(&p);
        assert_eq!(cart.line("1").unwrap().quantity, 2);

        cart.remove("1");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));
        cart.remove("nope");
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_zero_quantity_collapses_to_removal() {
        let mut cart_a = Cart::new();
        let mut cart_b = Cart::new();
        let p1 = test_product("1", 999);
        let p2 = test_product("2", 500);
        for cart in [&mut cart_a, &mut cart_b] {
            cart.add(&p1);
            cart.add(&p2);
        }

        cart_a.set_quantity("1", 0);
        cart_b.remove("1");

        assert_eq!(cart_a, cart_b);
    }

    #[test]
    fn test_negative_quantity_clamps_to_removal() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));
        cart.set_quantity("1", -4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_on_missing_line_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));
        cart.set_quantity("ghost", 7);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line("1").unwrap().quantity, 1);
    }

    #[test]
    fn test_subtotal_and_savings_with_sale_price() {
        // Scenario: price $100.00, sale $80.00, qty 2
        let mut cart = Cart::new();
        cart.add(&sale_product("1", 10_000, 8_000));
        cart.set_quantity("1", 2);

        assert_eq!(cart.subtotal().cents(), 16_000); // $160.00
        assert_eq!(cart.savings().cents(), 4_000); // $40.00
    }

    #[test]
    fn test_totals_below_threshold_pay_flat_fee() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 5_000)); // $50.00

        let totals = cart.totals(&ShippingPolicy::default());
        assert_eq!(totals.subtotal.cents(), 5_000);
        assert_eq!(totals.shipping.cents(), 1_500);
        assert_eq!(totals.total.cents(), 6_500);
    }

    #[test]
    fn test_totals_over_threshold_ship_free() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 15_001)); // one cent over

        let totals = cart.totals(&ShippingPolicy::default());
        assert_eq!(totals.shipping, Money::zero());
        assert_eq!(totals.total.cents(), 15_001);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));
        cart.add(&test_product("2", 500));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }
}
