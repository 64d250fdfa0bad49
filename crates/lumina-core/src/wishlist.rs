//! # Wishlist
//!
//! Saved products with set semantics: a product id appears at most once, and
//! the only entry point is a strict toggle. Calling toggle twice with the
//! same product always returns the wishlist to its prior membership.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// The saved-products set.
///
/// Entries are frozen product copies in insertion order. As with the cart,
/// the field is private so membership can only change through the toggle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    products: Vec<Product>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist {
            products: Vec::new(),
        }
    }

    /// Toggles membership for a product.
    ///
    /// ## Behavior
    /// - Product id present: the entry is removed
    /// - Otherwise: a frozen copy appends at the end
    ///
    /// ## Returns
    /// `true` if the product is in the wishlist after the call.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            self.products.retain(|p| p.id != product.id);
            false
        } else {
            self.products.push(product.clone());
            true
        }
    }

    /// Checks membership by product id.
    pub fn contains(&self, product_id: &str) -> bool {
        self.products.iter().any(|p| p.id == product_id)
    }

    /// Saved products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn test_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            slug: format!("product-{}", id),
            description: String::new(),
            price: Money::from_cents(999),
            sale_price: None,
            category: "accessories".to_string(),
            images: vec![],
            stock: 3,
            rating: 4.0,
            reviews_count: 1,
            is_featured: false,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();
        let p = test_product("1");

        assert!(wishlist.toggle(&p));
        assert!(wishlist.contains("1"));

        assert!(!wishlist.toggle(&p));
        assert!(!wishlist.contains("1"));
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&test_product("a"));
        wishlist.toggle(&test_product("b"));
        let before = wishlist.clone();

        let p = test_product("c");
        wishlist.toggle(&p);
        wishlist.toggle(&p);

        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_no_duplicate_entries() {
        let mut wishlist = Wishlist::new();
        let p = test_product("1");
        wishlist.toggle(&p);
        wishlist.toggle(&p);
        wishlist.toggle(&p); // present again after odd count

        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&test_product("1"));
        wishlist.toggle(&test_product("2"));
        wishlist.toggle(&test_product("3"));
        wishlist.toggle(&test_product("2")); // remove the middle one

        let ids: Vec<&str> = wishlist.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
