//! # Validation Module
//!
//! Checkout input validation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront form (TypeScript)                                 │
//! │  ├── required attributes on the shipping form inputs                   │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Checkout builder (Rust)                                      │
//! │  └── THIS MODULE: address fields present, cart non-empty               │
//! │                                                                         │
//! │  The store itself validates NOTHING: by the time place_order runs,     │
//! │  the order value is well-formed and the mutation cannot fail.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::cart::Cart;
use crate::error::{ValidationError, ValidationResult};
use crate::types::Address;

/// Upper bound on any single address field.
const MAX_FIELD_LEN: usize = 200;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required string field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use lumina_core::validation::validate_required;
///
/// assert!(validate_required("fullName", "Alex Johnson").is_ok());
/// assert!(validate_required("fullName", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_FIELD_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Checkout Validators
// =============================================================================

/// Validates a shipping address: all five fields are required strings.
///
/// Field names in errors use the wire spelling (`fullName`, `zipCode`) so
/// the storefront can map them straight onto form inputs.
pub fn validate_address(address: &Address) -> ValidationResult<()> {
    validate_required("fullName", &address.full_name)?;
    validate_required("street", &address.street)?;
    validate_required("city", &address.city)?;
    validate_required("zipCode", &address.zip_code)?;
    validate_required("country", &address.country)?;
    Ok(())
}

/// Validates that a cart is eligible for checkout.
///
/// ## Rules
/// - Must contain at least one line
pub fn validate_checkout_cart(cart: &Cart) -> ValidationResult<()> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Product;

    fn address() -> Address {
        Address {
            full_name: "Test User".to_string(),
            street: "123 Fake Street".to_string(),
            city: "Anytown".to_string(),
            zip_code: "12345".to_string(),
            country: "United States".to_string(),
        }
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("city", "Anytown").is_ok());
        assert!(validate_required("city", "").is_err());
        assert!(validate_required("city", "   ").is_err());
        assert!(validate_required("city", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_address_ok() {
        assert!(validate_address(&address()).is_ok());
    }

    #[test]
    fn test_validate_address_reports_wire_field_names() {
        let mut addr = address();
        addr.zip_code = String::new();

        let err = validate_address(&addr).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "zipCode".to_string()
            }
        );
    }

    #[test]
    fn test_validate_checkout_cart() {
        let mut cart = Cart::new();
        assert_eq!(
            validate_checkout_cart(&cart).unwrap_err(),
            ValidationError::EmptyCart
        );

        cart.add(&Product {
            id: "1".to_string(),
            name: "Thing".to_string(),
            slug: "thing".to_string(),
            description: String::new(),
            price: Money::from_cents(100),
            sale_price: None,
            category: "food".to_string(),
            images: vec![],
            stock: 1,
            rating: 5.0,
            reviews_count: 0,
            is_featured: false,
        });
        assert!(validate_checkout_cart(&cart).is_ok());
    }
}
