//! # Error Types
//!
//! Domain-specific error types for lumina-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lumina-core errors (this file)                                        │
//! │  └── ValidationError  - Checkout input validation failures             │
//! │                                                                         │
//! │  lumina-store errors (separate crate)                                  │
//! │  └── StoreError       - Persistence failures, wrapped validation       │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → caller                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String
//!
//! ## Why so few variants?
//! The store's mutations are total by contract: bad quantities are clamped,
//! operations on an absent user are silent no-ops, and a ledger lookup miss
//! is an `Option`, not an error. The only genuine failure surface in the
//! domain layer is checkout input.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised by the checkout builder.
///
/// These occur before any store mutation; a snapshot is never left in a
/// partially-checked-out state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Checkout was attempted with an empty cart.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "fullName".to_string(),
        };
        assert_eq!(err.to_string(), "fullName is required");

        let err = ValidationError::TooLong {
            field: "city".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "city must be at most 100 characters");

        assert_eq!(
            ValidationError::EmptyCart.to_string(),
            "cannot place an order with an empty cart"
        );
    }
}
