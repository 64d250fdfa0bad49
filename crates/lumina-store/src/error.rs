//! # Store Errors
//!
//! Error type for the state layer. Note how little reaches it: store
//! mutations are total by contract, so `StoreError` only surfaces from the
//! persistence boundary (when a caller drives the persister directly) and
//! from checkout input validation.

use thiserror::Error;

use lumina_core::ValidationError;

/// Errors from the state layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot blob failed.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot blob could not be (de)serialized.
    #[error("snapshot serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    /// Checkout input was rejected before any mutation ran.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_to_store_error() {
        let validation_err = ValidationError::EmptyCart;
        let store_err: StoreError = validation_err.into();
        assert!(matches!(store_err, StoreError::Validation(_)));
    }

    #[test]
    fn test_io_error_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only disk");
        let err = StoreError::from(io);
        assert!(err.to_string().contains("read-only disk"));
    }
}
