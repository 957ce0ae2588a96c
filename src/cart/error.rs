//! Cart error types.
//!
//! The core cart operations are infallible (absence on removal is a
//! boolean, not a failure); this type only surfaces through the validating
//! add path.

use thiserror::Error;

/// Validation failures raised by [`crate::cart::Cart::try_add_item`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    /// Item name was empty.
    #[error("item name must not be empty")]
    EmptyName,

    /// Unit price was negative.
    #[error("unit price must not be negative, got {0}")]
    NegativePrice(f64),

    /// Quantity was zero or negative.
    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),
}

/// Convenience alias for results carrying a [`CartError`].
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_the_offending_value() {
        assert_eq!(
            CartError::NegativePrice(-0.5).to_string(),
            "unit price must not be negative, got -0.5"
        );
        assert_eq!(
            CartError::NonPositiveQuantity(0).to_string(),
            "quantity must be positive, got 0"
        );
        assert_eq!(
            CartError::EmptyName.to_string(),
            "item name must not be empty"
        );
    }
}
