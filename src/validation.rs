//! Validation

use thiserror::Error;

/// Errors raised when reference data or cart lines are built from untrusted input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A price was below zero (value in minor units).
    #[error("price must not be negative, got {0} minor units")]
    NegativePrice(i64),

    /// A quantity was below zero.
    #[error("quantity must not be negative, got {0}")]
    NegativeQuantity(i64),

    /// A quantity was too large to be held by a cart line.
    #[error("quantity {0} is out of range")]
    QuantityOutOfRange(i64),

    /// A stock level was below zero.
    #[error("stock must not be negative, got {0}")]
    NegativeStock(i64),

    /// A stock level was too large to be represented.
    #[error("stock {0} is out of range")]
    StockOutOfRange(i64),

    /// A discount was outside of `0..=100` percent.
    #[error("discount must be between 0 and 100 percent, got {0}")]
    DiscountOutOfRange(i64),

    /// An identifier was empty or whitespace only (kind of identifier).
    #[error("{0} identifier must not be empty")]
    EmptyIdentifier(&'static str),

    /// A navigation target was not an absolute route.
    #[error("menu href must start with '/', got {0:?}")]
    InvalidHref(String),
}

/// Converts a signed quantity from an external source into a cart quantity.
///
/// # Errors
///
/// - [`ValidationError::NegativeQuantity`]: the value is below zero.
/// - [`ValidationError::QuantityOutOfRange`]: the value does not fit in a `u32`.
pub fn quantity(value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeQuantity(value));
    }

    u32::try_from(value).map_err(|_err| ValidationError::QuantityOutOfRange(value))
}

/// Converts a signed stock level from an external source.
///
/// # Errors
///
/// - [`ValidationError::NegativeStock`]: the value is below zero.
/// - [`ValidationError::StockOutOfRange`]: the value does not fit in a `u32`.
pub fn stock(value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeStock(value));
    }

    u32::try_from(value).map_err(|_err| ValidationError::StockOutOfRange(value))
}

/// Converts a discount in percent points, rejecting anything outside `0..=100`.
///
/// # Errors
///
/// Returns [`ValidationError::DiscountOutOfRange`] if the value is not a valid percentage.
pub fn discount(value: i64) -> Result<u8, ValidationError> {
    match u8::try_from(value) {
        Ok(points) if points <= 100 => Ok(points),
        _ => Err(ValidationError::DiscountOutOfRange(value)),
    }
}

/// Trims an identifier and rejects it when nothing is left.
pub(crate) fn identifier(value: String, kind: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyIdentifier(kind));
    }

    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}
