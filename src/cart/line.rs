//! Cart Lines

use rusty_money::{Money, iso::Currency};

use super::CartError;
use crate::{
    pricing::{PricingError, line_subtotal},
    products::{Product, ProductId},
    validation::ValidationError,
};

/// One entry in a cart: a snapshot of a product plus a quantity.
///
/// Name, image and unit price are copied when the line is created, so a line stays
/// priceable even if the catalog changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    product: ProductId,
    name: String,
    image: String,
    unit_price: Money<'a, Currency>,
    quantity: u32,
}

impl<'a> CartLine<'a> {
    /// Create a cart line.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NegativePrice`]: the unit price is below zero.
    /// - [`ValidationError::EmptyIdentifier`]: the product identifier is blank.
    pub fn new(
        product: impl Into<String>,
        name: impl Into<String>,
        image: impl Into<String>,
        unit_price: Money<'a, Currency>,
        quantity: u32,
    ) -> Result<Self, ValidationError> {
        let minor = unit_price.to_minor_units();

        if minor < 0 {
            return Err(ValidationError::NegativePrice(minor));
        }

        Ok(Self {
            product: ProductId::new(product)?,
            name: name.into(),
            image: image.into(),
            unit_price,
            quantity,
        })
    }

    /// Snapshot a product into a new line with a quantity of one.
    pub fn from_product(product: &Product<'a>) -> Self {
        Self {
            product: product.id().clone(),
            name: product.name().to_string(),
            image: product.image().to_string(),
            unit_price: *product.price(),
            quantity: 1,
        }
    }

    /// Identifier of the product this line was added from
    pub fn product(&self) -> &ProductId {
        &self.product
    }

    /// Product name at add-time
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product image at add-time
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Unit price at add-time
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the subtotal does not fit in minor units.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, PricingError> {
        line_subtotal(self)
    }

    /// Add one unit. Stock is not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if the line already holds `u32::MAX` units;
    /// the quantity is left unchanged.
    pub fn increment(&mut self) -> Result<(), CartError> {
        self.quantity = self
            .quantity
            .checked_add(1)
            .ok_or_else(|| CartError::QuantityOverflow(self.product.clone()))?;

        Ok(())
    }

    /// Remove one unit, stopping at zero.
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }
}

/// Returns a copy of the line with one more unit.
///
/// # Errors
///
/// Returns [`CartError::QuantityOverflow`] if the line already holds `u32::MAX` units.
pub fn increment<'a>(line: &CartLine<'a>) -> Result<CartLine<'a>, CartError> {
    let mut next = line.clone();
    next.increment()?;
    Ok(next)
}

/// Returns a copy of the line with one unit fewer; a line at zero stays at zero.
#[must_use]
pub fn decrement<'a>(line: &CartLine<'a>) -> CartLine<'a> {
    let mut next = line.clone();
    next.decrement();
    next
}
