//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    pricing::{CartTotals, PricingError, TaxRate, subtotal},
    products::{Product, ProductId},
};

mod line;

pub use line::{CartLine, decrement, increment};

/// Errors related to cart construction or mutation.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// No line exists for the given product.
    #[error("no cart line for product {0}")]
    LineNotFound(String),

    /// The product has no stock and cannot be added.
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),

    /// A product or line is priced in another currency (product, its currency, cart currency).
    #[error("product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// The line already holds the largest representable quantity.
    #[error("quantity of product {0} cannot be increased further")]
    QuantityOverflow(ProductId),

    /// Two lines reference the same product.
    #[error("product {0} appears in more than one cart line")]
    DuplicateLine(ProductId),

    /// Error pricing the cart.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Cart
///
/// An ordered list of lines, one per product, all in the same currency.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Create a cart with the given lines.
    ///
    /// # Errors
    ///
    /// - [`CartError::CurrencyMismatch`]: a line is priced in another currency.
    /// - [`CartError::DuplicateLine`]: two lines reference the same product.
    pub fn with_lines(
        lines: impl Into<Vec<CartLine<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let lines = lines.into();

        for (i, line) in lines.iter().enumerate() {
            let line_currency = line.unit_price().currency();

            if line_currency != currency {
                return Err(CartError::CurrencyMismatch(
                    line.product().clone(),
                    line_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            let seen = lines.get(..i).unwrap_or_default();

            if seen.iter().any(|other| other.product() == line.product()) {
                return Err(CartError::DuplicateLine(line.product().clone()));
            }
        }

        Ok(Cart { lines, currency })
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the product is incremented; otherwise a new line is appended
    /// with a snapshot of the product's name, image and price.
    ///
    /// # Errors
    ///
    /// - [`CartError::OutOfStock`]: the product has no stock.
    /// - [`CartError::CurrencyMismatch`]: the product is priced in another currency.
    /// - [`CartError::QuantityOverflow`]: the existing line cannot take another unit.
    pub fn add_product(&mut self, product: &Product<'a>) -> Result<&CartLine<'a>, CartError> {
        if !product.is_available() {
            return Err(CartError::OutOfStock(product.id().clone()));
        }

        let product_currency = product.price().currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product.id().clone(),
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Ok(index) = self.position(product.id().as_str()) {
            return self.update(index, CartLine::increment);
        }

        self.lines.push(CartLine::from_product(product));

        debug!(product = %product.id(), "added product to cart");

        self.line(product.id().as_str())
    }

    /// Add one unit to the line for a product.
    ///
    /// # Errors
    ///
    /// - [`CartError::LineNotFound`]: the cart has no line for the product.
    /// - [`CartError::QuantityOverflow`]: the line cannot take another unit.
    pub fn increment(&mut self, product: &str) -> Result<&CartLine<'a>, CartError> {
        let index = self.position(product)?;

        self.update(index, CartLine::increment)
    }

    /// Remove one unit from the line for a product, stopping at zero.
    ///
    /// A line that reaches zero stays in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] if the cart has no line for the product.
    pub fn decrement(&mut self, product: &str) -> Result<&CartLine<'a>, CartError> {
        let index = self.position(product)?;

        self.update(index, |line| {
            line.decrement();
            Ok(())
        })
    }

    /// Drop every line whose quantity is zero, returning how many were removed.
    pub fn remove_empty_lines(&mut self) -> usize {
        let before = self.lines.len();

        self.lines.retain(|line| line.quantity() > 0);

        let removed = before - self.lines.len();

        if removed > 0 {
            debug!(removed, "removed empty cart lines");
        }

        removed
    }

    /// Get the line for a product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] if the cart has no line for the product.
    pub fn line(&self, product: &str) -> Result<&CartLine<'a>, CartError> {
        self.lines
            .iter()
            .find(|line| line.product().as_str() == product)
            .ok_or_else(|| CartError::LineNotFound(product.to_string()))
    }

    /// All lines, in the order they were added.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Iterate over the lines in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Calculate the subtotal of the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line subtotal overflows.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, PricingError> {
        subtotal(&self.lines, self.currency)
    }

    /// Calculate subtotal, tax and total.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if any step of the calculation fails.
    pub fn totals(&self, rate: TaxRate) -> Result<CartTotals<'a>, PricingError> {
        CartTotals::from_lines(&self.lines, self.currency, rate)
    }

    fn position(&self, product: &str) -> Result<usize, CartError> {
        self.lines
            .iter()
            .position(|line| line.product().as_str() == product)
            .ok_or_else(|| CartError::LineNotFound(product.to_string()))
    }

    fn update(
        &mut self,
        index: usize,
        apply: impl FnOnce(&mut CartLine<'a>) -> Result<(), CartError>,
    ) -> Result<&CartLine<'a>, CartError> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or_else(|| CartError::LineNotFound(index.to_string()))?;

        apply(line)?;

        debug!(
            product = %line.product(),
            quantity = line.quantity(),
            "updated cart line"
        );

        Ok(line)
    }
}
