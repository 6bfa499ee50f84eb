//! Products

use std::{borrow::Borrow, fmt};

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

use crate::{
    categories::CategoryId,
    pricing::PricingError,
    validation::{self, ValidationError, identifier},
};

/// Identifier of a product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdentifier`] if the identifier is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        identifier(id.into(), "product").map(Self)
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unvalidated product data, as supplied by a loader.
#[derive(Debug, Clone)]
pub struct NewProduct<'a> {
    /// Unique product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Identifier of the category the product belongs to
    pub category: String,

    /// Image URI
    pub image: String,

    /// Discount in percent points (`0..=100`)
    pub discount: i64,

    /// Units in stock; zero means unavailable
    pub stock: i64,

    /// Product price
    pub price: Money<'a, Currency>,

    /// Short description
    pub description: String,
}

/// Product
///
/// Immutable reference data: built once when the catalog is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    id: ProductId,
    name: String,
    category: CategoryId,
    image: String,
    discount: u8,
    stock: u32,
    price: Money<'a, Currency>,
    description: String,
}

impl<'a> TryFrom<NewProduct<'a>> for Product<'a> {
    type Error = ValidationError;

    fn try_from(new: NewProduct<'a>) -> Result<Self, Self::Error> {
        let minor = new.price.to_minor_units();

        if minor < 0 {
            return Err(ValidationError::NegativePrice(minor));
        }

        Ok(Product {
            id: ProductId::new(new.id)?,
            name: new.name,
            category: CategoryId::new(new.category)?,
            image: new.image,
            discount: validation::discount(new.discount)?,
            stock: validation::stock(new.stock)?,
            price: new.price,
            description: new.description,
        })
    }
}

impl<'a> Product<'a> {
    /// Product identifier
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category the product belongs to
    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    /// Image URI
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Discount in percent points
    pub fn discount(&self) -> u8 {
        self.discount
    }

    /// Discount as a fractional percentage (15 points is `0.15`)
    pub fn discount_percentage(&self) -> Percentage {
        Percentage::from(Decimal::from(self.discount) / Decimal::ONE_HUNDRED)
    }

    /// Units in stock
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Product price
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Short description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// A product with no stock cannot be added to the cart.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Whether the product carries a discount badge.
    pub fn has_discount(&self) -> bool {
        self.discount > 0
    }

    /// Price after the discount, rounded half away from zero to minor units.
    ///
    /// The cart never applies this price; it is shown alongside the base price.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the discount cannot be represented in minor units.
    pub fn discounted_price(&self) -> Result<Money<'a, Currency>, PricingError> {
        let minor = self.price.to_minor_units();

        let savings = (self.discount_percentage() * Decimal::from(minor))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(PricingError::Overflow)?;

        let discounted = minor.checked_sub(savings).ok_or(PricingError::Overflow)?;

        Ok(Money::from_minor(discounted, self.price.currency()))
    }
}
