//! Product Fixtures

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{
    Money,
    iso::{Currency, EUR, MXN, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{NewProduct, Product},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Category identifier
    pub category: String,

    /// Image URI
    #[serde(default)]
    pub image: String,

    /// Discount in percent points
    #[serde(default)]
    pub discount: i64,

    /// Units in stock
    pub stock: i64,

    /// Product price (e.g., "99.99 MXN")
    pub price: String,

    /// Short description
    #[serde(default)]
    pub description: String,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        let product = Product::try_from(NewProduct {
            id: fixture.id,
            name: fixture.name,
            category: fixture.category,
            image: fixture.image,
            discount: fixture.discount,
            stock: fixture.stock,
            price: Money::from_minor(minor_units, currency),
            description: fixture.description,
        })?;

        Ok(product)
    }
}

/// Parse price string (e.g., "99.99 MXN") into minor units and currency
///
/// The amount is rounded half away from zero to the currency's minor unit.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "MXN" => MXN,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    let mut minor = amount
        .round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointAwayFromZero);

    minor.rescale(currency.exponent);

    let minor_units = i64::try_from(minor.mantissa())
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}
