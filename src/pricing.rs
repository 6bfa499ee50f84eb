//! Pricing
//!
//! The cart ledger arithmetic. Prices and line subtotals stay in exact minor units;
//! tax and total keep full decimal precision and are only rounded for display.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{cart::CartLine, money};

/// Default tax rate (IVA, 16%).
pub const TAX_RATE: Decimal = Decimal::from_parts(16, 0, 0, false, 2);

/// Errors that can occur while pricing a cart.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Minor unit arithmetic overflowed.
    #[error("price arithmetic overflowed")]
    Overflow,

    /// A tax rate below zero was supplied.
    #[error("tax rate must not be negative, got {0}")]
    NegativeTaxRate(Decimal),

    /// A tax rate string could not be parsed.
    #[error("invalid tax rate: {0}")]
    InvalidTaxRate(String),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Fractional tax rate applied to a cart subtotal (`0.16` is 16%).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Create a tax rate from a fraction.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::NegativeTaxRate`] if the rate is below zero.
    pub fn new(rate: Decimal) -> Result<Self, PricingError> {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(PricingError::NegativeTaxRate(rate));
        }

        Ok(Self(rate))
    }

    /// The rate as a fraction.
    pub fn rate(&self) -> Decimal {
        self.0
    }

    /// The rate in percent points (`0.16` is `16`).
    pub fn percent_points(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self(TAX_RATE)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent_points())
    }
}

/// Parses `"16%"` as percent points or `"0.16"` as a fraction.
impl FromStr for TaxRate {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let rate = if let Some(points) = trimmed.strip_suffix('%') {
            points
                .trim()
                .parse::<Decimal>()
                .ok()
                .and_then(|points| points.checked_div(Decimal::ONE_HUNDRED))
        } else {
            trimmed.parse::<Decimal>().ok()
        };

        let rate = rate.ok_or_else(|| PricingError::InvalidTaxRate(s.to_string()))?;

        Self::new(rate)
    }
}

/// Calculates the subtotal of a single line: unit price times quantity.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product does not fit in minor units.
pub fn line_subtotal<'a>(line: &CartLine<'a>) -> Result<Money<'a, Currency>, PricingError> {
    let unit_price = line.unit_price();

    let minor = unit_price
        .to_minor_units()
        .checked_mul(i64::from(line.quantity()))
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, unit_price.currency()))
}

/// Calculates the sum of all line subtotals, in line order.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: a line subtotal does not fit in minor units.
/// - [`PricingError::Money`]: a line is priced in a different currency.
pub fn subtotal<'a>(
    lines: &[CartLine<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    lines
        .iter()
        .try_fold(
            Money::from_minor(0, currency),
            |acc, line| -> Result<_, PricingError> { Ok(acc.add(line_subtotal(line)?)?) },
        )
}

/// Calculates the tax owed on a subtotal, at full precision.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the multiplication overflows.
pub fn tax(subtotal: &Money<'_, Currency>, rate: TaxRate) -> Result<Decimal, PricingError> {
    money::to_decimal(subtotal)
        .checked_mul(rate.rate())
        .ok_or(PricingError::Overflow)
}

/// Calculates the grand total: subtotal plus tax.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the addition overflows.
pub fn total(subtotal: &Money<'_, Currency>, tax: Decimal) -> Result<Decimal, PricingError> {
    money::to_decimal(subtotal)
        .checked_add(tax)
        .ok_or(PricingError::Overflow)
}

/// Subtotal, tax and total for a set of cart lines.
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotals<'a> {
    subtotal: Money<'a, Currency>,
    tax: Decimal,
    total: Decimal,
    rate: TaxRate,
}

impl<'a> CartTotals<'a> {
    /// Price a set of lines.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if any step of the calculation fails.
    pub fn from_lines(
        lines: &[CartLine<'a>],
        currency: &'a Currency,
        rate: TaxRate,
    ) -> Result<Self, PricingError> {
        let subtotal = subtotal(lines, currency)?;
        let tax = tax(&subtotal, rate)?;
        let total = total(&subtotal, tax)?;

        Ok(Self {
            subtotal,
            tax,
            total,
            rate,
        })
    }

    /// Sum of line subtotals before tax
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Tax at full precision
    pub fn tax(&self) -> Decimal {
        self.tax
    }

    /// Subtotal plus tax at full precision
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Rate the tax was calculated with
    pub fn rate(&self) -> TaxRate {
        self.rate
    }

    /// Currency of every amount
    pub fn currency(&self) -> &'a Currency {
        self.subtotal.currency()
    }
}
