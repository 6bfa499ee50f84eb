//! Money display

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};

/// Number of decimal places every monetary value is displayed with.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Major unit amount of a money value, at full precision.
pub fn to_decimal(money: &Money<'_, Currency>) -> Decimal {
    *money.amount()
}

/// Rounds an amount for display: half away from zero, always two decimal places.
///
/// Callers keep the unrounded amount for any further arithmetic.
pub fn round_for_display(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    rounded.rescale(DISPLAY_DECIMAL_PLACES);

    rounded
}

/// Formats an amount with the currency symbol, e.g. `$49.59`.
pub fn format_amount(amount: Decimal, currency: &Currency) -> String {
    format!("{}{}", currency.symbol, round_for_display(amount))
}

/// Formats a money value with the currency symbol, e.g. `$309.95`.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    format_amount(to_decimal(money), money.currency())
}
