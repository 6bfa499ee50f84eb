//! Receipt

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::{SmallVec, smallvec};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows, Segment},
        style::BorderColor,
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    money::{format_amount, format_money},
    pricing::{CartTotals, PricingError, TaxRate},
};

/// Errors that can occur when rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error pricing a cart line.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Cart summary: the figures shown at the bottom of the cart modal.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt<'a> {
    totals: CartTotals<'a>,
    item_count: u64,
}

impl<'a> Receipt<'a> {
    /// Price a cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the cart cannot be priced.
    pub fn from_cart(cart: &Cart<'a>, rate: TaxRate) -> Result<Self, PricingError> {
        Ok(Self {
            totals: cart.totals(rate)?,
            item_count: cart.item_count(),
        })
    }

    /// Sum of line subtotals
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.totals.subtotal()
    }

    /// Tax at full precision
    pub fn tax(&self) -> Decimal {
        self.totals.tax()
    }

    /// Grand total at full precision
    pub fn total(&self) -> Decimal {
        self.totals.total()
    }

    /// Rate the tax was calculated with
    pub fn rate(&self) -> TaxRate {
        self.totals.rate()
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Currency of every amount
    pub fn currency(&self) -> &'a Currency {
        self.totals.currency()
    }

    /// Label for the tax line, e.g. `IVA (16%)`.
    pub fn tax_label(&self) -> String {
        format!("IVA ({})", self.totals.rate())
    }

    /// Writes the cart as one table: a row per line, then subtotal, tax and total rows.
    ///
    /// Lines at zero quantity are dimmed and the total is bold.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if a line cannot be priced or the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write, cart: &Cart<'_>) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Unit Price", "Qty", "Subtotal"]);

        let mut empty_rows: SmallVec<[usize; 8]> = smallvec![];

        for (idx, line) in cart.iter().enumerate() {
            if line.quantity() == 0 {
                empty_rows.push(idx + 1);
            }

            builder.push_record([
                line.name().to_string(),
                format_money(line.unit_price()),
                line.quantity().to_string(),
                format_money(&line.subtotal()?),
            ]);
        }

        let summary_row = builder.count_records();

        for (label, amount) in self.summary() {
            builder.push_record([label, String::new(), String::new(), amount]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, divider());
        theme.insert_horizontal_line(summary_row, divider());

        table.with(theme);
        table.modify(Segment::all(), BorderColor::filled(Color::FG_BRIGHT_BLACK));
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Rows::last(), Color::BOLD);
        table.modify(Columns::new(1..4), Alignment::right());

        for &row in &empty_rows {
            table.modify(Rows::one(row), Color::FG_BRIGHT_BLACK);
        }

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)
    }

    /// Label and formatted amount for the subtotal, tax and total rows.
    fn summary(&self) -> [(String, String); 3] {
        let currency = self.currency();

        [
            ("Subtotal:".to_string(), format_money(&self.subtotal())),
            (
                format!("{}:", self.tax_label()),
                format_amount(self.tax(), currency),
            ),
            ("Total:".to_string(), format_amount(self.total(), currency)),
        ]
    }
}

fn divider() -> HorizontalLine<char> {
    HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'))
}
