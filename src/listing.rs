//! Product listing
//!
//! Terminal rendering of the product grid.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{money::format_money, pricing::PricingError, products::Product};

/// Errors that can occur when rendering a product listing.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Error calculating a discounted price.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Writes one row per product: name, category, price, discount and availability.
///
/// Discounted products also show their price after the discount.
///
/// # Errors
///
/// Returns a [`ListingError`] if a discounted price cannot be calculated or the output
/// cannot be written.
pub fn write_products(
    mut out: impl io::Write,
    products: &[&Product<'_>],
) -> Result<(), ListingError> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Product", "Category", "Price", "Discount", "Stock"]);

    for product in products {
        let discount = if product.has_discount() {
            format!(
                "-{}% {}",
                product.discount(),
                format_money(&product.discounted_price()?)
            )
        } else {
            String::new()
        };

        let stock = if product.is_available() {
            product.stock().to_string()
        } else {
            "Out of stock".to_string()
        };

        builder.push_record([
            product.id().to_string(),
            product.name().to_string(),
            product.category().to_string(),
            format_money(product.price()),
            discount,
            stock,
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..6), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| ListingError::IO)
}
