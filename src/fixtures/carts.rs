//! Cart Fixtures

use serde::Deserialize;

/// Wrapper for cart lines in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Lines in the order they were added
    pub lines: Vec<CartLineFixture>,
}

/// Cart Line Fixture
///
/// Name, image and price are taken from the referenced product when the cart is built.
#[derive(Debug, Clone, Deserialize)]
pub struct CartLineFixture {
    /// Product identifier
    pub product: String,

    /// Quantity; validated when the cart is built
    pub quantity: i64,
}
