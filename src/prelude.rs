//! Antonella prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError, filter},
    categories::{Category, CategoryId},
    fixtures::{Fixture, FixtureError},
    listing::{ListingError, write_products},
    money::{format_amount, format_money},
    navigation::MenuItem,
    pricing::{CartTotals, PricingError, TAX_RATE, TaxRate},
    products::{NewProduct, Product, ProductId},
    receipt::{Receipt, ReceiptError},
    storefront::{Overlay, Storefront, StorefrontError},
    styles::{Color, Style, StyleError, merge},
    validation::ValidationError,
};
