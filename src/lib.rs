//! Antonella
//!
//! Core logic of a mobile food storefront: browsing the catalog by category, a cart ledger
//! with quantity controls, and subtotal, IVA and total calculation.

pub mod cart;
pub mod catalog;
pub mod categories;
pub mod fixtures;
pub mod listing;
pub mod money;
pub mod navigation;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod storefront;
pub mod styles;
pub mod utils;
pub mod validation;
