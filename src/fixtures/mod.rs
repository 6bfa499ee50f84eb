//! Fixtures

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    categories::Category,
    fixtures::{
        carts::{CartFixture, CartLineFixture},
        categories::CategoriesFixture,
        menus::MenuFixture,
        products::ProductsFixture,
    },
    navigation::MenuItem,
    products::Product,
    validation::{self, ValidationError},
};

pub mod carts;
pub mod categories;
pub mod menus;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Fixture data failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Catalog creation error
    #[error("Failed to create catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart creation error
    #[error("Failed to create cart: {0}")]
    Cart(#[from] CartError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Products in display order
    products: Vec<Product<'a>>,

    /// Categories in display order
    categories: Vec<Category>,

    /// Slide-out menu entries
    menu: Vec<MenuItem>,

    /// Cart lines, resolved against the products when the cart is built
    cart_lines: Vec<CartLineFixture>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: Vec::new(),
            categories: Vec::new(),
            menu: Vec::new(),
            cart_lines: Vec::new(),
            currency: None,
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ProductsFixture = self.read("products", name)?;

        for product_fixture in fixture.products {
            let (_minor_units, currency) = products::parse_price(&product_fixture.price)?;

            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            let product: Product<'a> = product_fixture.try_into()?;

            self.products.push(product);
        }

        debug!(set = name, products = self.products.len(), "loaded products");

        Ok(self)
    }

    /// Load categories from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a category is invalid.
    pub fn load_categories(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: CategoriesFixture = self.read("categories", name)?;

        for category_fixture in fixture.categories {
            self.categories.push(category_fixture.try_into()?);
        }

        Ok(self)
    }

    /// Load menu entries from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or an entry has an invalid route.
    pub fn load_menu(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: MenuFixture = self.read("menus", name)?;

        for item_fixture in fixture.menu {
            self.menu.push(item_fixture.try_into()?);
        }

        Ok(self)
    }

    /// Load cart lines from a YAML fixture file
    ///
    /// Lines are checked against the loaded products when [`Fixture::cart`] is called, so
    /// products may be loaded afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: CartFixture = self.read("carts", name)?;

        self.cart_lines.extend(fixture.lines);

        Ok(self)
    }

    /// Load a complete fixture set (products, categories, menu and cart with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_at("./fixtures", name)
    }

    /// Load a complete fixture set from a custom base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_at(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture
            .load_categories(name)?
            .load_products(name)?
            .load_menu(name)?
            .load_cart(name)?;

        Ok(fixture)
    }

    /// Get a product by its identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, id: &str) -> Result<&Product<'a>, FixtureError> {
        self.products
            .iter()
            .find(|product| product.id().as_str() == id)
            .ok_or_else(|| FixtureError::ProductNotFound(id.to_string()))
    }

    /// Get all products
    pub fn products(&self) -> &[Product<'a>] {
        &self.products
    }

    /// Get all categories
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get the menu entries
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Create a catalog from the loaded categories and products
    ///
    /// # Errors
    ///
    /// Returns an error if no products are loaded or the catalog rejects the data.
    pub fn catalog(&self) -> Result<Catalog<'a>, FixtureError> {
        let currency = self.currency()?;

        Ok(Catalog::with_products(
            self.categories.iter().cloned(),
            self.products.iter().cloned(),
            currency,
        )?)
    }

    /// Create a cart from the loaded cart lines
    ///
    /// Each line snapshots the name, image and price of the product it references.
    ///
    /// # Errors
    ///
    /// Returns an error if a line references an unknown product, has an invalid quantity,
    /// or the cart rejects the lines.
    pub fn cart(&self) -> Result<Cart<'a>, FixtureError> {
        let currency = self.currency()?;

        let lines = self
            .cart_lines
            .iter()
            .map(|line| self.cart_line(line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cart::with_lines(lines, currency)?)
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    fn cart_line(&self, line: &CartLineFixture) -> Result<CartLine<'a>, FixtureError> {
        let product = self.product(&line.product)?;
        let quantity = validation::quantity(line.quantity)?;

        Ok(CartLine::new(
            product.id().as_str(),
            product.name(),
            product.image(),
            *product.price(),
            quantity,
        )?)
    }

    fn read<T: DeserializeOwned>(&self, kind: &str, name: &str) -> Result<T, FixtureError> {
        let file_path = self.base_path.join(kind).join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        Ok(serde_norway::from_str(&contents)?)
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
