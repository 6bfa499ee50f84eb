//! Storefront
//!
//! The state a storefront screen works with: the category being browsed, the cart and
//! which overlay (cart or menu) is showing.

use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    categories::{Category, CategoryId},
    navigation::MenuItem,
    pricing::{CartTotals, PricingError, TaxRate},
    products::Product,
    receipt::Receipt,
};

/// Title shown in the header when none is configured.
pub const DEFAULT_TITLE: &str = "Antonella";

/// Errors raised by storefront actions.
#[derive(Debug, Error, PartialEq)]
pub enum StorefrontError {
    /// Catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Cart mutation failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Pricing the cart failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The cart is in a different currency from the catalog (cart, catalog).
    #[error("Cart has currency {0}, but catalog has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),
}

/// The overlay shown above the product grid. Only one can be open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Nothing open
    #[default]
    None,

    /// Cart modal
    Cart,

    /// Slide-out menu
    Menu,
}

/// Storefront
#[derive(Debug, Clone)]
pub struct Storefront<'c, 'a> {
    catalog: &'c Catalog<'a>,
    menu: Vec<MenuItem>,
    title: String,
    selected_category: CategoryId,
    overlay: Overlay,
    cart: Cart<'a>,
    tax_rate: TaxRate,
}

impl<'c, 'a> Storefront<'c, 'a> {
    /// Create a storefront over a catalog, with an empty cart and every product visible.
    #[must_use]
    pub fn new(catalog: &'c Catalog<'a>) -> Self {
        Self {
            catalog,
            menu: Vec::new(),
            title: DEFAULT_TITLE.to_string(),
            selected_category: CategoryId::all(),
            overlay: Overlay::None,
            cart: Cart::new(catalog.currency()),
            tax_rate: TaxRate::default(),
        }
    }

    /// Start with an existing cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::CurrencyMismatch`] if the cart and catalog currencies differ.
    pub fn with_cart(mut self, cart: Cart<'a>) -> Result<Self, StorefrontError> {
        if cart.currency() != self.catalog.currency() {
            return Err(StorefrontError::CurrencyMismatch(
                cart.currency().iso_alpha_code,
                self.catalog.currency().iso_alpha_code,
            ));
        }

        self.cart = cart;

        Ok(self)
    }

    /// Use a tax rate other than the default 16%.
    #[must_use]
    pub fn with_tax_rate(mut self, tax_rate: TaxRate) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Set the header title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the slide-out menu entries.
    #[must_use]
    pub fn with_menu(mut self, menu: impl IntoIterator<Item = MenuItem>) -> Self {
        self.menu = menu.into_iter().collect();
        self
    }

    /// Header title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Menu entries, in display order
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// The catalog being browsed
    pub fn catalog(&self) -> &'c Catalog<'a> {
        self.catalog
    }

    /// Categories shown in the category bar
    pub fn categories(&self) -> &'c [Category] {
        self.catalog.categories()
    }

    /// Tax rate applied to the cart
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// The category currently selected
    pub fn selected_category(&self) -> &CategoryId {
        &self.selected_category
    }

    /// Select the category to browse.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CategoryNotFound`] (wrapped) if the catalog has no such
    /// category. The [`CategoryId::ALL`] sentinel is always accepted.
    pub fn select_category(&mut self, id: &str) -> Result<&CategoryId, StorefrontError> {
        let selected = if id == CategoryId::ALL {
            CategoryId::all()
        } else {
            self.catalog.category(id)?.id().clone()
        };

        debug!(category = %selected, "selected category");

        self.selected_category = selected;

        Ok(&self.selected_category)
    }

    /// Products visible under the selected category.
    pub fn visible_products(&self) -> Vec<&'c Product<'a>> {
        self.catalog.visible_products(&self.selected_category)
    }

    /// The overlay currently open
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Show the cart modal, closing the menu if it is open.
    pub fn open_cart(&mut self) {
        self.set_overlay(Overlay::Cart);
    }

    /// Hide the cart modal.
    pub fn close_cart(&mut self) {
        if self.overlay == Overlay::Cart {
            self.set_overlay(Overlay::None);
        }
    }

    /// Whether the cart modal is showing
    pub fn is_cart_open(&self) -> bool {
        self.overlay == Overlay::Cart
    }

    /// Show the slide-out menu, closing the cart if it is open.
    pub fn open_menu(&mut self) {
        self.set_overlay(Overlay::Menu);
    }

    /// Hide the slide-out menu.
    pub fn close_menu(&mut self) {
        if self.overlay == Overlay::Menu {
            self.set_overlay(Overlay::None);
        }
    }

    /// Whether the slide-out menu is showing
    pub fn is_menu_open(&self) -> bool {
        self.overlay == Overlay::Menu
    }

    /// Follow a menu entry: closes the menu and returns the route to show.
    pub fn navigate<'m>(&mut self, item: &'m MenuItem) -> &'m str {
        self.close_menu();

        debug!(href = item.href(), "navigating");

        item.href()
    }

    /// The cart
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// Mutable access to the cart
    pub fn cart_mut(&mut self) -> &mut Cart<'a> {
        &mut self.cart
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::ProductNotFound`] (wrapped): the catalog has no such product.
    /// - [`CartError::OutOfStock`] (wrapped): the product cannot be added.
    pub fn add_to_cart(&mut self, id: &str) -> Result<&CartLine<'a>, StorefrontError> {
        let catalog = self.catalog;
        let product = catalog.product(id)?;

        Ok(self.cart.add_product(product)?)
    }

    /// Add one unit to a cart line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] (wrapped) if the cart has no line for the product,
    /// or [`CartError::QuantityOverflow`] (wrapped) if the line is full.
    pub fn increment(&mut self, id: &str) -> Result<&CartLine<'a>, StorefrontError> {
        Ok(self.cart.increment(id)?)
    }

    /// Remove one unit from a cart line, stopping at zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] (wrapped) if the cart has no line for the product.
    pub fn decrement(&mut self, id: &str) -> Result<&CartLine<'a>, StorefrontError> {
        Ok(self.cart.decrement(id)?)
    }

    /// Subtotal, tax and total of the cart at the configured rate.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] (wrapped) if the cart cannot be priced.
    pub fn totals(&self) -> Result<CartTotals<'a>, StorefrontError> {
        Ok(self.cart.totals(self.tax_rate)?)
    }

    /// A receipt for the current cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] (wrapped) if the cart cannot be priced.
    pub fn receipt(&self) -> Result<Receipt<'a>, StorefrontError> {
        Ok(Receipt::from_cart(&self.cart, self.tax_rate)?)
    }

    fn set_overlay(&mut self, overlay: Overlay) {
        if self.overlay != overlay {
            debug!(from = ?self.overlay, to = ?overlay, "overlay changed");
        }

        self.overlay = overlay;
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{
        Money,
        iso::{MXN, USD},
    };
    use testresult::TestResult;

    use super::*;
    use crate::products::{NewProduct, tests::new_product};

    fn test_catalog<'a>() -> TestResult<Catalog<'a>> {
        Ok(Catalog::with_products(
            [
                Category::new("all", "Todas")?,
                Category::new("hamburguesas", "Hamburguesas")?,
                Category::new("tacos", "Tacos")?,
                Category::new("pizzas", "Pizzas")?,
            ],
            [
                Product::try_from(new_product("1", "hamburguesas", Money::from_minor(9999, MXN)))?,
                Product::try_from(new_product("2", "tacos", Money::from_minor(8999, MXN)))?,
                Product::try_from(NewProduct {
                    stock: 0,
                    ..new_product("5", "pizzas", Money::from_minor(10999, MXN))
                })?,
            ],
            MXN,
        )?)
    }

    #[test]
    fn new_storefront_defaults() -> TestResult {
        let catalog = test_catalog()?;
        let storefront = Storefront::new(&catalog);

        assert_eq!(storefront.title(), "Antonella");
        assert!(storefront.selected_category().is_all());
        assert_eq!(storefront.overlay(), Overlay::None);
        assert!(storefront.cart().is_empty());
        assert_eq!(storefront.tax_rate(), TaxRate::default());
        assert_eq!(storefront.visible_products().len(), 3);

        Ok(())
    }

    #[test]
    fn selecting_a_category_filters_products() -> TestResult {
        let catalog = test_catalog()?;
        let mut storefront = Storefront::new(&catalog);

        storefront.select_category("tacos")?;

        let visible = storefront.visible_products();

        assert_eq!(visible.len(), 1);
        assert_eq!(visible.first().map(|p| p.id().as_str()), Some("2"));

        storefront.select_category("all")?;

        assert_eq!(storefront.visible_products().len(), 3);

        Ok(())
    }

    #[test]
    fn selecting_an_unknown_category_keeps_selection() -> TestResult {
        let catalog = test_catalog()?;
        let mut storefront = Storefront::new(&catalog);

        storefront.select_category("tacos")?;

        let result = storefront.select_category("sushi");

        assert!(matches!(
            result,
            Err(StorefrontError::Catalog(CatalogError::CategoryNotFound(_)))
        ));
        assert_eq!(storefront.selected_category().as_str(), "tacos");

        Ok(())
    }

    #[test]
    fn cart_and_menu_overlays_are_exclusive() -> TestResult {
        let catalog = test_catalog()?;
        let mut storefront = Storefront::new(&catalog);

        storefront.open_menu();
        assert!(storefront.is_menu_open());

        storefront.open_cart();
        assert!(storefront.is_cart_open());
        assert!(!storefront.is_menu_open());

        storefront.close_menu();
        assert!(storefront.is_cart_open());

        storefront.close_cart();
        assert_eq!(storefront.overlay(), Overlay::None);

        Ok(())
    }

    #[test]
    fn navigate_closes_menu_and_returns_href() -> TestResult {
        let catalog = test_catalog()?;
        let mut storefront = Storefront::new(&catalog)
            .with_menu([MenuItem::new("Ordenes", "🧾", "/orders")?]);
        let item = storefront.menu().first().cloned().ok_or("missing menu item")?;

        storefront.open_menu();

        assert_eq!(storefront.navigate(&item), "/orders");
        assert!(!storefront.is_menu_open());

        Ok(())
    }

    #[test]
    fn add_to_cart_increments_existing_lines() -> TestResult {
        let catalog = test_catalog()?;
        let mut storefront = Storefront::new(&catalog);

        storefront.add_to_cart("1")?;
        storefront.add_to_cart("2")?;
        let line = storefront.add_to_cart("1")?;

        assert_eq!(line.quantity(), 2);
        assert_eq!(storefront.cart().len(), 2);
        assert_eq!(storefront.cart().item_count(), 3);

        Ok(())
    }

    #[test]
    fn add_to_cart_reports_unknown_and_unavailable_products() -> TestResult {
        let catalog = test_catalog()?;
        let mut storefront = Storefront::new(&catalog);

        assert!(matches!(
            storefront.add_to_cart("99"),
            Err(StorefrontError::Catalog(CatalogError::ProductNotFound(_)))
        ));
        assert!(matches!(
            storefront.add_to_cart("5"),
            Err(StorefrontError::Cart(CartError::OutOfStock(_)))
        ));
        assert!(storefront.cart().is_empty());

        Ok(())
    }

    #[test]
    fn quantity_controls_clamp_at_zero() -> TestResult {
        let catalog = test_catalog()?;
        let mut storefront = Storefront::new(&catalog);

        storefront.add_to_cart("2")?;
        storefront.decrement("2")?;
        let line = storefront.decrement("2")?;

        assert_eq!(line.quantity(), 0);
        assert_eq!(storefront.increment("2")?.quantity(), 1);

        Ok(())
    }

    #[test]
    fn totals_use_configured_tax_rate() -> TestResult {
        let catalog = test_catalog()?;
        let mut storefront =
            Storefront::new(&catalog).with_tax_rate(TaxRate::new(Decimal::new(8, 2))?);

        storefront.add_to_cart("1")?;

        let totals = storefront.totals()?;

        assert_eq!(totals.subtotal(), Money::from_minor(9999, MXN));
        assert_eq!(totals.tax(), Decimal::new(79992, 4));
        assert_eq!(totals.total(), Decimal::new(1_079_892, 4));

        Ok(())
    }

    #[test]
    fn with_cart_rejects_other_currencies() -> TestResult {
        let catalog = test_catalog()?;

        let result = Storefront::new(&catalog).with_cart(Cart::new(USD));

        assert!(matches!(
            result,
            Err(StorefrontError::CurrencyMismatch("USD", "MXN"))
        ));

        Ok(())
    }

    #[test]
    fn with_title_overrides_default() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(Storefront::new(&catalog).with_title("Menú").title(), "Menú");

        Ok(())
    }
}
