//! Catalog
//!
//! The product catalog and the category filter applied to it.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::trace;

use crate::{
    categories::{Category, CategoryId},
    products::{Product, ProductId},
};

/// Errors related to catalog construction or lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No product has the given identifier.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No category has the given identifier.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Two products share an identifier.
    #[error("Duplicate product identifier: {0}")]
    DuplicateProduct(ProductId),

    /// Two categories share an identifier.
    #[error("Duplicate category identifier: {0}")]
    DuplicateCategory(CategoryId),

    /// A product references a category that is not in the catalog (product, category).
    #[error("Product {0} references unknown category {1}")]
    UnknownCategory(ProductId, CategoryId),

    /// A product's currency differs from the catalog currency (product, product currency,
    /// catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// Returns the products visible under a category, preserving catalog order.
///
/// The [`CategoryId::ALL`] sentinel returns every product; an unknown category returns
/// nothing.
pub fn filter<'p, 'a>(products: &'p [Product<'a>], category: &CategoryId) -> Vec<&'p Product<'a>> {
    let visible: Vec<&'p Product<'a>> = if category.is_all() {
        products.iter().collect()
    } else {
        products
            .iter()
            .filter(|product| product.category() == category)
            .collect()
    };

    trace!(
        category = %category,
        visible = visible.len(),
        total = products.len(),
        "filtered catalog"
    );

    visible
}

/// Catalog
///
/// Products in display order, the categories they are grouped by, and an index for
/// lookups by product identifier.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: Vec<Product<'a>>,
    categories: Vec<Category>,
    product_index: FxHashMap<ProductId, usize>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            product_index: FxHashMap::default(),
            currency,
        }
    }

    /// Create a catalog from categories and products.
    ///
    /// Categories are added first so every product's category can be checked.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any category or product is rejected.
    pub fn with_products(
        categories: impl IntoIterator<Item = Category>,
        products: impl IntoIterator<Item = Product<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(currency);

        for category in categories {
            catalog.add_category(category)?;
        }

        for product in products {
            catalog.add_product(product)?;
        }

        Ok(catalog)
    }

    /// Add a category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCategory`] if the identifier is already used.
    pub fn add_category(&mut self, category: Category) -> Result<&mut Self, CatalogError> {
        if self.category(category.id().as_str()).is_ok() {
            return Err(CatalogError::DuplicateCategory(category.id().clone()));
        }

        self.categories.push(category);

        Ok(self)
    }

    /// Add a product at the end of the catalog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateProduct`]: the identifier is already used.
    /// - [`CatalogError::UnknownCategory`]: categories are defined and none matches the
    ///   product's category (the [`CategoryId::ALL`] sentinel never matches).
    /// - [`CatalogError::CurrencyMismatch`]: the product is priced in another currency.
    pub fn add_product(&mut self, product: Product<'a>) -> Result<&mut Self, CatalogError> {
        if self.product_index.contains_key(product.id()) {
            return Err(CatalogError::DuplicateProduct(product.id().clone()));
        }

        let known_category = self
            .categories
            .iter()
            .any(|category| !category.is_all() && category.id() == product.category());

        if !self.categories.is_empty() && !known_category {
            return Err(CatalogError::UnknownCategory(
                product.id().clone(),
                product.category().clone(),
            ));
        }

        let product_currency = product.price().currency();

        if product_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                product.id().clone(),
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        self.product_index
            .insert(product.id().clone(), self.products.len());
        self.products.push(product);

        Ok(self)
    }

    /// Get a product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if no product has the identifier.
    pub fn product(&self, id: &str) -> Result<&Product<'a>, CatalogError> {
        self.product_index
            .get(id)
            .and_then(|&index| self.products.get(index))
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Get a category by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CategoryNotFound`] if no category has the identifier.
    pub fn category(&self, id: &str) -> Result<&Category, CatalogError> {
        self.categories
            .iter()
            .find(|category| category.id() == id)
            .ok_or_else(|| CatalogError::CategoryNotFound(id.to_string()))
    }

    /// Products visible under a category, in catalog order.
    pub fn visible_products(&self, category: &CategoryId) -> Vec<&Product<'a>> {
        filter(&self.products, category)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product<'a>] {
        &self.products
    }

    /// All categories, in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get the number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency every product is priced in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{MXN, USD},
    };
    use testresult::TestResult;

    use super::*;
    use crate::products::tests::product;

    fn test_categories() -> Result<Vec<Category>, crate::validation::ValidationError> {
        Ok(vec![
            Category::new("all", "Todas")?,
            Category::new("hamburguesas", "Hamburguesas")?,
            Category::new("tacos", "Tacos")?,
            Category::new("pollos", "Pollos")?,
        ])
    }

    fn test_catalog<'a>() -> TestResult<Catalog<'a>> {
        Ok(Catalog::with_products(
            test_categories()?,
            [
                product("1", "hamburguesas", Money::from_minor(9999, MXN))?,
                product("2", "tacos", Money::from_minor(8999, MXN))?,
                product("3", "pollos", Money::from_minor(4999, MXN))?,
                product("9", "hamburguesas", Money::from_minor(7999, MXN))?,
            ],
            MXN,
        )?)
    }

    fn ids<'p>(products: &[&'p Product<'_>]) -> Vec<&'p str> {
        products.iter().map(|product| product.id().as_str()).collect()
    }

    #[test]
    fn filter_all_returns_every_product_in_order() -> TestResult {
        let catalog = test_catalog()?;

        let visible = filter(catalog.products(), &CategoryId::all());

        assert_eq!(ids(&visible), vec!["1", "2", "3", "9"]);

        Ok(())
    }

    #[test]
    fn filter_by_category_returns_single_match_unchanged() -> TestResult {
        let catalog = test_catalog()?;

        let visible = filter(catalog.products(), &CategoryId::new("tacos")?);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible.first().copied(), Some(catalog.product("2")?));

        Ok(())
    }

    #[test]
    fn filter_preserves_relative_order() -> TestResult {
        let catalog = test_catalog()?;

        let visible = catalog.visible_products(&CategoryId::new("hamburguesas")?);

        assert_eq!(ids(&visible), vec!["1", "9"]);

        Ok(())
    }

    #[test]
    fn filter_unknown_category_is_empty() -> TestResult {
        let catalog = test_catalog()?;

        assert!(catalog.visible_products(&CategoryId::new("sushi")?).is_empty());

        Ok(())
    }

    #[test]
    fn filter_empty_products_is_empty() {
        assert!(filter(&[], &CategoryId::all()).is_empty());
    }

    #[test]
    fn product_lookup() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(catalog.product("3")?.category().as_str(), "pollos");
        assert_eq!(
            catalog.product("42").err(),
            Some(CatalogError::ProductNotFound("42".to_string()))
        );

        Ok(())
    }

    #[test]
    fn category_lookup() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(catalog.category("tacos")?.name(), "Tacos");
        assert!(matches!(
            catalog.category("sushi"),
            Err(CatalogError::CategoryNotFound(_))
        ));

        Ok(())
    }

    #[test]
    fn duplicate_product_is_rejected() -> TestResult {
        let mut catalog = test_catalog()?;

        let result = catalog.add_product(product("1", "tacos", Money::from_minor(100, MXN))?);

        assert!(matches!(result, Err(CatalogError::DuplicateProduct(_))));
        assert_eq!(catalog.len(), 4);

        Ok(())
    }

    #[test]
    fn duplicate_category_is_rejected() -> TestResult {
        let mut catalog = test_catalog()?;

        let result = catalog.add_category(Category::new("tacos", "Más tacos")?);

        assert!(matches!(result, Err(CatalogError::DuplicateCategory(_))));

        Ok(())
    }

    #[test]
    fn unknown_category_is_rejected() -> TestResult {
        let mut catalog = test_catalog()?;

        let result = catalog.add_product(product("10", "sushi", Money::from_minor(100, MXN))?);

        assert!(matches!(result, Err(CatalogError::UnknownCategory(_, _))));

        Ok(())
    }

    #[test]
    fn products_cannot_use_the_all_sentinel() -> TestResult {
        let mut catalog = test_catalog()?;

        let result = catalog.add_product(product("10", "all", Money::from_minor(100, MXN))?);

        assert!(matches!(result, Err(CatalogError::UnknownCategory(_, _))));

        Ok(())
    }

    #[test]
    fn catalog_without_categories_accepts_any_category() -> TestResult {
        let mut catalog = Catalog::new(MXN);

        catalog.add_product(product("1", "anything", Money::from_minor(100, MXN))?)?;

        assert_eq!(catalog.len(), 1);

        Ok(())
    }

    #[test]
    fn currency_mismatch_is_rejected() -> TestResult {
        let mut catalog = Catalog::new(MXN);

        let result = catalog.add_product(product("1", "tacos", Money::from_minor(100, USD))?);

        assert!(matches!(
            result,
            Err(CatalogError::CurrencyMismatch(_, "USD", "MXN"))
        ));
        assert!(catalog.is_empty());

        Ok(())
    }
}
