//! Property tests for the catalog filter and the cart ledger.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::MXN};

use antonella::{
    cart::{CartError, CartLine, decrement, increment},
    catalog::filter,
    categories::CategoryId,
    pricing::{TAX_RATE, TaxRate, line_subtotal, subtotal, tax, total},
    products::{NewProduct, Product},
};

const CATEGORIES: [&str; 4] = ["hamburguesas", "tacos", "pollos", "refrescos"];

fn category_name(index: usize) -> &'static str {
    CATEGORIES.get(index).copied().unwrap_or("tacos")
}

fn products<'a>(categories: &[usize]) -> Result<Vec<Product<'a>>, TestCaseError> {
    categories
        .iter()
        .enumerate()
        .map(|(i, &category)| {
            Product::try_from(NewProduct {
                id: (i + 1).to_string(),
                name: format!("Product {i}"),
                category: category_name(category).to_string(),
                image: String::new(),
                discount: 0,
                stock: 10,
                price: Money::from_minor(100, MXN),
                description: String::new(),
            })
            .map_err(|err| TestCaseError::fail(err.to_string()))
        })
        .collect()
}

fn lines<'a>(entries: &[(i64, u32)]) -> Result<Vec<CartLine<'a>>, TestCaseError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, &(minor, quantity))| {
            CartLine::new(
                (i + 1).to_string(),
                format!("Product {i}"),
                "",
                Money::from_minor(minor, MXN),
                quantity,
            )
            .map_err(|err| TestCaseError::fail(err.to_string()))
        })
        .collect()
}

proptest! {
    #[test]
    fn filter_keeps_only_matching_products_in_order(
        categories in proptest::collection::vec(0..CATEGORIES.len(), 0..30),
        selected in 0..CATEGORIES.len(),
    ) {
        let products = products(&categories)?;
        let category = CategoryId::new(category_name(selected))?;

        let visible = filter(&products, &category);

        prop_assert!(visible.iter().all(|product| product.category() == &category));

        let expected: Vec<&str> = products
            .iter()
            .filter(|product| product.category() == &category)
            .map(|product| product.id().as_str())
            .collect();
        let actual: Vec<&str> = visible.iter().map(|product| product.id().as_str()).collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn filter_all_is_identity(
        categories in proptest::collection::vec(0..CATEGORIES.len(), 0..30),
    ) {
        let products = products(&categories)?;

        let visible = filter(&products, &CategoryId::all());

        prop_assert_eq!(visible.len(), products.len());
        prop_assert!(visible.iter().zip(&products).all(|(a, b)| *a == b));
    }

    #[test]
    fn subtotal_is_sum_of_price_times_quantity(
        entries in proptest::collection::vec((0..1_000_000i64, 0..1_000u32), 0..20),
    ) {
        let lines = lines(&entries)?;

        let expected: i64 = entries
            .iter()
            .map(|&(minor, quantity)| minor * i64::from(quantity))
            .sum();

        prop_assert_eq!(subtotal(&lines, MXN)?, Money::from_minor(expected, MXN));

        for line in &lines {
            prop_assert!(line_subtotal(line)?.to_minor_units() >= 0);
        }
    }

    #[test]
    fn tax_is_exact_and_total_is_subtotal_plus_tax(
        entries in proptest::collection::vec((0..1_000_000i64, 0..1_000u32), 0..20),
    ) {
        let lines = lines(&entries)?;
        let subtotal = subtotal(&lines, MXN)?;

        let tax = tax(&subtotal, TaxRate::default())?;
        let total = total(&subtotal, tax)?;

        prop_assert_eq!(tax, *subtotal.amount() * TAX_RATE);
        prop_assert_eq!(total, *subtotal.amount() + tax);
        prop_assert!(total >= Decimal::ZERO);
    }

    #[test]
    fn increment_then_decrement_restores_quantity(
        minor in 0..1_000_000i64,
        quantity in prop_oneof![0..u32::MAX, Just(u32::MAX)],
    ) {
        let line = CartLine::new("1", "Product", "", Money::from_minor(minor, MXN), quantity)?;

        match increment(&line) {
            Ok(next) => prop_assert_eq!(decrement(&next), line),
            Err(err) => {
                prop_assert_eq!(quantity, u32::MAX);
                prop_assert_eq!(err, CartError::QuantityOverflow(line.product().clone()));
            }
        }
    }

    #[test]
    fn decrement_never_goes_below_zero(
        minor in 0..1_000_000i64,
        quantity in 0..5u32,
        steps in 0..10usize,
    ) {
        let mut line = CartLine::new("1", "Product", "", Money::from_minor(minor, MXN), quantity)?;

        for _ in 0..steps {
            line = decrement(&line);
        }

        let expected = quantity.saturating_sub(u32::try_from(steps)?);

        prop_assert_eq!(line.quantity(), expected);
    }
}
