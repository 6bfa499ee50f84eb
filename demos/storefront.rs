//! Storefront Example
//!
//! Loads a fixture set, browses one category and prints the cart summary.
//!
//! Use `-f` to load a fixture set by name
//! Use `-c` to pick the category to browse
//! Use `-t` to override the tax rate, e.g. `-t 8%`

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use antonella::{
    fixtures::Fixture,
    listing::write_products,
    storefront::Storefront,
    styles::{category_button, category_button_text, merge, quantity_button},
    utils::ExampleStorefrontArgs,
};

/// Storefront Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleStorefrontArgs::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let fixture = Fixture::from_set(&args.fixture)?;
    let catalog = fixture.catalog()?;

    let mut storefront = Storefront::new(&catalog)
        .with_menu(fixture.menu().iter().cloned())
        .with_cart(fixture.cart()?)?
        .with_tax_rate(args.tax_rate);

    storefront.select_category(&args.category)?;

    let visible = storefront.visible_products();

    info!(
        category = %storefront.selected_category(),
        visible = visible.len(),
        "browsing catalog"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    println!("{}", storefront.title());

    let categories: Vec<String> = storefront
        .categories()
        .iter()
        .map(|category| {
            let active = category.id() == storefront.selected_category();

            merge(&category_button(active), [Some(&category_button_text(active))])
                .paint(category.name())
        })
        .collect();

    println!("{}\n", categories.join(" "));

    write_products(&mut handle, &visible)?;

    storefront.open_cart();

    storefront.receipt()?.write_to(&mut handle, storefront.cart())?;

    for line in storefront.cart().iter() {
        println!(
            "{} {:>3} {}  {}",
            quantity_button(line.quantity() == 0).paint(" - "),
            line.quantity(),
            quantity_button(false).paint(" + "),
            line.name()
        );
    }

    println!();

    let menu: Vec<String> = storefront
        .menu()
        .iter()
        .map(|item| format!("{} {} ({})", item.icon(), item.label(), item.href()))
        .collect();

    println!("{}", menu.join("\n"));

    Ok(())
}
