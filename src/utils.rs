//! Utils

use clap::Parser;

use crate::pricing::TaxRate;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Browse the storefront catalog and price a cart", long_about = None)]
pub struct ExampleStorefrontArgs {
    /// Fixture set to load the catalog, menu & cart from
    #[arg(short, long, env = "STOREFRONT_FIXTURE", default_value = "storefront")]
    pub fixture: String,

    /// Category to browse ("all" shows every product)
    #[arg(short, long, env = "STOREFRONT_CATEGORY", default_value = "all")]
    pub category: String,

    /// Tax rate, as a fraction ("0.16") or in percent points ("16%")
    #[arg(short, long, env = "STOREFRONT_TAX_RATE", default_value = "16%")]
    pub tax_rate: TaxRate,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl ExampleStorefrontArgs {
    /// Load arguments from the command line, the environment and a `.env` file if present
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
