//! Price Basket CLI
//!
//! ```text
//! pricebasket Apples Milk Bread
//! ```

use std::io;

use anyhow::{Context, Result};
use tracing::{debug, info};

use pricebasket::{
    config::Config, fixtures::Fixture, observability, receipt::Receipt,
    tokens::basket_from_tokens,
};

/// Price Basket entry point
fn main() -> Result<()> {
    // Load configuration from .env and CLI arguments
    let config = Config::load().unwrap_or_else(|e| e.exit());

    observability::init(&config)?;

    let fixture = match &config.fixtures {
        Some(base_path) => Fixture::from_set_in(base_path, &config.set)
            .with_context(|| format!("loading fixture set {:?}", config.set))?,
        None => Fixture::builtin().context("loading built-in fixtures")?,
    };

    let catalog = fixture.catalog()?;
    let service = fixture.offer_service();
    let currency = fixture.currency()?;

    info!(
        products = catalog.len(),
        offers = service.available_offers().len(),
        "fixtures ready"
    );

    let basket = basket_from_tokens(&catalog, config.items.as_slice())?;

    debug!(lines = basket.len(), "basket built");

    let receipt = Receipt::new(&basket, &service);

    let stdout = io::stdout();
    let handle = stdout.lock();

    receipt.write_to(handle, &basket, currency, config.format)?;

    Ok(())
}
