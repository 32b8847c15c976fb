//! Offer Fixtures

use std::num::NonZeroU32;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, products::parse_percentage},
    offers::{BuyNGetMOfOtherAtPercent, Offer, PercentageOffSingleProduct},
    products::Product,
};

/// Wrapper for offers in YAML
#[derive(Debug, Deserialize)]
pub struct OffersFixture {
    /// Offers in declaration order
    pub offers: Vec<OfferFixture>,
}

/// Offer fixture from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OfferFixture {
    /// Percentage off one product
    PercentageOffSingleProduct {
        /// Receipt label
        label: String,

        /// SKU of the discounted product
        product: String,

        /// Percentage, e.g. "10%"
        percent: String,

        /// Whether the offer is switched on
        #[serde(default = "active_by_default")]
        active: bool,
    },

    /// Buy N of one product, get M of another at a percentage off
    BuyNGetMOfOtherAtPercent {
        /// Receipt label
        label: String,

        /// SKU of the product that must be bought
        trigger_product: String,

        /// Units of the trigger product per application
        trigger_quantity: u32,

        /// SKU of the discounted product
        target_product: String,

        /// Units of the target product discounted per application
        #[serde(default = "one")]
        target_quantity_per_trigger: u32,

        /// Percentage taken off each eligible target unit
        percent: String,

        /// Whether the offer is switched on
        #[serde(default = "active_by_default")]
        active: bool,
    },
}

fn active_by_default() -> bool {
    true
}

fn one() -> u32 {
    1
}

impl OfferFixture {
    /// Convert to an `Offer`, resolving product SKUs against `products`.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced product is missing, a percentage is
    /// malformed, or the trigger quantity is zero.
    pub fn try_into_offer(
        self,
        products: &FxHashMap<String, Product>,
    ) -> Result<Offer, FixtureError> {
        match self {
            OfferFixture::PercentageOffSingleProduct {
                label,
                product,
                percent,
                active,
            } => {
                let product = resolve(products, &product)?;
                let percent = parse_percentage(&percent)?;

                Ok(PercentageOffSingleProduct::new(label, product, percent)
                    .with_active(active)
                    .into())
            }
            OfferFixture::BuyNGetMOfOtherAtPercent {
                label,
                trigger_product,
                trigger_quantity,
                target_product,
                target_quantity_per_trigger,
                percent,
                active,
            } => {
                let Some(trigger_quantity) = NonZeroU32::new(trigger_quantity) else {
                    return Err(FixtureError::InvalidOfferData(format!(
                        "{label}: trigger_quantity must be at least 1"
                    )));
                };

                let trigger_product = resolve(products, &trigger_product)?;
                let target_product = resolve(products, &target_product)?;
                let percent = parse_percentage(&percent)?;

                Ok(BuyNGetMOfOtherAtPercent::new(
                    label,
                    trigger_product,
                    trigger_quantity,
                    target_product,
                    target_quantity_per_trigger,
                    percent,
                )
                .with_active(active)
                .into())
            }
        }
    }
}

fn resolve(products: &FxHashMap<String, Product>, sku: &str) -> Result<Product, FixtureError> {
    products
        .get(sku)
        .cloned()
        .ok_or_else(|| FixtureError::ProductNotFound(sku.to_string()))
}
