//! Price Basket prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::Basket,
    catalog::{Catalog, CatalogError},
    discounts::{AppliedDiscount, total_discount},
    fixtures::{Fixture, FixtureError},
    money::Money,
    offers::{BuyNGetMOfOtherAtPercent, Offer, PercentageOffSingleProduct},
    products::Product,
    receipt::{Receipt, ReceiptError, ReceiptStyle},
    service::OfferService,
    tokens::{TokenError, basket_from_tokens},
};
