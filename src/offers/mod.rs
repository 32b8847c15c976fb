//! Offers

use crate::{basket::Basket, discounts::OfferDiscounts};

pub mod buy_n_get_m;
pub mod percentage_off;

pub use buy_n_get_m::BuyNGetMOfOtherAtPercent;
pub use percentage_off::PercentageOffSingleProduct;

/// Offer enum
///
/// Every offer carries an `active` flag, but evaluating an offer with
/// [`Offer::apply_to`] ignores it. Only [`OfferService`](crate::service::OfferService)
/// skips inactive offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offer {
    /// Percentage off every unit of one product
    PercentageOffSingleProduct(PercentageOffSingleProduct),

    /// Buy N of one product, get M of another at a percentage off
    BuyNGetMOfOtherAtPercent(BuyNGetMOfOtherAtPercent),
}

impl Offer {
    /// Return the label shown on the receipt.
    pub fn label(&self) -> &str {
        match self {
            Offer::PercentageOffSingleProduct(offer) => offer.label(),
            Offer::BuyNGetMOfOtherAtPercent(offer) => offer.label(),
        }
    }

    /// Whether the offer is switched on.
    pub fn is_active(&self) -> bool {
        match self {
            Offer::PercentageOffSingleProduct(offer) => offer.is_active(),
            Offer::BuyNGetMOfOtherAtPercent(offer) => offer.is_active(),
        }
    }

    /// Evaluate the offer against a basket, regardless of whether it is active.
    pub fn apply_to(&self, basket: &Basket) -> OfferDiscounts {
        match self {
            Offer::PercentageOffSingleProduct(offer) => offer.apply_to(basket),
            Offer::BuyNGetMOfOtherAtPercent(offer) => offer.apply_to(basket),
        }
    }
}

impl From<PercentageOffSingleProduct> for Offer {
    fn from(offer: PercentageOffSingleProduct) -> Self {
        Offer::PercentageOffSingleProduct(offer)
    }
}

impl From<BuyNGetMOfOtherAtPercent> for Offer {
    fn from(offer: BuyNGetMOfOtherAtPercent) -> Self {
        Offer::BuyNGetMOfOtherAtPercent(offer)
    }
}
