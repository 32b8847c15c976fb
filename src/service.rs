//! Offer Service
//!
//! Applies every active offer to a basket and collects the positive discounts.

use tracing::{debug, trace};

use crate::{basket::Basket, discounts::AppliedDiscount, offers::Offer};

/// Holds the configured offers, active or not, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct OfferService {
    offers: Vec<Offer>,
}

impl OfferService {
    /// Create a new offer service.
    pub fn new(offers: impl Into<Vec<Offer>>) -> Self {
        OfferService {
            offers: offers.into(),
        }
    }

    /// Every configured offer, including inactive ones.
    pub fn available_offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Calculate the discounts for a basket.
    ///
    /// Inactive offers are skipped, the rest are evaluated in declaration order
    /// and their results concatenated, and any line that is not strictly
    /// positive is dropped. An empty basket short-circuits without evaluating
    /// any offer.
    pub fn calculate_discounts(&self, basket: &Basket) -> Vec<AppliedDiscount> {
        if basket.is_empty() {
            debug!("basket is empty; skipping offer evaluation");

            return Vec::new();
        }

        self.offers
            .iter()
            .filter(|offer| {
                let active = offer.is_active();

                if !active {
                    debug!(offer = offer.label(), "skipping inactive offer");
                }

                active
            })
            .flat_map(|offer| {
                let discounts = offer.apply_to(basket);

                trace!(
                    offer = offer.label(),
                    lines = discounts.len(),
                    "evaluated offer"
                );

                discounts
            })
            .filter(|discount| discount.amount.is_positive())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rust_decimal::Decimal;

    use crate::{
        money::Money,
        offers::{BuyNGetMOfOtherAtPercent, PercentageOffSingleProduct},
        products::Product,
    };

    use super::*;

    fn apples() -> Product {
        Product::new("apples", "Apples", "bag", Money::from_minor(100))
    }

    fn soup() -> Product {
        Product::new("soup", "Soup", "tin", Money::from_minor(65))
    }

    fn bread() -> Product {
        Product::new("bread", "Bread", "loaf", Money::from_minor(80))
    }

    fn apples_offer() -> PercentageOffSingleProduct {
        PercentageOffSingleProduct::new("Apples 10% off", apples(), Decimal::TEN)
    }

    fn soup_offer() -> BuyNGetMOfOtherAtPercent {
        BuyNGetMOfOtherAtPercent::new(
            "Buy 2 Soup get Bread 50% off",
            soup(),
            NonZeroU32::MIN.saturating_add(1),
            bread(),
            1,
            Decimal::new(50, 0),
        )
    }

    fn full_basket() -> Basket {
        Basket::new()
            .add_quantity(&apples(), 3)
            .add_quantity(&soup(), 4)
            .add_quantity(&bread(), 2)
    }

    #[test]
    fn available_offers_includes_inactive() {
        let service = OfferService::new([
            Offer::from(apples_offer()),
            Offer::from(soup_offer().with_active(false)),
        ]);

        assert_eq!(service.available_offers().len(), 2);
    }

    #[test]
    fn empty_basket_yields_no_discounts() {
        let service = OfferService::new([Offer::from(apples_offer()), Offer::from(soup_offer())]);

        assert!(service.calculate_discounts(&Basket::new()).is_empty());
    }

    #[test]
    fn no_offers_yields_no_discounts() {
        assert!(OfferService::default().calculate_discounts(&full_basket()).is_empty());
    }

    #[test]
    fn discounts_follow_declaration_order() {
        let service = OfferService::new([Offer::from(soup_offer()), Offer::from(apples_offer())]);

        let labels: Vec<String> = service
            .calculate_discounts(&full_basket())
            .into_iter()
            .map(|discount| discount.label)
            .collect();

        assert_eq!(labels, ["Buy 2 Soup get Bread 50% off", "Apples 10% off"]);
    }

    #[test]
    fn inactive_offers_are_skipped() {
        let service = OfferService::new([
            Offer::from(apples_offer().with_active(false)),
            Offer::from(soup_offer()),
        ]);

        assert_eq!(
            service.calculate_discounts(&full_basket()),
            [AppliedDiscount::new(
                "Buy 2 Soup get Bread 50% off",
                Money::from_minor(80)
            )]
        );
    }

    #[test]
    fn zero_amount_lines_are_dropped() {
        let service = OfferService::new([Offer::from(apples_offer())]);
        let basket = Basket::new().add(&bread());

        assert!(service.calculate_discounts(&basket).is_empty());
    }

    #[test]
    fn negative_amount_lines_are_dropped() {
        let service = OfferService::new([Offer::from(apples_offer())]);
        let basket = Basket::new().add_quantity(&apples(), -2);

        assert!(service.calculate_discounts(&basket).is_empty());
    }
}
