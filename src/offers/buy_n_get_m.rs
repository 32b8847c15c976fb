//! Buy N Get M Of Other At Percent
//!
//! Every N units of a trigger product unlock M units of a target product at a
//! percentage off

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use smallvec::smallvec;

use crate::{
    basket::Basket,
    discounts::{AppliedDiscount, OfferDiscounts},
    products::Product,
};

/// A conditional discount on one product, unlocked by buying another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyNGetMOfOtherAtPercent {
    label: String,
    trigger_product: Product,
    trigger_quantity: NonZeroU32,
    target_product: Product,
    target_quantity_per_trigger: u32,
    percent: Decimal,
    active: bool,
}

impl BuyNGetMOfOtherAtPercent {
    /// Create a new, active buy-N-get-M offer.
    pub fn new(
        label: impl Into<String>,
        trigger_product: Product,
        trigger_quantity: NonZeroU32,
        target_product: Product,
        target_quantity_per_trigger: u32,
        percent: Decimal,
    ) -> Self {
        Self {
            label: label.into(),
            trigger_product,
            trigger_quantity,
            target_product,
            target_quantity_per_trigger,
            percent,
            active: true,
        }
    }

    /// Return a copy of this offer with the given active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Return the label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return the product that must be bought
    pub fn trigger_product(&self) -> &Product {
        &self.trigger_product
    }

    /// Units of the trigger product needed per application (N)
    pub fn trigger_quantity(&self) -> NonZeroU32 {
        self.trigger_quantity
    }

    /// Return the product that gets discounted
    pub fn target_product(&self) -> &Product {
        &self.target_product
    }

    /// Units of the target product discounted per application (M)
    pub fn target_quantity_per_trigger(&self) -> u32 {
        self.target_quantity_per_trigger
    }

    /// Return the percentage taken off each eligible target unit
    pub fn percent(&self) -> Decimal {
        self.percent
    }

    /// Whether the offer is switched on
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of target units the basket's trigger lines unlock.
    ///
    /// Partial triggers earn nothing: 25 trigger units with N = 10 unlock two
    /// applications. Saturates at `i64::MAX`.
    pub fn eligible_target_quantity(&self, basket: &Basket) -> i64 {
        let applications = basket
            .quantity_of(&self.trigger_product)
            .div_euclid(i64::from(self.trigger_quantity.get()));

        applications.saturating_mul(i64::from(self.target_quantity_per_trigger))
    }

    /// Evaluate the offer against a basket.
    ///
    /// Yields one discount line when triggers unlock target units and the
    /// resulting amount is positive, and nothing otherwise. The discounted
    /// quantity never exceeds the target units actually in the basket.
    pub fn apply_to(&self, basket: &Basket) -> OfferDiscounts {
        let eligible = self.eligible_target_quantity(basket);
        let discounted = eligible.min(basket.quantity_of(&self.target_product));
        let amount = self.target_product.unit_price.percent_of(self.percent) * discounted;

        if amount.is_positive() && eligible > 0 {
            smallvec![AppliedDiscount::new(self.label.clone(), amount)]
        } else {
            smallvec![]
        }
    }
}
