//! Percentage Off Single Product
//!
//! A percentage discount on every unit of one product in the basket

use rust_decimal::Decimal;
use smallvec::smallvec;

use crate::{
    basket::Basket,
    discounts::{AppliedDiscount, OfferDiscounts},
    products::Product,
};

/// A percentage discount on every unit of a single product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageOffSingleProduct {
    label: String,
    product: Product,
    percent: Decimal,
    active: bool,
}

impl PercentageOffSingleProduct {
    /// Create a new, active percentage-off offer.
    ///
    /// `percent` is in percentage points (`10` is ten percent) and is not
    /// range-checked.
    pub fn new(label: impl Into<String>, product: Product, percent: Decimal) -> Self {
        Self {
            label: label.into(),
            product,
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

    /// Return the discounted product
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Return the percentage
    pub fn percent(&self) -> Decimal {
        self.percent
    }

    /// Whether the offer is switched on
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Evaluate the offer against a basket.
    ///
    /// Always yields exactly one discount line, even when the product is absent
    /// and the amount is therefore zero.
    pub fn apply_to(&self, basket: &Basket) -> OfferDiscounts {
        let quantity = basket.quantity_of(&self.product);
        let amount = self.product.unit_price.percent_of(self.percent) * quantity;

        smallvec![AppliedDiscount::new(self.label.clone(), amount)]
    }
}
