//! Discounts

use smallvec::SmallVec;

use crate::money::Money;

/// Discounts produced by a single offer evaluation.
///
/// Each offer variant yields at most one line, so these never spill to the heap.
pub type OfferDiscounts = SmallVec<[AppliedDiscount; 1]>;

/// Result of applying an offer to a basket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedDiscount {
    /// Offer label, shown verbatim on the receipt
    pub label: String,

    /// Amount subtracted from the subtotal
    pub amount: Money,
}

impl AppliedDiscount {
    /// Create a new applied discount.
    pub fn new(label: impl Into<String>, amount: Money) -> Self {
        AppliedDiscount {
            label: label.into(),
            amount,
        }
    }
}

/// Sum the amounts of a list of discounts.
pub fn total_discount(discounts: &[AppliedDiscount]) -> Money {
    discounts.iter().map(|discount| discount.amount).sum()
}
