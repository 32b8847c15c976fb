//! Basket

use rustc_hash::FxHashMap;

use crate::{money::Money, products::Product};

/// An immutable multiset of basket lines.
///
/// Every `add` returns a new basket and leaves the receiver untouched, so older
/// snapshots can be held and priced independently. Quantities are signed and
/// never clamped at zero: adding a negative quantity can take a line below
/// zero. They saturate at the `i64` bounds instead of overflowing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    lines: FxHashMap<Product, i64>,
}

impl Basket {
    /// Create a new, empty basket.
    pub fn new() -> Self {
        Basket::default()
    }

    /// Return a new basket with one more unit of `product`.
    #[must_use]
    pub fn add(&self, product: &Product) -> Self {
        self.add_quantity(product, 1)
    }

    /// Return a new basket with `quantity` added to the line for `product`.
    #[must_use]
    pub fn add_quantity(&self, product: &Product, quantity: i64) -> Self {
        let mut lines = self.lines.clone();

        let line = lines.entry(product.clone()).or_insert(0);
        *line = line.saturating_add(quantity);

        Basket { lines }
    }

    /// Quantity of `product` in the basket, 0 if it has no line.
    pub fn quantity_of(&self, product: &Product) -> i64 {
        self.lines.get(product).copied().unwrap_or(0)
    }

    /// Unit price multiplied by the quantity of `product` in the basket.
    pub fn line_subtotal(&self, product: &Product) -> Money {
        product.unit_price * self.quantity_of(product)
    }

    /// Calculate the subtotal of every line in the basket.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .map(|(product, quantity)| product.unit_price * *quantity)
            .sum()
    }

    /// Iterate over the basket lines in no particular order.
    pub fn lines(&self) -> impl Iterator<Item = (&Product, i64)> {
        self.lines
            .iter()
            .map(|(product, quantity)| (product, *quantity))
    }

    /// Get the number of lines in the basket.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the basket has no lines.
    ///
    /// A line whose quantity has been brought back to zero still counts.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
