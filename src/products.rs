//! Products

use crate::money::Money;

/// Product
///
/// Products are plain values: two products with identical fields are
/// interchangeable as basket keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    /// Stock-keeping identifier
    pub sku: String,

    /// Product name
    pub name: String,

    /// Unit the product is sold in (e.g. "tin", "bag")
    pub unit: String,

    /// Price per unit
    pub unit_price: Money,
}

impl Product {
    /// Create a new product.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        unit_price: Money,
    ) -> Self {
        Product {
            sku: sku.into(),
            name: name.into(),
            unit: unit.into(),
            unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_with_equal_fields_are_equal() {
        let a = Product::new("soup", "Soup", "tin", Money::from_minor(65));
        let b = Product::new("soup", "Soup", "tin", Money::from_minor(65));

        assert_eq!(a, b);
    }

    #[test]
    fn products_differing_in_price_are_distinct() {
        let a = Product::new("soup", "Soup", "tin", Money::from_minor(65));
        let b = Product::new("soup", "Soup", "tin", Money::from_minor(70));

        assert_ne!(a, b);
    }
}
