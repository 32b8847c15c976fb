//! Money

use std::{
    fmt,
    iter::Sum,
    ops::{Add, Deref, Mul, Sub},
};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// An exact decimal amount of money.
///
/// Prices, discounts and totals never go through binary floating point, so
/// percentage arithmetic such as 33.33% of £0.65 stays exact until it is rounded
/// for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Zero.
    pub const ZERO: Money = Money {
        amount: Decimal::ZERO,
    };

    /// Creates a new amount from an exact decimal.
    pub fn new(amount: Decimal) -> Self {
        Money { amount }
    }

    /// Creates a new amount from minor units (pence/cents).
    pub fn from_minor(minor: i64) -> Self {
        Money {
            amount: Decimal::new(minor, 2),
        }
    }

    /// Returns the exact decimal amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Whether the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Whether the amount is exactly zero, regardless of scale.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns `percent` percent of this amount, where `percent` is expressed in
    /// percentage points (`10` is ten percent).
    #[must_use]
    pub fn percent_of(&self, percent: Decimal) -> Self {
        Money {
            amount: self.amount * percent / Decimal::ONE_HUNDRED,
        }
    }

    /// Rounds to the given number of decimal places and returns the value in
    /// those minor units, or `None` if it does not fit in an `i64`.
    pub fn to_minor_units(&self, exponent: u32) -> Option<i64> {
        let scale = Decimal::from(10_i64.checked_pow(exponent)?);

        self.amount
            .round_dp_with_strategy(exponent, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(scale)?
            .to_i64()
    }
}

impl Deref for Money {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.amount
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::new(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money::new(self.amount + rhs.amount)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money::new(self.amount - rhs.amount)
    }
}

/// Multiply by a quantity of units.
impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Self::Output {
        Money::new(self.amount * Decimal::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.amount.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_minor_is_exact() {
        assert_eq!(Money::from_minor(65).amount(), Decimal::new(65, 2));
    }

    #[test]
    fn money_derefs_to_decimal() {
        let money = Money::from_minor(100);

        assert_eq!(*money, Decimal::ONE);
    }

    #[test]
    fn percent_of_keeps_sub_penny_precision() {
        let discount = Money::from_minor(65).percent_of(Decimal::new(3333, 2));

        assert_eq!(discount.amount(), Decimal::new(216_645, 6));
    }

    #[test]
    fn percent_of_zero_and_hundred() {
        let price = Money::from_minor(80);

        assert!(price.percent_of(Decimal::ZERO).is_zero());
        assert_eq!(price.percent_of(Decimal::ONE_HUNDRED), price);
    }

    #[test]
    fn multiply_by_negative_quantity() {
        assert_eq!(Money::from_minor(80) * -2, Money::from_minor(-160));
    }

    #[test]
    fn sum_of_amounts() {
        let total: Money = [Money::from_minor(300), Money::from_minor(260)]
            .iter()
            .sum();

        assert_eq!(total, Money::from_minor(560));
    }

    #[test]
    fn to_minor_units_rounds_half_away_from_zero() {
        assert_eq!(Money::new(Decimal::new(65, 3)).to_minor_units(2), Some(7));
        assert_eq!(Money::new(Decimal::new(-65, 3)).to_minor_units(2), Some(-7));
        assert_eq!(Money::new(Decimal::new(64, 3)).to_minor_units(2), Some(6));
    }

    #[test]
    fn equality_ignores_scale() {
        assert_eq!(Money::new(Decimal::new(80, 2)), Money::new(Decimal::new(8, 1)));
    }
}
