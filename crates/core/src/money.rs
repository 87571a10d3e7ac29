//! Money value object.
//!
//! Amounts are stored in integer cents (smallest currency unit), so a
//! subtotal can never go negative or drift through float rounding. Display
//! formatting (`$X.YY`) is the single price-formatting contract every view
//! shares.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A monetary amount in integer cents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Amount from integer cents.
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Amount from whole currency units (e.g. `from_dollars(299)` = $299.00).
    pub fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Line-total arithmetic: unit price times a quantity.
    ///
    /// Saturates on overflow; quantities are bounded well below any value
    /// that could overflow u64 cents in practice.
    pub fn mul_quantity(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl ValueObject for Money {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_dollars_and_cents() {
        assert_eq!(Money::from_cents(68700).to_string(), "$687.00");
        assert_eq!(Money::from_cents(4505).to_string(), "$45.05");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn from_dollars_is_whole_units() {
        assert_eq!(Money::from_dollars(299), Money::from_cents(29900));
    }

    #[test]
    fn mul_quantity_scales_cents() {
        assert_eq!(
            Money::from_dollars(299).mul_quantity(2),
            Money::from_cents(59800)
        );
    }

    #[test]
    fn sum_over_iterator_starts_at_zero() {
        let total: Money = [Money::from_dollars(1), Money::from_cents(50)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(150));

        let empty: Money = core::iter::empty::<Money>().sum();
        assert_eq!(empty, Money::ZERO);
    }
}
