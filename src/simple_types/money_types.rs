//! Money value type.
//!
//! A strongly-typed monetary amount backed by `rust_decimal::Decimal`.
//! The shipping domain is single-currency, so no currency tag is carried;
//! the point of the type is exact fixed-point arithmetic so that sums of
//! per-line shipping amounts never accumulate binary rounding error.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Scale of minor currency units (pence per pound, cents per dollar).
const MINOR_UNITS_PER_MAJOR: u32 = 2;

/// An exact monetary amount.
///
/// # Examples
///
/// ```
/// use marketplace_shipping::simple_types::Money;
/// use rust_decimal::Decimal;
///
/// let flat = Money::from_decimal(Decimal::new(110, 2)); // 1.10
/// let region = Money::from_decimal(Decimal::new(75, 2)); // 0.75
/// let total = flat + region;
/// assert_eq!(total.value(), Decimal::new(185, 2));
///
/// // Deductions are configured in minor units (e.g. pence)
/// let deduction = Money::from_minor_units(Decimal::from(50));
/// assert_eq!(deduction.value(), Decimal::new(50, 2)); // 0.50
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a `Money` value from a `Decimal` amount in major units.
    #[must_use]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a `Money` value from an amount expressed in minor currency
    /// units (e.g. pence), dividing by 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use marketplace_shipping::simple_types::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let fifty_pence = Money::from_minor_units(Decimal::from(50));
    /// assert_eq!(fifty_pence.value(), Decimal::new(5, 1));
    /// ```
    #[must_use]
    pub fn from_minor_units(amount: Decimal) -> Self {
        Self(amount / Decimal::from(10u32.pow(MINOR_UNITS_PER_MAJOR)))
    }

    /// Returns the zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
