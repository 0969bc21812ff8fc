use crate::error::PizzeriaError;
use rust_decimal::Decimal;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative menu price.
///
/// Wraps `rust_decimal::Decimal` so costs never pass through floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(Decimal);

/// Represents a positive amount handed to a payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
pub struct Amount(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, PizzeriaError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PizzeriaError::ValidationError(
                "Price must not be negative".to_string(),
            ))
        }
    }

    /// Builds a price from whole cents. Used for the fixed menu constants.
    pub const fn from_cents(cents: u32) -> Self {
        Self(Decimal::from_parts(cents, 0, 0, false, 2))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PizzeriaError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PizzeriaError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PizzeriaError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PizzeriaError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<Price> for Amount {
    type Error = PizzeriaError;

    fn try_from(price: Price) -> Result<Self, Self::Error> {
        Self::new(price.0)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
