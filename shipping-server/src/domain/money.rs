//! Monetary amounts.

use std::fmt;

use serde::{Serialize, Serializer};

/// A non-negative amount of money held as whole cents.
///
/// Keeping the amount in integer cents means the two fractional digits are
/// exact. It is serialized as a JSON number with the cents after the
/// decimal point, e.g. `23.85`.
///
/// # Examples
///
/// ```
/// use shipping_server::domain::Money;
///
/// let cost = Money::from_cents(2385);
/// assert_eq!(cost.to_string(), "23.85");
/// assert_eq!(Money::ZERO.to_string(), "0.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Money {
    cents: u64,
}

impl Money {
    /// Zero.
    pub const ZERO: Money = Money { cents: 0 };

    /// Create an amount from whole cents.
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Whole cents.
    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// The amount in major units, e.g. `23.85`.
    pub fn as_f64(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
