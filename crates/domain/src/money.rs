// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monetary amounts and tax rates.
//!
//! Amounts are held as whole cents so sums of line totals are exact.
//! Converting from a caller-supplied number rounds to two decimal places
//! (half away from zero, which is half-up for the non-negative inputs
//! accepted here).

use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// A non-negative monetary amount rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self { cents: 0 };

    /// Creates an amount from a whole number of cents.
    ///
    /// Returns `None` when `cents` is negative.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Option<Self> {
        if cents < 0 {
            None
        } else {
            Some(Self { cents })
        }
    }

    /// Rounds a caller-supplied amount to cents.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMoney` if the value is not finite, is
    /// negative, or does not fit in 64 bits of cents.
    pub fn from_amount(value: f64, field: &str) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidMoney {
                field: field.to_string(),
                reason: String::from("not a finite number"),
            });
        }
        if value < 0.0 {
            return Err(DomainError::InvalidMoney {
                field: field.to_string(),
                reason: format!("got {value}"),
            });
        }

        let cents: i64 = (value * 100.0)
            .round()
            .to_i64()
            .ok_or_else(|| DomainError::InvalidMoney {
                field: field.to_string(),
                reason: format!("{value} is out of range"),
            })?;

        Ok(Self { cents })
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.cents
    }

    /// Returns the amount in dollars.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AmountOverflow` if the sum does not fit.
    pub fn checked_add(self, other: Self) -> Result<Self, DomainError> {
        self.cents
            .checked_add(other.cents)
            .map(|cents| Self { cents })
            .ok_or_else(|| DomainError::AmountOverflow {
                operation: format!("adding {self} and {other}"),
            })
    }

    /// Multiplies the amount by a quantity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AmountOverflow` if the product does not fit.
    pub fn checked_mul(self, quantity: u32) -> Result<Self, DomainError> {
        self.cents
            .checked_mul(i64::from(quantity))
            .map(|cents| Self { cents })
            .ok_or_else(|| DomainError::AmountOverflow {
                operation: format!("multiplying {self} by {quantity}"),
            })
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: f64 = f64::deserialize(deserializer)?;
        Self::from_amount(value, "amount").map_err(serde::de::Error::custom)
    }
}

/// A tax rate.
///
/// Rates pass through the same two-decimal rounding as dollar amounts, so
/// a rate of `0.0875` is stored as `0.09`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TaxRate {
    hundredths: i64,
}

impl TaxRate {
    /// No tax.
    pub const ZERO: Self = Self { hundredths: 0 };

    /// Rounds a caller-supplied rate to two decimals.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMoney` under the same conditions as
    /// [`Money::from_amount`].
    pub fn from_rate(value: f64, field: &str) -> Result<Self, DomainError> {
        let rounded: Money = Money::from_amount(value, field)?;
        Ok(Self {
            hundredths: rounded.cents(),
        })
    }

    /// Creates a rate from a stored number of hundredths.
    ///
    /// Returns `None` when `hundredths` is negative.
    #[must_use]
    pub const fn from_hundredths(hundredths: i64) -> Option<Self> {
        if hundredths < 0 {
            None
        } else {
            Some(Self { hundredths })
        }
    }

    /// Returns the rate in hundredths.
    #[must_use]
    pub const fn hundredths(self) -> i64 {
        self.hundredths
    }

    /// Returns the rate as a fraction.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.hundredths as f64 / 100.0
    }

    /// Computes the tax owed on `subtotal`, rounded half-up to cents.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AmountOverflow` if the product does not fit.
    pub fn apply(self, subtotal: Money) -> Result<Money, DomainError> {
        let overflow = || DomainError::AmountOverflow {
            operation: format!("applying tax rate {} to {subtotal}", self.to_f64()),
        };

        // subtotal (cents) * rate (hundredths) is in ten-thousandths of a dollar
        let scaled: i64 = subtotal
            .cents()
            .checked_mul(self.hundredths)
            .and_then(|v| v.checked_add(50))
            .ok_or_else(overflow)?;

        Ok(Money {
            cents: scaled / 100,
        })
    }
}

impl Serialize for TaxRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for TaxRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: f64 = f64::deserialize(deserializer)?;
        Self::from_rate(value, "taxRate").map_err(serde::de::Error::custom)
    }
}
