//! Money type for displaying prices and totals.
//!
//! Amounts are plain non-negative integers in the catalog's price unit.
//! The storefront never converts, rounds or divides; it only multiplies
//! by quantities and sums, so the arithmetic saturates instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CommerceError::UnknownCurrency(s.to_string()))
    }
}

/// An integer amount tagged with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the catalog's price unit.
    pub amount: u64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: u64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Multiply by a quantity, saturating at `u64::MAX`.
    pub fn multiply(&self, factor: u64) -> Money {
        Money::new(self.amount.saturating_mul(factor), self.currency)
    }

    /// Format as a display string (e.g., "₹599").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.amount)
    }
}

impl Add for Money {
    type Output = Money;

    /// Sums keep the left-hand currency; a catalog only ever has one.
    fn add(self, other: Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount), self.currency)
    }
}

impl Mul<u64> for Money {
    type Output = Money;

    fn mul(self, factor: u64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(599, Currency::INR).display(), "\u{20b9}599");
        assert_eq!(Money::new(100, Currency::USD).to_string(), "$100");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(299, Currency::INR);
        let b = Money::new(199, Currency::INR);
        assert_eq!((a * 2 + b).amount, 797);
    }

    #[test]
    fn test_money_saturates() {
        let big = Money::new(u64::MAX - 1, Currency::INR);
        assert_eq!((big * 3).amount, u64::MAX);
        assert_eq!((big + Money::new(10, Currency::INR)).amount, u64::MAX);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::USD));
        assert!("XXX".parse::<Currency>().is_err());
    }
}
