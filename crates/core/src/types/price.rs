//! Type-safe price representation using decimal arithmetic.
//!
//! All catalog prices are in Brazilian reais. Prices are stored as exact
//! decimals and serialized to JSON as numbers, the way the dashboard front end
//! consumes them.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price must be a number, got '{0}'")]
    NotANumber(String),
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative price in reais.
///
/// ## Examples
///
/// ```
/// use chatclothes_core::Price;
///
/// let price: Price = "89,9".parse().unwrap();
/// assert_eq!(price.to_string(), "R$ 89.90");
/// assert!("-1".parse::<Price>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Parse a price typed by a person. Accepts `,` as the decimal separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a number or is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let normalized = s.trim().replace(',', ".");
        let amount = Decimal::from_str(&normalized)
            .map_err(|_| PriceError::NotANumber(s.trim().to_owned()))?;
        Self::new(amount)
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dot_and_comma() {
        assert_eq!(Price::parse("49.90").unwrap().amount(), Decimal::new(4990, 2));
        assert_eq!(Price::parse("49,90").unwrap().amount(), Decimal::new(4990, 2));
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!(matches!(
            Price::parse("barato"),
            Err(PriceError::NotANumber(_))
        ));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(Price::new(Decimal::new(-1, 0)), Err(PriceError::Negative));
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(Price::parse("120").unwrap().to_string(), "R$ 120.00");
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Price::parse("89.9").unwrap()).unwrap();
        assert_eq!(json, "89.9");

        let parsed: Price = serde_json::from_str("59.5").unwrap();
        assert_eq!(parsed.amount(), Decimal::new(595, 1));
    }
}
