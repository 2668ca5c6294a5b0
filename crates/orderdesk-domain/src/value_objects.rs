//! Value objects representing immutable domain concepts
//!
//! Every value object is built through a single `create` factory. The factory
//! is the only place its invariant is checked, and the arithmetic helpers
//! route their results back through it, so an instance that exists is valid.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Email address in `local@domain.tld` form
///
/// Equality is exact string equality: no case folding or trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and wrap an email address
    pub fn create(value: &str) -> DomainResult<Self> {
        if value.trim().is_empty() {
            return Err(DomainError::new("email is required"));
        }
        if !EMAIL_PATTERN.is_match(value) {
            return Err(DomainError::new(format!(
                "email format is invalid: {}",
                value
            )));
        }
        Ok(Self(value.to_string()))
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::create(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative, finite price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Lowest accepted price (inclusive)
    pub const MIN: f64 = 0.0;

    /// Validate and wrap a price
    pub fn create(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::new("price must be a finite number"));
        }
        if value < Self::MIN {
            return Err(DomainError::new(format!(
                "price must be greater than or equal to {}, got {}",
                Self::MIN,
                value
            )));
        }
        Ok(Self(value))
    }

    /// Multiply by a non-negative quantity, producing a new validated price
    ///
    /// A product that overflows to infinity fails like any invalid price.
    pub fn multiply(&self, quantity: f64) -> DomainResult<Self> {
        if quantity < 0.0 {
            return Err(DomainError::new(format!(
                "price multiplier must not be negative, got {}",
                quantity
            )));
        }
        Self::create(self.0 * quantity)
    }

    /// Get the wrapped number
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> DomainResult<Self> {
        Self::create(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order quantity: a whole number of at least one and below 2^64
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u64")]
pub struct Quantity(u64);

impl Quantity {
    /// Smallest accepted quantity (inclusive)
    pub const MIN: u64 = 1;

    /// Exclusive upper bound: 2^64, the first integer a `u64` cannot hold
    pub const UPPER_BOUND: f64 = 18_446_744_073_709_551_616.0;

    /// Validate and wrap a quantity
    ///
    /// Raw input is an `f64` so that fractional and non-finite values coming
    /// from untyped sources are rejected here rather than truncated upstream.
    pub fn create(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::new("quantity must be a finite number"));
        }
        if value.fract() != 0.0 {
            return Err(DomainError::new(format!(
                "quantity must be an integer, got {}",
                value
            )));
        }
        if value < Self::MIN as f64 {
            return Err(DomainError::new(format!(
                "quantity must be at least {}, got {}",
                Self::MIN,
                value
            )));
        }
        if value >= Self::UPPER_BOUND {
            return Err(DomainError::new(format!(
                "quantity must be below 2^64, got {}",
                value
            )));
        }
        Ok(Self(value as u64))
    }

    /// Get the wrapped count
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<f64> for Quantity {
    type Error = DomainError;

    fn try_from(value: f64) -> DomainResult<Self> {
        Self::create(value)
    }
}

impl From<Quantity> for u64 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bounded monetary amount in `[MIN, MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u32")]
pub struct Amount(u32);

impl Amount {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 10_000;

    /// Validate and wrap an amount
    pub fn create(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::new("amount must be a finite number"));
        }
        if value.fract() != 0.0 {
            return Err(DomainError::new(format!(
                "amount must be an integer, got {}",
                value
            )));
        }
        if value < f64::from(Self::MIN) {
            return Err(DomainError::new(format!(
                "amount is below the minimum of {}, got {}",
                Self::MIN,
                value
            )));
        }
        if value > f64::from(Self::MAX) {
            return Err(DomainError::new(format!(
                "amount exceeds the maximum of {}, got {}",
                Self::MAX,
                value
            )));
        }
        Ok(Self(value as u32))
    }

    /// Add two amounts; a sum above `MAX` fails
    pub fn add(&self, other: &Amount) -> DomainResult<Self> {
        Self::create(f64::from(self.0) + f64::from(other.0))
    }

    /// Get the wrapped number
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = DomainError;

    fn try_from(value: f64) -> DomainResult<Self> {
        Self::create(value)
    }
}

impl From<Amount> for u32 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rejects_blank_before_pattern() {
        let err = Email::create("   ").unwrap_err();
        assert_eq!(err.reason(), "email is required");
    }

    #[test]
    fn test_email_requires_single_at_and_dotted_domain() {
        assert!(Email::create("a@b.com").is_ok());
        assert!(Email::create("a@@b.com").is_err());
        assert!(Email::create("a@b@c.com").is_err());
        assert!(Email::create("a@bcom").is_err());
        assert!(Email::create("a b@c.com").is_err());
    }

    #[test]
    fn test_price_boundary_zero_is_valid() {
        assert_eq!(Price::create(0.0).unwrap().value(), 0.0);
        assert!(Price::create(-0.01).is_err());
    }

    #[test]
    fn test_price_multiply_overflow_is_domain_error() {
        let price = Price::create(f64::MAX).unwrap();
        assert!(price.multiply(2.0).is_err());
        assert!(price.multiply(-1.0).is_err());
    }

    #[test]
    fn test_quantity_boundaries() {
        assert_eq!(Quantity::create(1.0).unwrap().value(), 1);
        assert!(Quantity::create(0.0).is_err());
        assert!(Quantity::create(1.5).is_err());
        assert!(Quantity::create(f64::NAN).is_err());
    }

    #[test]
    fn test_quantity_rejects_integers_from_two_to_the_64() {
        let largest = Quantity::create(18_446_744_073_709_549_568.0).unwrap();
        assert_eq!(largest.value(), 18_446_744_073_709_549_568);

        let err = Quantity::create(Quantity::UPPER_BOUND).unwrap_err();
        assert!(err.reason().contains("below 2^64"));
        assert!(Quantity::create(1e20).is_err());
    }

    #[test]
    fn test_amount_add_checks_upper_bound() {
        let max = Amount::create(10_000.0).unwrap();
        let one = Amount::create(1.0).unwrap();
        assert!(max.add(&one).is_err());
        assert_eq!(
            Amount::create(100.0)
                .unwrap()
                .add(&Amount::create(200.0).unwrap())
                .unwrap()
                .value(),
            300
        );
    }
}
