//! # Money Module
//!
//! Provides the `Money` type for monetary results.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: exact decimals in, integer cents out                     │
//! │    Inputs (unit prices, percents) are rust_decimal::Decimal            │
//! │    Every produced amount is rounded ONCE into Money (cents)            │
//! │    Chained strategies only ever see already-rounded amounts           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricer_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_cents(1099); // 10.99
//! assert_eq!(price.to_string(), "10.99");
//!
//! let rounded = Money::from_decimal(Decimal::new(10_005, 3)).unwrap(); // 10.005
//! assert_eq!(rounded.cents(), 1000); // half-to-even
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};

/// Number of decimal places every monetary result is rounded to.
pub const MONEY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: stacked bulk discounts may legitimately go below zero
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency**: amounts are currency-less, the caller owns formatting
///
/// ## Where Money is Used
/// ```text
/// LineItem.unit_price (Decimal) × qty ──► compute_subtotal ──► Money
///                                                              │
///            PricingStrategy::apply(subtotal: Money) ──► Money (total)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds an exact decimal amount to cents, half to even.
    ///
    /// This is the single point where unrounded amounts become Money.
    ///
    /// ## Errors
    /// [`ValidationError::Overflow`] if the amount does not fit in i64 cents.
    pub fn from_decimal(amount: Decimal) -> ValidationResult<Self> {
        let rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven);
        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .ok_or_else(|| ValidationError::overflow("amount"))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the exact decimal value with two decimal places.
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::from_cents(13050).to_decimal(), Decimal::new(13050, 2));
    /// ```
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, MONEY_SCALE)
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering, e.g. `150.00` or `-4.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_from_decimal_rounds_half_to_even() {
        assert_eq!(Money::from_decimal(dec!(10.005)).unwrap().cents(), 1000);
        assert_eq!(Money::from_decimal(dec!(10.015)).unwrap().cents(), 1002);
        assert_eq!(Money::from_decimal(dec!(10.0051)).unwrap().cents(), 1001);
        assert_eq!(Money::from_decimal(dec!(-4.5)).unwrap().cents(), -450);
    }

    #[test]
    fn test_from_decimal_overflow() {
        let err = Money::from_decimal(Decimal::MAX).unwrap_err();
        assert!(matches!(err, ValidationError::Overflow { .. }));
    }

    #[test]
    fn test_decimal_round_trip_keeps_scale() {
        let money = Money::from_cents(15000);
        assert_eq!(money.to_decimal(), dec!(150.00));
        assert_eq!(Money::from_decimal(money.to_decimal()).unwrap(), money);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::default().is_zero());
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::from_cents(1).is_negative());
    }
}
