//! # Money Module
//!
//! Provides the `Money` type: an amount fixed to whole satang.
//!
//! ## Where Fixing Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FLOATS IN, SATANG OUT                                                  │
//! │                                                                         │
//! │  Line items carry f64 quantities and prices (the form edits them as    │
//! │  plain numbers). Totals keep full precision:                            │
//! │    33.33 × 1.07 = 35.6631                                               │
//! │                                                                         │
//! │  Only at the edge, for display or Thai text, the figure is fixed:      │
//! │    Money::try_from_amount(35.6631) → 3566 satang → "35.66"             │
//! │                                                                         │
//! │  Both the printed figure and the Thai text go through this one         │
//! │  conversion, so they can never disagree.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quote_core::money::Money;
//!
//! let total = Money::try_from_amount(2996.0).unwrap();
//! assert_eq!(total.baht(), 2996);
//! assert_eq!(total.to_string(), "2,996.00");
//! ```

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::thai_text;

/// Largest satang count an f64 holds exactly (2^53).
pub const MAX_EXACT_SATANG: i64 = 9_007_199_254_740_992;

const DECIMAL_PLACES: u32 = 2;

const TOO_LARGE: &str = "amount is too large to fix to two decimal places";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in satang (1/100 baht).
///
/// ## Design Decisions
/// - **i64**: same width as the POS money type; negative values are
///   rejected at construction from floats
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from satang.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// let price = Money::from_satang(280_050);
    /// assert_eq!(price.baht(), 2800);
    /// assert_eq!(price.satang_part(), 50);
    /// ```
    #[inline]
    pub const fn from_satang(satang: i64) -> Self {
        Money(satang)
    }

    /// Creates a Money value from baht and satang.
    #[inline]
    pub const fn from_major_minor(baht: i64, satang: i64) -> Self {
        Money(baht * 100 + satang)
    }

    /// Fixes a floating amount to two decimal places.
    ///
    /// The exact binary value of `amount` is rounded half away from zero,
    /// the way the form's two-decimal display rounds it: `1.115` is stored
    /// as `1.11499...` and fixes to `1.11`, while `0.125` is an exact tie
    /// and fixes to `0.13`.
    ///
    /// ## Errors
    /// [`CoreError::InvalidAmount`] when the amount is NaN, infinite,
    /// negative, or too large to count in exact satang. Negative noise that
    /// rounds to 0 satang (e.g. `-0.001`) is accepted as zero.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_amount(35.6631).unwrap().satang(), 3566);
    /// assert_eq!(Money::try_from_amount(1.115).unwrap().satang(), 111);
    /// assert!(Money::try_from_amount(-1.0).is_err());
    /// assert!(Money::try_from_amount(f64::NAN).is_err());
    /// ```
    pub fn try_from_amount(amount: f64) -> CoreResult<Self> {
        if !amount.is_finite() {
            return Err(invalid_amount(amount, "amount must be a finite number"));
        }

        let satang = Decimal::from_f64_retain(amount)
            .map(|exact| {
                exact.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            })
            .and_then(|fixed| fixed.checked_mul(Decimal::ONE_HUNDRED))
            .and_then(|satang| satang.to_i64())
            .ok_or_else(|| invalid_amount(amount, TOO_LARGE))?;

        // -0.001 fixes to -0.00, which converts to 0
        if satang < 0 {
            return Err(invalid_amount(amount, "amount must not be negative"));
        }

        if satang > MAX_EXACT_SATANG {
            return Err(invalid_amount(amount, TOO_LARGE));
        }

        Ok(Money(satang))
    }

    /// Returns the value in satang.
    #[inline]
    pub const fn satang(&self) -> i64 {
        self.0
    }

    /// Returns the whole-baht portion.
    #[inline]
    pub const fn baht(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the satang portion (always 0-99 for valid amounts).
    #[inline]
    pub const fn satang_part(&self) -> i64 {
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

    /// Reads the amount out in Thai, e.g. `หนึ่งร้อยบาทห้าสิบสตางค์`.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// let amount = Money::from_major_minor(100, 50);
    /// assert_eq!(amount.to_thai_text().unwrap(), "หนึ่งร้อยบาทห้าสิบสตางค์");
    /// ```
    pub fn to_thai_text(&self) -> CoreResult<String> {
        thai_text::money_to_thai_text(*self)
    }
}

fn invalid_amount(amount: f64, reason: &str) -> CoreError {
    CoreError::InvalidAmount {
        amount,
        reason: reason.to_string(),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the quotation prints it: `1,234,567.89`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.baht().abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}{}.{:02}", sign, grouped, self.satang_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_satang() {
        let money = Money::from_satang(1099);
        assert_eq!(money.satang(), 1099);
        assert_eq!(money.baht(), 10);
        assert_eq!(money.satang_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 5).satang(), 1005);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_satang(0).to_string(), "0.00");
        assert_eq!(Money::from_satang(5).to_string(), "0.05");
        assert_eq!(Money::from_satang(99_900).to_string(), "999.00");
        assert_eq!(Money::from_satang(280_000).to_string(), "2,800.00");
        assert_eq!(Money::from_satang(123_456_789).to_string(), "1,234,567.89");
    }

    #[test]
    fn test_try_from_amount_rounds_to_satang() {
        assert_eq!(Money::try_from_amount(35.6631).unwrap().satang(), 3566);
        assert_eq!(Money::try_from_amount(0.125).unwrap().satang(), 13);
        // 2800 × 1.07 lands a hair above 2996 in binary
        assert_eq!(Money::try_from_amount(2800.0 * 1.07).unwrap().satang(), 299_600);
        // 1.005 is stored as 1.00499..., so it fixes down like the display does
        assert_eq!(Money::try_from_amount(1.005).unwrap().satang(), 100);
    }

    #[test]
    fn test_try_from_amount_rounds_the_stored_value() {
        // each of these sits just below the printed half in binary
        assert_eq!(Money::try_from_amount(1.115).unwrap().satang(), 111);
        assert_eq!(Money::try_from_amount(2.675).unwrap().satang(), 267);
        assert_eq!(Money::try_from_amount(0.015).unwrap().satang(), 1);
        // exact binary ties round away from zero
        assert_eq!(Money::try_from_amount(0.375).unwrap().satang(), 38);
        assert_eq!(Money::try_from_amount(2.5).unwrap().satang(), 250);
    }

    #[test]
    fn test_try_from_amount_limits() {
        let largest = Money::try_from_amount(90_071_992_547_409.92).unwrap();
        assert_eq!(largest.satang(), MAX_EXACT_SATANG);
        assert!(Money::try_from_amount(90_071_992_547_410.0).is_err());
        assert!(Money::try_from_amount(f64::MAX).is_err());
        assert!(Money::try_from_amount(-f64::MAX).is_err());
    }

    #[test]
    fn test_try_from_amount_rejects_out_of_contract_values() {
        assert!(matches!(
            Money::try_from_amount(-0.01),
            Err(CoreError::InvalidAmount { .. })
        ));
        assert!(Money::try_from_amount(f64::NAN).is_err());
        assert!(Money::try_from_amount(f64::INFINITY).is_err());
        assert!(Money::try_from_amount(1e17).is_err());
    }

    #[test]
    fn test_negative_noise_clamps_to_zero() {
        let money = Money::try_from_amount(-0.001).unwrap();
        assert!(money.is_zero());
        assert_eq!(Money::try_from_amount(-0.0).unwrap(), Money::zero());
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Money::from_satang(1000) + Money::from_satang(500);
        total += Money::from_satang(1);
        assert_eq!(total.satang(), 1501);
        assert_eq!(Money::default(), Money::zero());
    }
}
