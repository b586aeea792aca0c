//! # Paise
//!
//! Provides the `Paise` type used by the paisa/rupee conversions.
//!
//! ## Why Integer Paise?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    1.15 * 100 = 114.99999999999999  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹1.15 → 115 paise, rounded once at the boundary                     │
//! │    100 paise = 1 rupee, always                                         │
//! │                                                                         │
//! │  RANGE: whatever an i64 holds (about ±9.2e18 paise). Amounts outside   │
//! │  it are rejected at the boundary, never clamped.                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use frontkit_core::number::Paise;
//!
//! let price = Paise::from_paise(1099); // ₹10.99
//! let doubled = price * 2;             // ₹21.98
//! assert_eq!(doubled.to_string(), "₹21.98");
//! assert_eq!(Paise::try_from_rupees(1.15).unwrap().paise(), 115);
//! assert_eq!(price.checked_mul(i64::MAX), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// 2^63. The smallest float magnitude that no longer fits an i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A monetary value in paise (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values show up for losses and day changes
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Paise(i64);

impl Paise {
    /// Creates a value from whole paise.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Paise(paise)
    }

    /// Creates a value from a paisa amount held in a float.
    ///
    /// Fails with [`CoreError::FractionalPaisa`] for fractional or
    /// non-finite input, since paise are whole units, and with
    /// [`CoreError::PaiseOutOfRange`] for whole amounts an i64 cannot hold.
    ///
    /// ## Example
    /// ```rust
    /// use frontkit_core::number::Paise;
    ///
    /// assert_eq!(Paise::try_from_f64(10050.0).unwrap().paise(), 10050);
    /// assert!(Paise::try_from_f64(10.5).is_err());
    /// assert!(Paise::try_from_f64(1e20).is_err());
    /// ```
    pub fn try_from_f64(paise: f64) -> CoreResult<Self> {
        if !paise.is_finite() || paise.fract() != 0.0 {
            return Err(CoreError::FractionalPaisa(paise));
        }
        if paise.abs() >= I64_BOUND {
            return Err(CoreError::PaiseOutOfRange(paise));
        }

        Ok(Paise(paise as i64))
    }

    /// Creates a value from rupees, rounded to the nearest paisa.
    ///
    /// Fails when the rounded amount is not finite or does not fit.
    pub fn try_from_rupees(rupees: f64) -> CoreResult<Self> {
        Self::try_from_f64((rupees * 100.0).round())
    }

    /// Returns the amount in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the amount in rupees.
    #[inline]
    pub fn rupees(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whole-rupee portion.
    #[inline]
    pub const fn whole_rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Paisa portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(&self) -> Self {
        Paise(self.0.abs())
    }

    // -------------------------------------------------------------------------
    // Checked Arithmetic
    // -------------------------------------------------------------------------

    /// `None` when the sum leaves the i64 range.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(paise) => Some(Paise(paise)),
            None => None,
        }
    }

    /// `None` when the difference leaves the i64 range.
    #[inline]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(paise) => Some(Paise(paise)),
            None => None,
        }
    }

    /// `None` when the product leaves the i64 range.
    #[inline]
    pub const fn checked_mul(self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(paise) => Some(Paise(paise)),
            None => None,
        }
    }
}

/// Shows the amount as `₹10.99` / `-₹5.50`.
impl fmt::Display for Paise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}₹{}.{:02}",
            sign,
            self.whole_rupees().abs(),
            self.paise_part()
        )
    }
}

// The operators follow i64 overflow rules: they panic in debug builds and
// wrap in release builds. Amounts that may approach ±9.2e18 paise go
// through `checked_add` / `checked_sub` / `checked_mul` instead.

impl Add for Paise {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Paise(self.0 + other.0)
    }
}

impl Sub for Paise {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Paise(self.0 - other.0)
    }
}

impl Mul<i64> for Paise {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Paise(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let amount = Paise::from_paise(1099);
        assert_eq!(amount.paise(), 1099);
        assert_eq!(amount.whole_rupees(), 10);
        assert_eq!(amount.paise_part(), 99);
        assert_eq!(amount.rupees(), 10.99);
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Paise::try_from_f64(-250.0).unwrap().paise(), -250);
        assert!(matches!(
            Paise::try_from_f64(0.5),
            Err(CoreError::FractionalPaisa(_))
        ));
        assert!(matches!(
            Paise::try_from_f64(f64::NAN),
            Err(CoreError::FractionalPaisa(_))
        ));
    }

    #[test]
    fn test_try_from_f64_large_whole_amounts() {
        // Whole amounts above 2^53 still fit an i64.
        assert_eq!(Paise::try_from_f64(1e17).unwrap().paise(), 100_000_000_000_000_000);
        assert_eq!(Paise::try_from_f64(-1e18).unwrap().paise(), -1_000_000_000_000_000_000);

        assert!(matches!(
            Paise::try_from_f64(1e20),
            Err(CoreError::PaiseOutOfRange(_))
        ));
        assert!(matches!(
            Paise::try_from_f64(-1e300),
            Err(CoreError::PaiseOutOfRange(_))
        ));
    }

    #[test]
    fn test_try_from_rupees_rounds_to_nearest_paisa() {
        assert_eq!(Paise::try_from_rupees(1.15).unwrap().paise(), 115);
        assert_eq!(Paise::try_from_rupees(100.0).unwrap().paise(), 10000);
        assert_eq!(Paise::try_from_rupees(-0.019).unwrap().paise(), -2);
    }

    #[test]
    fn test_try_from_rupees_out_of_range() {
        // Too large for an i64 once scaled; never clamped to i64::MAX.
        assert!(matches!(
            Paise::try_from_rupees(1e20),
            Err(CoreError::PaiseOutOfRange(_))
        ));
        assert!(Paise::try_from_rupees(f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Paise::from_paise(1099).to_string(), "₹10.99");
        assert_eq!(Paise::from_paise(500).to_string(), "₹5.00");
        assert_eq!(Paise::from_paise(-550).to_string(), "-₹5.50");
        assert_eq!(Paise::from_paise(0).to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Paise::from_paise(1000);
        let b = Paise::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);
        assert_eq!((b - a).abs().paise(), 500);
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Paise::from_paise(i64::MAX);
        let min = Paise::from_paise(i64::MIN);
        let one = Paise::from_paise(1);

        assert_eq!(max.checked_add(one), None);
        assert_eq!(min.checked_sub(one), None);
        assert_eq!(max.checked_mul(2), None);

        assert_eq!(one.checked_add(one), Some(Paise::from_paise(2)));
        assert_eq!(max.checked_sub(one), Some(Paise::from_paise(i64::MAX - 1)));
        assert_eq!(Paise::from_paise(1099).checked_mul(3), Some(Paise::from_paise(3297)));
    }
}
