//! # Cents
//!
//! **NO FLOATING POINT IN MONETARY ARITHMETIC**
//!
//! Every amount the engine computes with is a whole number of the currency's
//! smallest unit. Floats only appear at the display boundary, see
//! [`Currency::to_display`](crate::Currency::to_display).
//!
//! ## Why checked?
//!
//! A wrapped multiplication silently creates or destroys money. Every
//! operation that can overflow returns `None` or
//! [`EconomyError::ArithmeticOverflow`] instead.

use std::fmt;

use crate::error::{EconomyError, EconomyResult};

/// Largest supported number of fractional digits (`10^19` overflows `u64`).
pub const MAX_DIGITS: u32 = 18;

/// An amount in the currency's smallest unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Cents(u64);

impl Cents {
    /// Zero value.
    pub const ZERO: Self = Self(0);

    /// Maximum representable value.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates an amount from a raw cent count.
    #[inline]
    #[must_use]
    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the raw cent count.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns true if this amount is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication by a count. Returns `None` on overflow.
    #[inline]
    #[must_use]
    pub const fn checked_mul_int(self, rhs: u64) -> Option<Self> {
        match self.0.checked_mul(rhs) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Safe addition with error on overflow.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::ArithmeticOverflow` if the sum does not fit.
    #[inline]
    pub fn safe_add(self, rhs: Self) -> EconomyResult<Self> {
        self.checked_add(rhs).ok_or(EconomyError::ArithmeticOverflow)
    }

    /// Safe multiplication by a count with error on overflow.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::ArithmeticOverflow` if the product does not fit.
    #[inline]
    pub fn safe_mul_int(self, rhs: u64) -> EconomyResult<Self> {
        self.checked_mul_int(rhs).ok_or(EconomyError::ArithmeticOverflow)
    }
}

impl From<u64> for Cents {
    #[inline]
    fn from(cents: u64) -> Self {
        Self(cents)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Computes the cents-per-unit divisor `10^digits`.
///
/// # Errors
///
/// Returns `EconomyError::InvalidConfig` if `digits` exceeds [`MAX_DIGITS`].
pub fn unit_for_digits(digits: u32) -> EconomyResult<u64> {
    if digits > MAX_DIGITS {
        return Err(EconomyError::InvalidConfig(format!(
            "currency digits must be at most {MAX_DIGITS}, got {digits}"
        )));
    }
    10u64
        .checked_pow(digits)
        .ok_or(EconomyError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_for_digits() {
        assert_eq!(unit_for_digits(0).unwrap(), 1);
        assert_eq!(unit_for_digits(2).unwrap(), 100);
        assert_eq!(unit_for_digits(18).unwrap(), 1_000_000_000_000_000_000);
    }

    #[test]
    fn test_unit_for_too_many_digits() {
        assert!(matches!(
            unit_for_digits(19),
            Err(EconomyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_checked_add_overflow() {
        assert!(Cents::MAX.checked_add(Cents::new(1)).is_none());
        assert_eq!(
            Cents::MAX.safe_add(Cents::new(1)),
            Err(EconomyError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_mul_overflow() {
        let big = Cents::new(u64::MAX / 2 + 1);
        assert_eq!(big.safe_mul_int(2), Err(EconomyError::ArithmeticOverflow));
        assert_eq!(Cents::new(250).safe_mul_int(4), Ok(Cents::new(1000)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cents::new(307)), "307");
    }
}
