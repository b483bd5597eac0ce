// ============================================================================
// Rational Value Interface
// Defines the contract shared by every rational number representation
// ============================================================================

use crate::numeric::{NumericError, NumericResult, OverflowPolicy};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// A rational number described by a numerator/denominator pair.
///
/// Implementations supply the two accessors and [`construct`](Self::construct);
/// every arithmetic operation is provided on top of those three and always
/// builds its result through the receiver's own `construct`. A variant that
/// normalizes in `construct` (sign, lowest terms) therefore gets normalized
/// results from all operations without overriding any of them.
///
/// Implementations: `Rational` (stores the pair as given),
/// `SimplifiedRational` (lowest terms, positive denominator).
///
/// # Example
/// ```rust
/// use rational_arith::prelude::*;
///
/// let half = SimplifiedRational::new(1, 2)?;
/// let third = SimplifiedRational::new(1, 3)?;
/// let sum = half.add(&third)?;
/// assert_eq!((sum.numerator(), sum.denominator()), (5, 6));
///
/// assert_eq!(half.add(None), Err(NumericError::MissingOperand));
/// # Ok::<(), NumericError>(())
/// ```
pub trait RationalValue: Sized {
    /// Treatment of i32 overflow in the derived operations
    const OVERFLOW: OverflowPolicy = OverflowPolicy::Checked;

    /// The numerator of this value
    fn numerator(&self) -> i32;

    /// The denominator of this value
    fn denominator(&self) -> i32;

    /// Build a new value of the same variant from a raw pair, applying the
    /// variant's normalization.
    ///
    /// # Errors
    /// Must return `ZeroDenominator` if `denominator == 0`.
    fn construct(&self, numerator: i32, denominator: i32) -> NumericResult<Self>;

    /// `negate(n / d) = -n / d`
    ///
    /// # Errors
    /// Only under `OverflowPolicy::Checked`, when the numerator is `i32::MIN`.
    fn negate(&self) -> NumericResult<Self> {
        let numerator = Self::OVERFLOW.neg(self.numerator())?;
        self.construct(numerator, self.denominator())
    }

    /// `invert(n / d) = d / n`
    ///
    /// # Errors
    /// Returns `NotInvertible` if the numerator is 0.
    fn invert(&self) -> NumericResult<Self> {
        if self.numerator() == 0 {
            return Err(NumericError::NotInvertible);
        }
        self.construct(self.denominator(), self.numerator())
    }

    /// `(n1 / d1) + (n2 / d2) = (n1 * d2 + n2 * d1) / (d1 * d2)`
    ///
    /// # Errors
    /// Returns `MissingOperand` if `that` is `None`.
    fn add<'a>(&self, that: impl Into<Option<&'a Self>>) -> NumericResult<Self>
    where
        Self: 'a,
    {
        let that = require(that.into())?;
        let p = Self::OVERFLOW;

        let n1d2 = p.mul(self.numerator(), that.denominator())?;
        let n2d1 = p.mul(that.numerator(), self.denominator())?;

        let numerator = p.add(n1d2, n2d1)?;
        let denominator = p.mul(self.denominator(), that.denominator())?;

        self.construct(numerator, denominator)
    }

    /// `(n1 / d1) - (n2 / d2) = (n1 * d2 - n2 * d1) / (d1 * d2)`
    ///
    /// # Errors
    /// Returns `MissingOperand` if `that` is `None`.
    fn sub<'a>(&self, that: impl Into<Option<&'a Self>>) -> NumericResult<Self>
    where
        Self: 'a,
    {
        let that = require(that.into())?;
        let p = Self::OVERFLOW;

        let n1d2 = p.mul(self.numerator(), that.denominator())?;
        let n2d1 = p.mul(that.numerator(), self.denominator())?;

        let numerator = p.sub(n1d2, n2d1)?;
        let denominator = p.mul(self.denominator(), that.denominator())?;

        self.construct(numerator, denominator)
    }

    /// `(n1 / d1) * (n2 / d2) = (n1 * n2) / (d1 * d2)`
    ///
    /// # Errors
    /// Returns `MissingOperand` if `that` is `None`.
    fn mul<'a>(&self, that: impl Into<Option<&'a Self>>) -> NumericResult<Self>
    where
        Self: 'a,
    {
        let that = require(that.into())?;
        let p = Self::OVERFLOW;

        let numerator = p.mul(self.numerator(), that.numerator())?;
        let denominator = p.mul(self.denominator(), that.denominator())?;

        self.construct(numerator, denominator)
    }

    /// `(n1 / d1) / (n2 / d2) = (n1 * d2) / (d1 * n2)`
    ///
    /// No zero check of its own: a divisor with numerator 0 produces a zero
    /// denominator, which `construct` rejects.
    ///
    /// # Errors
    /// - `MissingOperand` if `that` is `None`
    /// - `ZeroDenominator` if the numerator of `that` is 0
    fn div<'a>(&self, that: impl Into<Option<&'a Self>>) -> NumericResult<Self>
    where
        Self: 'a,
    {
        let that = require(that.into())?;
        let p = Self::OVERFLOW;

        let numerator = p.mul(self.numerator(), that.denominator())?;
        let denominator = p.mul(self.denominator(), that.numerator())?;

        self.construct(numerator, denominator)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check if value is zero.
    #[inline]
    fn is_zero(&self) -> bool {
        self.numerator() == 0
    }

    /// Check if value is negative, whichever component carries the sign.
    #[inline]
    fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// -1, 0 or 1 according to the sign of the value.
    #[inline]
    fn signum(&self) -> i32 {
        self.numerator().signum() * self.denominator().signum()
    }

    /// Compare by value, across variants and regardless of normalization.
    fn value_cmp<R: RationalValue>(&self, other: &R) -> Ordering {
        // i32 * i32 always fits in i64
        let lhs = i64::from(self.numerator()) * i64::from(other.denominator());
        let rhs = i64::from(other.numerator()) * i64::from(self.denominator());

        if self.denominator().signum() * other.denominator().signum() < 0 {
            rhs.cmp(&lhs)
        } else {
            lhs.cmp(&rhs)
        }
    }

    /// Value equality, e.g. `1/2` equals `2/4` and `-1/-2`.
    fn value_eq<R: RationalValue>(&self, other: &R) -> bool {
        self.value_cmp(other) == Ordering::Equal
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// This is intended for display/API boundaries; non-terminating
    /// expansions are rounded to Decimal's 28 digit precision.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` for a value that bypassed `construct`.
    fn to_decimal(&self) -> NumericResult<Decimal> {
        Decimal::from(self.numerator())
            .checked_div(Decimal::from(self.denominator()))
            .ok_or(NumericError::ZeroDenominator)
    }
}

#[inline]
fn require<T>(that: Option<&T>) -> NumericResult<&T> {
    that.ok_or_else(|| {
        tracing::trace!("rational operation called without second operand");
        NumericError::MissingOperand
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bare pair with no normalization, so the raw formulas are visible
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Raw(i32, i32);

    impl RationalValue for Raw {
        fn numerator(&self) -> i32 {
            self.0
        }

        fn denominator(&self) -> i32 {
            self.1
        }

        fn construct(&self, numerator: i32, denominator: i32) -> NumericResult<Self> {
            if denominator == 0 {
                return Err(NumericError::ZeroDenominator);
            }
            Ok(Raw(numerator, denominator))
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Wrapping(i32, i32);

    impl RationalValue for Wrapping {
        const OVERFLOW: OverflowPolicy = OverflowPolicy::Wrapping;

        fn numerator(&self) -> i32 {
            self.0
        }

        fn denominator(&self) -> i32 {
            self.1
        }

        fn construct(&self, numerator: i32, denominator: i32) -> NumericResult<Self> {
            if denominator == 0 {
                return Err(NumericError::ZeroDenominator);
            }
            Ok(Wrapping(numerator, denominator))
        }
    }

    #[test]
    fn test_raw_formulas() {
        let a = Raw(1, 2);
        let b = Raw(1, 3);

        assert_eq!(a.negate(), Ok(Raw(-1, 2)));
        assert_eq!(a.invert(), Ok(Raw(2, 1)));
        assert_eq!(a.add(&b), Ok(Raw(5, 6)));
        assert_eq!(a.sub(&b), Ok(Raw(1, 6)));
        assert_eq!(a.mul(&b), Ok(Raw(1, 6)));
        assert_eq!(a.div(&b), Ok(Raw(3, 2)));
    }

    #[test]
    fn test_sub_of_equal_values_is_unreduced() {
        let a = Raw(1, 2);
        assert_eq!(a.sub(&a), Ok(Raw(0, 4)));
    }

    #[test]
    fn test_missing_operand() {
        let a = Raw(1, 2);
        assert_eq!(a.add(None), Err(NumericError::MissingOperand));
        assert_eq!(a.sub(None), Err(NumericError::MissingOperand));
        assert_eq!(a.mul(None), Err(NumericError::MissingOperand));
        assert_eq!(a.div(None), Err(NumericError::MissingOperand));
    }

    #[test]
    fn test_explicit_some_operand() {
        let a = Raw(1, 2);
        let b = Raw(1, 2);
        assert_eq!(a.mul(Some(&b)), Ok(Raw(1, 4)));
    }

    #[test]
    fn test_invert_zero() {
        assert_eq!(Raw(0, 5).invert(), Err(NumericError::NotInvertible));
        assert!(Raw(0, 5).invert().unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_div_by_zero_numerator_relies_on_construct() {
        let a = Raw(1, 2);
        let zero = Raw(0, 3);
        assert_eq!(a.div(&zero), Err(NumericError::ZeroDenominator));
    }

    #[test]
    fn test_checked_overflow() {
        let big = Raw(i32::MAX, 1);
        assert_eq!(big.add(&big), Err(NumericError::Overflow));
        assert_eq!(big.mul(&Raw(2, 1)), Err(NumericError::Overflow));
        assert_eq!(Raw(1, i32::MAX).mul(&Raw(1, 2)), Err(NumericError::Overflow));
        assert_eq!(Raw(i32::MIN, 1).negate(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_wrapping_overflow() {
        let big = Wrapping(i32::MAX, 1);
        assert_eq!(big.add(&big), Ok(Wrapping(-2, 1)));
        assert_eq!(Wrapping(i32::MIN, 1).negate(), Ok(Wrapping(i32::MIN, 1)));
    }

    #[test]
    fn test_signum() {
        assert_eq!(Raw(1, 2).signum(), 1);
        assert_eq!(Raw(-1, 2).signum(), -1);
        assert_eq!(Raw(1, -2).signum(), -1);
        assert_eq!(Raw(-1, -2).signum(), 1);
        assert_eq!(Raw(0, -2).signum(), 0);

        assert!(Raw(1, -2).is_negative());
        assert!(!Raw(-1, -2).is_negative());
        assert!(Raw(0, 7).is_zero());
    }

    #[test]
    fn test_value_cmp() {
        assert_eq!(Raw(1, 2).value_cmp(&Raw(1, 3)), Ordering::Greater);
        assert_eq!(Raw(1, 3).value_cmp(&Raw(1, 2)), Ordering::Less);
        assert_eq!(Raw(1, 2).value_cmp(&Raw(2, 4)), Ordering::Equal);
        assert_eq!(Raw(1, -2).value_cmp(&Raw(1, 3)), Ordering::Less);
        assert_eq!(Raw(-1, -2).value_cmp(&Raw(1, 3)), Ordering::Greater);
        assert!(Raw(1, 2).value_eq(&Raw(-3, -6)));
        assert!(Raw(i32::MAX, 1).value_cmp(&Raw(i32::MIN, 1)).is_gt());
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(Raw(1, 4).to_decimal(), Ok(Decimal::new(25, 2)));
        assert_eq!(Raw(-3, 2).to_decimal(), Ok(Decimal::new(-15, 1)));
        assert_eq!(Raw(1, 0).to_decimal(), Err(NumericError::ZeroDenominator));
    }
}
