// ============================================================================
// Simplified Rational
// Rational number kept in lowest terms with a positive denominator
// ============================================================================

use super::rational::{write_fraction, Rational};
use crate::interfaces::RationalValue;
use crate::numeric::{self, NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rational number normalized on every construction.
///
/// Invariants (established by [`SimplifiedRational::new`], and therefore by
/// every operation, since they all build through `construct`):
/// - `gcd(|numerator|, denominator) == 1`
/// - `denominator > 0`, the sign lives on the numerator
/// - zero is always `0/1`
///
/// Structural equality is therefore value equality.
///
/// # Example
/// ```rust
/// use rational_arith::prelude::*;
///
/// let x = SimplifiedRational::new(2, -4)?;
/// assert_eq!((x.numerator(), x.denominator()), (-1, 2));
///
/// let half = SimplifiedRational::new(1, 2)?;
/// assert_eq!(half.sub(&half)?, SimplifiedRational::ZERO);
/// # Ok::<(), NumericError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(i32, i32)", into = "(i32, i32)")
)]
pub struct SimplifiedRational {
    numerator: i32,
    denominator: i32,
}

impl SimplifiedRational {
    /// Zero (0/1)
    pub const ZERO: Self = Self::from_integer(0);

    /// One (1/1)
    pub const ONE: Self = Self::from_integer(1);

    /// Create from a numerator and denominator, reduced to lowest terms.
    ///
    /// # Errors
    /// - `ZeroDenominator` if `denominator == 0`
    /// - `Overflow` if the canonical sign cannot be represented
    ///   (e.g. `1 / i32::MIN`)
    pub fn new(numerator: i32, denominator: i32) -> NumericResult<Self> {
        let (numerator, denominator) =
            Self::simplify(numerator, denominator).inspect_err(|e| {
                tracing::trace!(numerator, denominator, error = %e, "rejected simplified rational");
            })?;
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Create a whole number (`value / 1`), already in lowest terms.
    #[inline]
    pub const fn from_integer(value: i32) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Greatest common divisor of two strictly positive integers.
    ///
    /// # Errors
    /// Returns `NonPositiveGcdInput` if `a <= 0` or `b <= 0`.
    #[inline]
    pub fn gcd(a: i32, b: i32) -> NumericResult<i32> {
        numeric::gcd(a, b)
    }

    /// Reduce a raw pair to lowest terms with a positive denominator.
    ///
    /// # Errors
    /// Same as [`SimplifiedRational::new`].
    #[inline]
    pub fn simplify(numerator: i32, denominator: i32) -> NumericResult<(i32, i32)> {
        numeric::simplify(numerator, denominator)
    }
}

impl RationalValue for SimplifiedRational {
    #[inline]
    fn numerator(&self) -> i32 {
        self.numerator
    }

    #[inline]
    fn denominator(&self) -> i32 {
        self.denominator
    }

    #[inline]
    fn construct(&self, numerator: i32, denominator: i32) -> NumericResult<Self> {
        Self::new(numerator, denominator)
    }
}

// Canonical form makes structural equality agree with value order

impl PartialOrd for SimplifiedRational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimplifiedRational {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value_cmp(other)
    }
}

impl Default for SimplifiedRational {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl TryFrom<(i32, i32)> for SimplifiedRational {
    type Error = NumericError;

    fn try_from((numerator, denominator): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

impl TryFrom<Rational> for SimplifiedRational {
    type Error = NumericError;

    fn try_from(value: Rational) -> Result<Self, Self::Error> {
        Self::new(value.numerator(), value.denominator())
    }
}

impl From<SimplifiedRational> for (i32, i32) {
    fn from(r: SimplifiedRational) -> Self {
        (r.numerator, r.denominator)
    }
}

impl From<SimplifiedRational> for Rational {
    fn from(r: SimplifiedRational) -> Self {
        // denominator is positive by construction
        Rational::new_unchecked(r.numerator, r.denominator)
    }
}

impl From<i32> for SimplifiedRational {
    fn from(value: i32) -> Self {
        Self::from_integer(value)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl std::ops::Neg for SimplifiedRational {
    type Output = NumericResult<Self>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Add for SimplifiedRational {
    type Output = NumericResult<Self>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        RationalValue::add(&self, &rhs)
    }
}

impl std::ops::Sub for SimplifiedRational {
    type Output = NumericResult<Self>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        RationalValue::sub(&self, &rhs)
    }
}

impl std::ops::Mul for SimplifiedRational {
    type Output = NumericResult<Self>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        RationalValue::mul(&self, &rhs)
    }
}

impl std::ops::Div for SimplifiedRational {
    type Output = NumericResult<Self>;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        RationalValue::div(&self, &rhs)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for SimplifiedRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SimplifiedRational({}, {})",
            self.numerator, self.denominator
        )
    }
}

impl fmt::Display for SimplifiedRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fraction(f, self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(n: i32, d: i32) -> SimplifiedRational {
        SimplifiedRational::new(n, d).unwrap()
    }

    fn parts(x: SimplifiedRational) -> (i32, i32) {
        (x.numerator(), x.denominator())
    }

    #[test]
    fn test_new_reduces() {
        assert_eq!(parts(s(2, 4)), (1, 2));
        assert_eq!(parts(s(-6, 9)), (-2, 3));
        assert_eq!(parts(s(6, -9)), (-2, 3));
        assert_eq!(parts(s(-6, -9)), (2, 3));
        assert_eq!(parts(s(0, -9)), (0, 1));
        assert_eq!(parts(s(10, 5)), (2, 1));
    }

    #[test]
    fn test_new_rejects() {
        assert_eq!(SimplifiedRational::new(1, 0), Err(NumericError::ZeroDenominator));
        assert_eq!(SimplifiedRational::new(1, i32::MIN), Err(NumericError::Overflow));
    }

    #[test]
    fn test_gcd_and_simplify() {
        assert_eq!(SimplifiedRational::gcd(12, 8), Ok(4));
        assert_eq!(
            SimplifiedRational::gcd(0, 8),
            Err(NumericError::NonPositiveGcdInput)
        );
        assert_eq!(SimplifiedRational::simplify(9, -12), Ok((-3, 4)));
        assert_eq!(
            SimplifiedRational::simplify(9, 0),
            Err(NumericError::ZeroDenominator)
        );
    }

    #[test]
    fn test_arithmetic_reduces() {
        let half = s(1, 2);
        let third = s(1, 3);

        assert_eq!(parts(half.add(&third).unwrap()), (5, 6));
        assert_eq!(parts(half.sub(&half).unwrap()), (0, 1));
        assert_eq!(parts(half.div(&third).unwrap()), (3, 2));
        assert_eq!(parts(half.add(&half).unwrap()), (1, 1));
        assert_eq!(parts(s(2, 3).mul(&s(3, 4)).unwrap()), (1, 2));
    }

    #[test]
    fn test_negate_and_invert() {
        assert_eq!(parts(s(-1, 2).negate().unwrap()), (1, 2));
        assert_eq!(parts(s(-2, 3).invert().unwrap()), (-3, 2));
        assert_eq!(s(0, 5).invert(), Err(NumericError::NotInvertible));
    }

    #[test]
    fn test_div_by_zero_value() {
        assert_eq!(
            s(1, 2).div(&SimplifiedRational::ZERO),
            Err(NumericError::ZeroDenominator)
        );
    }

    #[test]
    fn test_equality_and_order() {
        assert_eq!(s(1, 2), s(2, 4));
        assert_eq!(s(1, 2), s(-1, -2));
        assert!(s(1, 3) < s(1, 2));
        assert!(s(-1, 2) < SimplifiedRational::ZERO);

        let mut values = vec![s(3, 4), s(-1, 2), s(1, 3), s(0, 1)];
        values.sort();
        assert_eq!(values, vec![s(-1, 2), s(0, 1), s(1, 3), s(3, 4)]);
    }

    #[test]
    fn test_conversions() {
        let plain = Rational::new(4, -8).unwrap();
        assert_eq!(SimplifiedRational::try_from(plain), Ok(s(-1, 2)));
        assert_eq!(Rational::from(s(-1, 2)), Rational::new(-1, 2).unwrap());
        assert_eq!(SimplifiedRational::try_from((6, 8)), Ok(s(3, 4)));
        assert_eq!(<(i32, i32)>::from(s(6, 8)), (3, 4));
        assert_eq!(SimplifiedRational::from(-4), s(-4, 1));
        assert_eq!(SimplifiedRational::default(), SimplifiedRational::ZERO);
    }

    #[test]
    fn test_operators() {
        let half = s(1, 2);
        let third = s(1, 3);

        assert_eq!(half + third, Ok(s(5, 6)));
        assert_eq!(half - half, Ok(SimplifiedRational::ZERO));
        assert_eq!(half * s(2, 1), Ok(SimplifiedRational::ONE));
        assert_eq!(half / third, Ok(s(3, 2)));
        assert_eq!(-half, Ok(s(-1, 2)));
    }

    #[test]
    fn test_display() {
        assert_eq!(s(2, 4).to_string(), "1/2");
        assert_eq!(s(2, -4).to_string(), "-1/2");
        assert_eq!(s(0, -4).to_string(), "0/1");
        assert_eq!(format!("{:?}", s(2, -4)), "SimplifiedRational(-1, 2)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_reduces_on_read() {
        let back: SimplifiedRational = serde_json::from_str("[2,-4]").unwrap();
        assert_eq!(parts(back), (-1, 2));
        assert_eq!(serde_json::to_string(&back).unwrap(), "[-1,2]");

        let invalid: Result<SimplifiedRational, _> = serde_json::from_str("[2,0]");
        assert!(invalid.is_err());
    }
}
