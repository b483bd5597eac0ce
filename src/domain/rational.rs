// ============================================================================
// Plain Rational
// Numerator/denominator pair stored exactly as given
// ============================================================================

use crate::interfaces::RationalValue;
use crate::numeric::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rational number that keeps its components exactly as constructed.
///
/// No reduction and no sign canonicalization: `2/4`, `1/2` and `-1/-2` are
/// three distinct values for `==`. Use [`RationalValue::value_eq`] to compare
/// by value, or `SimplifiedRational` for a canonical form.
///
/// # Example
/// ```rust
/// use rational_arith::prelude::*;
///
/// let a = Rational::new(1, 2)?;
/// let b = Rational::new(1, 3)?;
/// let sum = a.add(&b)?;
/// assert_eq!(sum, Rational::new(5, 6)?);
/// assert_eq!(a.sub(&a)?, Rational::new(0, 4)?);
/// # Ok::<(), NumericError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(i32, i32)", into = "(i32, i32)")
)]
pub struct Rational {
    numerator: i32,
    denominator: i32,
}

impl Rational {
    /// Zero (0/1)
    pub const ZERO: Self = Self::from_integer(0);

    /// One (1/1)
    pub const ONE: Self = Self::from_integer(1);

    /// Create from a numerator and denominator, stored as given.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` if `denominator == 0`.
    pub fn new(numerator: i32, denominator: i32) -> NumericResult<Self> {
        if denominator == 0 {
            tracing::trace!(numerator, "rejected rational with zero denominator");
            return Err(NumericError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Create a whole number (`value / 1`).
    #[inline]
    pub const fn from_integer(value: i32) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Caller guarantees `denominator != 0`.
    #[inline]
    pub(crate) const fn new_unchecked(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl RationalValue for Rational {
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

// ============================================================================
// Conversions
// ============================================================================

impl TryFrom<(i32, i32)> for Rational {
    type Error = NumericError;

    fn try_from((numerator, denominator): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

impl From<Rational> for (i32, i32) {
    fn from(r: Rational) -> Self {
        (r.numerator, r.denominator)
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self::from_integer(value)
    }
}

// ============================================================================
// Operators
// ============================================================================

// Operators return NumericResult rather than panicking on a zero divisor
// or overflow, so `(a + b)?` is the operator form of `a.add(&b)?`.

impl std::ops::Neg for Rational {
    type Output = NumericResult<Self>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Add for Rational {
    type Output = NumericResult<Self>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        RationalValue::add(&self, &rhs)
    }
}

impl std::ops::Sub for Rational {
    type Output = NumericResult<Self>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        RationalValue::sub(&self, &rhs)
    }
}

impl std::ops::Mul for Rational {
    type Output = NumericResult<Self>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        RationalValue::mul(&self, &rhs)
    }
}

impl std::ops::Div for Rational {
    type Output = NumericResult<Self>;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        RationalValue::div(&self, &rhs)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

/// Render `n/d` as `|n|/|d|`, prefixed with `-` when the value is negative.
pub(crate) fn write_fraction(
    f: &mut fmt::Formatter<'_>,
    numerator: i32,
    denominator: i32,
) -> fmt::Result {
    let negative = numerator != 0 && (numerator < 0) != (denominator < 0);
    write!(
        f,
        "{}{}/{}",
        if negative { "-" } else { "" },
        numerator.unsigned_abs(),
        denominator.unsigned_abs()
    )
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}, {})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fraction(f, self.numerator, self.denominator)
    }
}
