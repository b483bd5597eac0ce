// ============================================================================
// Fixed-Width Integer Helpers
// Overflow policy and the integer primitives rational arithmetic is built on
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// How fixed-width products and sums that leave the `i32` range are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Fail the whole operation with [`NumericError::Overflow`]
    #[default]
    Checked,
    /// Two's-complement wrap-around, as plain 32-bit machine arithmetic
    Wrapping,
}

impl OverflowPolicy {
    /// `a * b` under this policy.
    #[inline]
    pub fn mul(self, a: i32, b: i32) -> NumericResult<i32> {
        match self {
            OverflowPolicy::Checked => a.checked_mul(b).ok_or_else(|| overflow("mul", a, b)),
            OverflowPolicy::Wrapping => Ok(a.wrapping_mul(b)),
        }
    }

    /// `a + b` under this policy.
    #[inline]
    pub fn add(self, a: i32, b: i32) -> NumericResult<i32> {
        match self {
            OverflowPolicy::Checked => a.checked_add(b).ok_or_else(|| overflow("add", a, b)),
            OverflowPolicy::Wrapping => Ok(a.wrapping_add(b)),
        }
    }

    /// `a - b` under this policy.
    #[inline]
    pub fn sub(self, a: i32, b: i32) -> NumericResult<i32> {
        match self {
            OverflowPolicy::Checked => a.checked_sub(b).ok_or_else(|| overflow("sub", a, b)),
            OverflowPolicy::Wrapping => Ok(a.wrapping_sub(b)),
        }
    }

    /// `-a` under this policy. Only `i32::MIN` can overflow.
    #[inline]
    pub fn neg(self, a: i32) -> NumericResult<i32> {
        match self {
            OverflowPolicy::Checked => a.checked_neg().ok_or_else(|| overflow("neg", a, 0)),
            OverflowPolicy::Wrapping => Ok(a.wrapping_neg()),
        }
    }
}

#[cold]
fn overflow(op: &'static str, a: i32, b: i32) -> NumericError {
    tracing::trace!(op, a, b, "i32 overflow in rational arithmetic");
    NumericError::Overflow
}

/// Euclid's algorithm on magnitudes. `gcd_u32(0, 0) == 0`.
#[inline]
pub(crate) fn gcd_u32(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Greatest common divisor of two strictly positive integers.
///
/// # Errors
/// Returns `NonPositiveGcdInput` if either input is `<= 0`.
pub fn gcd(a: i32, b: i32) -> NumericResult<i32> {
    if a <= 0 || b <= 0 {
        return Err(NumericError::NonPositiveGcdInput);
    }
    // Both inputs are positive, so the gcd fits back into i32
    Ok(gcd_u32(a as u32, b as u32) as i32)
}

/// Reduce `(numerator, denominator)` to lowest terms with a positive
/// denominator. Zero simplifies to `(0, 1)`.
///
/// # Errors
/// - `ZeroDenominator` if `denominator == 0`
/// - `Overflow` if the canonical form is not representable, which only
///   happens when moving the sign off `i32::MIN` (e.g. `(i32::MIN, -1)`)
pub fn simplify(numerator: i32, denominator: i32) -> NumericResult<(i32, i32)> {
    if denominator == 0 {
        return Err(NumericError::ZeroDenominator);
    }
    if numerator == 0 {
        return Ok((0, 1));
    }

    let g = i64::from(gcd_u32(numerator.unsigned_abs(), denominator.unsigned_abs()));
    let mut n = i64::from(numerator) / g;
    let mut d = i64::from(denominator) / g;
    if d < 0 {
        n = -n;
        d = -d;
    }

    let n = i32::try_from(n).map_err(|_| NumericError::Overflow)?;
    let d = i32::try_from(d).map_err(|_| NumericError::Overflow)?;
    Ok((n, d))
}
