// ============================================================================
// Rational Arithmetic Library
// Exact rational numbers over fixed-width integers with pluggable normalization
// ============================================================================

//! # Rational Arith
//!
//! Exact rational arithmetic over `i32` numerator/denominator pairs.
//!
//! ## Features
//!
//! - **One arithmetic contract** ([`RationalValue`](interfaces::RationalValue)):
//!   negate, invert, add, sub, mul and div are written once as default
//!   methods over three primitives (`numerator`, `denominator`, `construct`)
//! - **Pluggable normalization**: `Rational` keeps pairs as given,
//!   `SimplifiedRational` reduces to lowest terms on every construction
//! - **No panics**: every fallible operation returns `NumericResult`
//! - **Configurable overflow**: checked by default, wrapping on request
//!
//! ## Example
//!
//! ```rust
//! use rational_arith::prelude::*;
//!
//! let half = SimplifiedRational::new(1, 2)?;
//! let third = SimplifiedRational::new(1, 3)?;
//!
//! assert_eq!(half.add(&third)?.to_string(), "5/6");
//! assert_eq!(half.div(&third)?.to_string(), "3/2");
//! assert_eq!(half.sub(&half)?, SimplifiedRational::ZERO);
//!
//! // The plain variant keeps whatever the formula produced
//! let plain = Rational::new(1, 2)?;
//! assert_eq!(plain.sub(&plain)?.to_string(), "0/4");
//!
//! // Errors carry an invalid-argument / invalid-state kind
//! let err = SimplifiedRational::ZERO.invert().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidState);
//! # Ok::<(), NumericError>(())
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Rational, SimplifiedRational};
    pub use crate::interfaces::RationalValue;
    pub use crate::numeric::{ErrorKind, NumericError, NumericResult, OverflowPolicy};
}
