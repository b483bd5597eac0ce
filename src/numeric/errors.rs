// ============================================================================
// Numeric Errors
// Error types for rational arithmetic operations
// ============================================================================

use std::fmt;

/// Broad classification of a [`NumericError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed a value the operation cannot accept
    InvalidArgument,
    /// The receiver is in a state where the operation is undefined
    InvalidState,
}

/// Errors that can occur during rational arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A value was constructed (directly or as the result of a division)
    /// with a denominator of 0
    ZeroDenominator,
    /// A binary operation was called without its second operand
    MissingOperand,
    /// gcd is only defined here for strictly positive inputs
    NonPositiveGcdInput,
    /// Attempted to invert a value whose numerator is 0
    NotInvertible,
    /// An intermediate product or sum left the i32 range
    Overflow,
}

impl NumericError {
    /// Classify the error.
    pub const fn kind(self) -> ErrorKind {
        match self {
            NumericError::NotInvertible => ErrorKind::InvalidState,
            NumericError::ZeroDenominator
            | NumericError::MissingOperand
            | NumericError::NonPositiveGcdInput
            | NumericError::Overflow => ErrorKind::InvalidArgument,
        }
    }

    /// Shorthand for `kind() == ErrorKind::InvalidArgument`.
    pub const fn is_invalid_argument(self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument)
    }

    /// Shorthand for `kind() == ErrorKind::InvalidState`.
    pub const fn is_invalid_state(self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidState)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::InvalidState => write!(f, "invalid state"),
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::ZeroDenominator => {
                write!(f, "invalid argument: denominator must not be zero")
            },
            NumericError::MissingOperand => {
                write!(f, "invalid argument: missing second operand")
            },
            NumericError::NonPositiveGcdInput => {
                write!(f, "invalid argument: gcd inputs must be strictly positive")
            },
            NumericError::NotInvertible => {
                write!(f, "invalid state: cannot invert a value with numerator zero")
            },
            NumericError::Overflow => write!(
                f,
                "invalid argument: arithmetic overflow in numerator or denominator"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
