// ============================================================================
// Numeric Module
// Fixed-width integer primitives for exact rational arithmetic
// ============================================================================
//
// This module provides:
// - NumericError / ErrorKind: Error types for rational operations
// - OverflowPolicy: Checked or wrapping treatment of i32 overflow
// - gcd / simplify: Reduction to lowest terms
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Fixed-width i32 components

mod checked;
mod errors;

pub use checked::{gcd, simplify, OverflowPolicy};
pub use errors::{ErrorKind, NumericError, NumericResult};
