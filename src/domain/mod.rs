// ============================================================================
// Domain Models Module
// Concrete rational number representations
// ============================================================================

pub mod rational;
pub mod simplified_rational;

pub use rational::Rational;
pub use simplified_rational::SimplifiedRational;
