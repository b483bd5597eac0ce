// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod rational_value;

pub use rational_value::RationalValue;
