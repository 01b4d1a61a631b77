//! # Mathematical Functions
//!
//! Singularity-safe elementary functions and compensated summation used by
//! the corner-summation kernel.

pub mod safe_math;
pub mod summation;

// Re-export commonly used functions
pub use safe_math::*;
pub use summation::*;
