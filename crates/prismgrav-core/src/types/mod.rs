//! # Core Type Definitions
//!
//! Immutable value types passed to the field evaluator.

pub mod component;
pub mod point;
pub mod prism;
pub mod tensor;

// Re-export all types
pub use component::*;
pub use point::*;
pub use prism::*;
pub use tensor::*;
