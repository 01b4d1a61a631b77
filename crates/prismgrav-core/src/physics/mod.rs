//! # Physics Module
//!
//! Gravitational field of a right rectangular prism: the shared corner
//! summation kernel and the per-component entry points built on it.

pub mod field;
pub mod kernel;

// Re-export main types
pub use field::{
    evaluate, prism_gxx, prism_gxy, prism_gxz, prism_gyy, prism_gyz, prism_gz, prism_gzz,
    Evaluator,
};
pub use kernel::{corner_sum, corner_term, Corner, CornerOffsets};
