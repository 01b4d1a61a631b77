//! # Prismgrav Core - Right Rectangular Prism Gravity
//!
//! Closed-form gravitational field of a homogeneous right rectangular prism,
//! following the formulas of Nagy (2000). It provides:
//!
//! - The vertical gravity component `gz`
//! - The six independent gravity gradient tensor components
//! - Unit conversion and gravitational constants
//! - Value types for prisms, observation points and field components
//!
//! The coordinate system is x->north, y->east, z->down. Inputs are SI units;
//! tensor components are returned in Eotvos and `gz` in mGal by default.
//!
//! ## Feature Flags
//!
//! - `client`: Enables serde serialization for configuration and results

pub mod config;
pub mod constants;
pub mod errors;
pub mod math;
pub mod physics;
pub mod types;

// Re-export commonly used items
pub use config::{EvaluatorConfig, Summation};
pub use constants::*;
pub use errors::{CoreResult, PrismGravError};
pub use physics::{
    evaluate, prism_gxx, prism_gxy, prism_gxz, prism_gyy, prism_gyz, prism_gz, prism_gzz,
    Evaluator,
};
pub use types::*;
