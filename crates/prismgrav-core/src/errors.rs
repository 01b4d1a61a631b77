//! # Core Error Types
//!
//! Errors raised while building validated inputs. The field evaluation itself
//! is total over its numeric domain and never returns an error.

use thiserror::Error;

/// Errors produced by the validated constructors and parsers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrismGravError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Non-finite value for {0}")]
    NonFiniteInput(&'static str),

    #[error("Inverted {axis} borders: {lower} > {upper}")]
    InvertedBorders {
        axis: char,
        lower: f64,
        upper: f64,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Component Errors
    // ========================================================================
    #[error("Unknown field component: {0}")]
    UnknownComponent(String),

    #[error("{0} is not a gravity gradient tensor component")]
    NotATensorComponent(&'static str),
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, PrismGravError>;

/// Check that a named input is finite
pub fn ensure_finite(name: &'static str, value: f64) -> CoreResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PrismGravError::NonFiniteInput(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("x1", 1.5), Ok(1.5));
        assert_eq!(
            ensure_finite("density", f64::NAN),
            Err(PrismGravError::NonFiniteInput("density"))
        );
        assert!(ensure_finite("zp", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = PrismGravError::InvertedBorders {
            axis: 'z',
            lower: 2.0,
            upper: 1.0,
        };
        assert_eq!(err.to_string(), "Inverted z borders: 2 > 1");
        assert_eq!(
            PrismGravError::UnknownComponent("gzy".into()).to_string(),
            "Unknown field component: gzy"
        );
    }
}
