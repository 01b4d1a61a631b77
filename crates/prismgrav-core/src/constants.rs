//! # Physical Constants
//!
//! Gravitational constant and the unit conversion factors applied to the
//! raw SI results of the corner summation.

// ============================================================================
// Physical Constants
// ============================================================================

/// The gravitational constant (m^3 kg^-1 s^-2).
///
/// Kept at this exact literal so results stay bit-compatible with reference
/// outputs computed against it.
pub const G: f64 = 0.00000000006673;

// ============================================================================
// Unit Conversion
// ============================================================================

/// Conversion factor from SI units to Eotvos: 1 /s**2 = 10**9 Eotvos
pub const SI2EOTVOS: f64 = 1000000000.0;

/// Conversion factor from SI units to mGal: 1 m/s**2 = 10**5 mGal
pub const SI2MGAL: f64 = 100000.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_reference_literals() {
        assert_eq!(G, 6.673e-11);
        assert_eq!(SI2EOTVOS, 1e9);
        assert_eq!(SI2MGAL, 1e5);
    }
}
