//! # Corner Summation Kernel
//!
//! Every component is an alternating sum over the eight prism corners of a
//! closed-form term in the corner offsets (Nagy, 2000):
//!
//! - gz:  x ln(y + r) + y ln(x + r) - z atan2(xy, zr)
//! - gxx: atan2(yz, xr), gyy: atan2(xz, yr), gzz: atan2(xy, zr)
//! - gxy: -ln(z + r), gxz: -ln(y + r), gyz: -ln(x + r)
//!
//! The corner built from the lower border on every axis enters with a
//! positive sign and the sign flips with each upper border taken.

use crate::config::Summation;
use crate::math::{norm3, safe_atan2, safe_ln_offset, safe_x_ln_offset, CompensatedSum};
use crate::types::{FieldComponent, ObservationPoint, Prism};

/// Signed offsets from the observation point to the borders on each axis.
///
/// Index 0 holds the lower border (`x1 - xp`), index 1 the upper one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerOffsets {
    pub dx: [f64; 2],
    pub dy: [f64; 2],
    pub dz: [f64; 2],
}

/// One prism corner seen from the observation point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Distance from the observation point to the corner
    pub r: f64,
    /// +1 or -1
    pub sign: f64,
}

impl CornerOffsets {
    pub fn new(prism: &Prism, point: &ObservationPoint) -> Self {
        Self {
            dx: [prism.x1 - point.x, prism.x2 - point.x],
            dy: [prism.y1 - point.y, prism.y2 - point.y],
            dz: [prism.z1 - point.z, prism.z2 - point.z],
        }
    }

    /// The eight corners with their alternating signs
    pub fn corners(self) -> impl Iterator<Item = Corner> {
        (0..8usize).map(move |index| {
            let (i, j, k) = (index & 1, (index >> 1) & 1, (index >> 2) & 1);
            let sign = if (i + j + k) % 2 == 0 { 1.0 } else { -1.0 };
            Corner::new(self.dx[i], self.dy[j], self.dz[k], sign)
        })
    }
}

impl Corner {
    pub fn new(x: f64, y: f64, z: f64, sign: f64) -> Self {
        Self { x, y, z, r: norm3(x, y, z), sign }
    }
}

/// Unsigned closed-form term of `component` at one corner
pub fn corner_term(component: FieldComponent, corner: &Corner) -> f64 {
    let Corner { x, y, z, r, .. } = *corner;
    match component {
        FieldComponent::Gz => {
            let vertical = if z == 0.0 { 0.0 } else { z * safe_atan2(x * y, z * r) };
            safe_x_ln_offset(x, y, x, z, r) + safe_x_ln_offset(y, x, y, z, r) - vertical
        }
        FieldComponent::Gxx => safe_atan2(y * z, x * r),
        FieldComponent::Gyy => safe_atan2(x * z, y * r),
        FieldComponent::Gzz => safe_atan2(x * y, z * r),
        FieldComponent::Gxy => -safe_ln_offset(z, x, y, r),
        FieldComponent::Gxz => -safe_ln_offset(y, x, z, r),
        FieldComponent::Gyz => -safe_ln_offset(x, y, z, r),
    }
}

/// Alternating sum of `component`'s term over the eight corners, in SI
/// units per unit `G * density`
pub fn corner_sum(offsets: &CornerOffsets, component: FieldComponent, summation: Summation) -> f64 {
    let terms = offsets
        .corners()
        .map(|corner| corner.sign * corner_term(component, &corner));

    match summation {
        Summation::Naive => terms.sum(),
        Summation::Compensated => terms.collect::<CompensatedSum>().total(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn offsets() -> CornerOffsets {
        let prism = Prism::from_borders_unchecked(-1.0, 2.0, -3.0, 4.0, 5.0, 6.0, 1.0);
        CornerOffsets::new(&prism, &ObservationPoint::new_unchecked(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_corner_offsets() {
        let offsets = offsets();
        assert_eq!(offsets.dx, [-2.0, 1.0]);
        assert_eq!(offsets.dy, [-4.0, 3.0]);
        assert_eq!(offsets.dz, [4.0, 5.0]);
    }

    #[test]
    fn test_corner_signs_alternate() {
        let corners: Vec<Corner> = offsets().corners().collect();
        assert_eq!(corners.len(), 8);

        let lower = corners[0];
        assert_eq!((lower.x, lower.y, lower.z, lower.sign), (-2.0, -4.0, 4.0, 1.0));
        let upper = corners[7];
        assert_eq!((upper.x, upper.y, upper.z, upper.sign), (1.0, 3.0, 5.0, -1.0));

        assert_eq!(corners.iter().map(|c| c.sign).sum::<f64>(), 0.0);
        for corner in &corners {
            let flips = [corner.x > 0.0, corner.y > 0.0, corner.z == 5.0]
                .iter()
                .filter(|upper| **upper)
                .count();
            assert_eq!(corner.sign, if flips % 2 == 0 { 1.0 } else { -1.0 });
        }
    }

    #[test]
    fn test_corner_terms_at_regular_corner() {
        let corner = Corner::new(1.0, 2.0, 2.0, 1.0);
        assert_relative_eq!(corner.r, 3.0, epsilon = 1e-15);
        let term = |component| corner_term(component, &corner);
        assert_relative_eq!(term(FieldComponent::Gxy), -(5.0_f64.ln()), epsilon = 1e-14);
        assert_relative_eq!(term(FieldComponent::Gxz), -(5.0_f64.ln()), epsilon = 1e-14);
        assert_relative_eq!(term(FieldComponent::Gyz), -(4.0_f64.ln()), epsilon = 1e-14);
        assert_relative_eq!(term(FieldComponent::Gzz), (2.0_f64 / 6.0).atan(), epsilon = 1e-14);
        assert_relative_eq!(term(FieldComponent::Gxx), (4.0_f64 / 3.0).atan(), epsilon = 1e-14);
    }

    #[test]
    fn test_summation_modes_agree_near_prism() {
        let offsets = offsets();
        for component in FieldComponent::ALL {
            let naive = corner_sum(&offsets, component, Summation::Naive);
            let compensated = corner_sum(&offsets, component, Summation::Compensated);
            assert!(
                (naive - compensated).abs() <= 1e-12 * naive.abs().max(1.0),
                "{} differs: {} vs {}",
                component,
                naive,
                compensated
            );
        }
    }

    #[test]
    fn test_vertex_terms_are_finite() {
        let corner = Corner::new(0.0, 0.0, 0.0, 1.0);
        for component in FieldComponent::ALL {
            assert_eq!(corner_term(component, &corner), 0.0);
        }
    }
}
