//! # Safe Math Operations
//!
//! Logarithm and arctangent forms of the prism kernel that stay finite at
//! the removable singularities hit when the observation point lies on a
//! plane through a prism face, on an edge line, or on a vertex.

use std::f64::consts::PI;

/// Two-argument arctangent folded onto the principal branch of `atan(num / den)`.
///
/// Returns 0 when `num == 0`, and 0 when `den == 0`, which is the mean of
/// the two one-sided limits `+-pi/2`.
pub fn safe_atan2(num: f64, den: f64) -> f64 {
    if num == 0.0 || den == 0.0 {
        return 0.0;
    }

    let angle = num.atan2(den);
    if den > 0.0 {
        angle
    } else if num > 0.0 {
        angle - PI
    } else {
        angle + PI
    }
}

/// `ln(a + r)` where `r = sqrt(a^2 + b^2 + c^2)`.
///
/// For negative `a` the sum `a + r` cancels catastrophically, so the
/// equivalent `ln(b^2 + c^2) - ln(r - a)` is used instead. When
/// `b^2 + c^2 == 0` the `ln(0)` piece is dropped: it is identical for the two
/// corners that differ only in `a`, which enter the alternating sum with
/// opposite signs. At a vertex (`r == 0`) the result is 0.
pub fn safe_ln_offset(a: f64, b: f64, c: f64, r: f64) -> f64 {
    if a >= 0.0 {
        let sum = a + r;
        return if sum > 0.0 { sum.ln() } else { 0.0 };
    }

    let transverse = b * b + c * c;
    let far = (r - a).ln();
    if transverse > 0.0 {
        transverse.ln() - far
    } else {
        -far
    }
}

/// `x * ln(a + r)` with the `0 * ln(0)` limit taken as 0
pub fn safe_x_ln_offset(x: f64, a: f64, b: f64, c: f64, r: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x * safe_ln_offset(a, b, c, r)
    }
}

/// Distance from the origin to `(x, y, z)` without intermediate overflow
pub fn norm3(x: f64, y: f64, z: f64) -> f64 {
    x.hypot(y).hypot(z)
}
