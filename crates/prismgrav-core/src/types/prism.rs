//! # Right Rectangular Prisms
//!
//! Axis-aligned homogeneous prisms in the x->north, y->east, z->down frame.

use crate::errors::{ensure_finite, CoreResult, PrismGravError};
use crate::types::ObservationPoint;

#[cfg(feature = "client")]
use serde::{Deserialize, Serialize};

/// Homogeneous right rectangular prism
///
/// Borders are in meters and the density in kg/m^3. A negative density is a
/// density deficit relative to the background.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub struct Prism {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    pub z1: f64,
    pub z2: f64,
    pub density: f64,
}

/// Where an observation point sits relative to a prism
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "lowercase"))]
pub enum PointLocation {
    Outside,
    /// On a face, edge or vertex
    Surface,
    Inside,
}

impl Prism {
    /// Create a validated prism.
    ///
    /// Borders must be finite and ordered (`x1 <= x2` and so on). Equal
    /// borders are accepted and produce a degenerate, field-free prism.
    pub fn new(
        x1: f64,
        x2: f64,
        y1: f64,
        y2: f64,
        z1: f64,
        z2: f64,
        density: f64,
    ) -> CoreResult<Self> {
        let prism = Self::from_borders_unchecked(
            ensure_finite("x1", x1)?,
            ensure_finite("x2", x2)?,
            ensure_finite("y1", y1)?,
            ensure_finite("y2", y2)?,
            ensure_finite("z1", z1)?,
            ensure_finite("z2", z2)?,
            ensure_finite("density", density)?,
        );

        for (axis, lower, upper) in [('x', x1, x2), ('y', y1, y2), ('z', z1, z2)] {
            if lower > upper {
                return Err(PrismGravError::InvertedBorders { axis, lower, upper });
            }
        }

        Ok(prism)
    }

    /// Create a prism without checking finiteness or border ordering.
    ///
    /// Inverted borders are evaluated as a prism of negated volume, flipping
    /// the sign of every field component.
    pub const fn from_borders_unchecked(
        x1: f64,
        x2: f64,
        y1: f64,
        y2: f64,
        z1: f64,
        z2: f64,
        density: f64,
    ) -> Self {
        Self { x1, x2, y1, y2, z1, z2, density }
    }

    /// Create a validated prism from `[x1, x2, y1, y2, z1, z2]`
    pub fn from_array(borders: [f64; 6], density: f64) -> CoreResult<Self> {
        let [x1, x2, y1, y2, z1, z2] = borders;
        Self::new(x1, x2, y1, y2, z1, z2, density)
    }

    /// Borders as `[x1, x2, y1, y2, z1, z2]`
    pub fn borders(&self) -> [f64; 6] {
        [self.x1, self.x2, self.y1, self.y2, self.z1, self.z2]
    }

    /// Same geometry with a different density
    pub fn with_density(&self, density: f64) -> Self {
        Self { density, ..*self }
    }

    /// True when any pair of borders coincides
    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 || self.y1 == self.y2 || self.z1 == self.z2
    }

    /// Signed volume (negative when an odd number of axes are inverted)
    pub fn volume(&self) -> f64 {
        (self.x2 - self.x1) * (self.y2 - self.y1) * (self.z2 - self.z1)
    }

    /// Total mass in kg
    pub fn mass(&self) -> f64 {
        self.volume() * self.density
    }

    /// Geometric center
    pub fn center(&self) -> ObservationPoint {
        ObservationPoint::new_unchecked(
            0.5 * (self.x1 + self.x2),
            0.5 * (self.y1 + self.y2),
            0.5 * (self.z1 + self.z2),
        )
    }

    /// Classify a point as outside, on the surface of, or inside the prism
    pub fn locate(&self, point: &ObservationPoint) -> PointLocation {
        let axes = [
            axis_position(point.x, self.x1, self.x2),
            axis_position(point.y, self.y1, self.y2),
            axis_position(point.z, self.z1, self.z2),
        ];

        if axes.contains(&AxisPosition::Outside) {
            PointLocation::Outside
        } else if axes.contains(&AxisPosition::Border) {
            PointLocation::Surface
        } else {
            PointLocation::Inside
        }
    }

    /// Split at `x = at` into two prisms sharing a face
    pub fn split_x(&self, at: f64) -> CoreResult<(Prism, Prism)> {
        check_split('x', at, self.x1, self.x2)?;
        Ok((Self { x2: at, ..*self }, Self { x1: at, ..*self }))
    }

    /// Split at `y = at` into two prisms sharing a face
    pub fn split_y(&self, at: f64) -> CoreResult<(Prism, Prism)> {
        check_split('y', at, self.y1, self.y2)?;
        Ok((Self { y2: at, ..*self }, Self { y1: at, ..*self }))
    }

    /// Split at `z = at` into two prisms sharing a face
    pub fn split_z(&self, at: f64) -> CoreResult<(Prism, Prism)> {
        check_split('z', at, self.z1, self.z2)?;
        Ok((Self { z2: at, ..*self }, Self { z1: at, ..*self }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisPosition {
    Outside,
    Border,
    Within,
}

fn axis_position(coord: f64, lower: f64, upper: f64) -> AxisPosition {
    let (lo, hi) = if lower <= upper { (lower, upper) } else { (upper, lower) };
    if coord < lo || coord > hi {
        AxisPosition::Outside
    } else if coord == lo || coord == hi {
        AxisPosition::Border
    } else {
        AxisPosition::Within
    }
}

fn check_split(axis: char, at: f64, lower: f64, upper: f64) -> CoreResult<()> {
    ensure_finite("split coordinate", at)?;
    if at < lower || at > upper {
        return Err(PrismGravError::InvalidConfig(format!(
            "split coordinate {} outside {} borders [{}, {}]",
            at, axis, lower, upper
        )));
    }
    Ok(())
}
