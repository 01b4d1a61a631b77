//! # Observation Points

use crate::errors::{ensure_finite, CoreResult};

#[cfg(feature = "client")]
use serde::{Deserialize, Serialize};

/// Point where the field is computed, in meters (x->north, y->east, z->down)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub struct ObservationPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ObservationPoint {
    /// Create a validated observation point
    pub fn new(x: f64, y: f64, z: f64) -> CoreResult<Self> {
        Ok(Self {
            x: ensure_finite("xp", x)?,
            y: ensure_finite("yp", y)?,
            z: ensure_finite("zp", z)?,
        })
    }

    /// Create an observation point without validation
    pub const fn new_unchecked(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &ObservationPoint) -> f64 {
        (self.x - other.x)
            .hypot(self.y - other.y)
            .hypot(self.z - other.z)
    }

    /// Copy of this point shifted by the given offsets
    pub fn shifted(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new_unchecked(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl From<[f64; 3]> for ObservationPoint {
    fn from(coords: [f64; 3]) -> Self {
        Self::new_unchecked(coords[0], coords[1], coords[2])
    }
}
