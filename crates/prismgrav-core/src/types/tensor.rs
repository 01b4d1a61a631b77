//! # Gravity Gradient Tensor

use crate::errors::{CoreResult, PrismGravError};
use crate::types::FieldComponent;

#[cfg(feature = "client")]
use serde::{Deserialize, Serialize};

/// The six independent components of the symmetric gradient tensor (Eotvos)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub struct GravityTensor {
    pub xx: f64,
    pub xy: f64,
    pub xz: f64,
    pub yy: f64,
    pub yz: f64,
    pub zz: f64,
}

impl GravityTensor {
    /// Sum of the diagonal. Zero outside the source (Laplace), -4*pi*G*rho
    /// inside it (Poisson).
    pub fn trace(&self) -> f64 {
        self.xx + self.yy + self.zz
    }

    /// Look up one tensor component
    pub fn get(&self, component: FieldComponent) -> CoreResult<f64> {
        match component {
            FieldComponent::Gxx => Ok(self.xx),
            FieldComponent::Gxy => Ok(self.xy),
            FieldComponent::Gxz => Ok(self.xz),
            FieldComponent::Gyy => Ok(self.yy),
            FieldComponent::Gyz => Ok(self.yz),
            FieldComponent::Gzz => Ok(self.zz),
            FieldComponent::Gz => Err(PrismGravError::NotATensorComponent(component.name())),
        }
    }

    /// Full symmetric 3x3 matrix, row-major
    pub fn as_matrix(&self) -> [[f64; 3]; 3] {
        [
            [self.xx, self.xy, self.xz],
            [self.xy, self.yy, self.yz],
            [self.xz, self.yz, self.zz],
        ]
    }
}

impl std::ops::Add for GravityTensor {
    type Output = GravityTensor;

    fn add(self, rhs: GravityTensor) -> GravityTensor {
        GravityTensor {
            xx: self.xx + rhs.xx,
            xy: self.xy + rhs.xy,
            xz: self.xz + rhs.xz,
            yy: self.yy + rhs.yy,
            yz: self.yz + rhs.yz,
            zz: self.zz + rhs.zz,
        }
    }
}

/// All seven components at one observation point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub struct FieldResponse {
    /// Vertical gravity in the configured gz unit
    pub gz: f64,
    pub tensor: GravityTensor,
}

impl FieldResponse {
    /// Look up any component
    pub fn get(&self, component: FieldComponent) -> f64 {
        match component {
            FieldComponent::Gz => self.gz,
            FieldComponent::Gxx => self.tensor.xx,
            FieldComponent::Gxy => self.tensor.xy,
            FieldComponent::Gxz => self.tensor.xz,
            FieldComponent::Gyy => self.tensor.yy,
            FieldComponent::Gyz => self.tensor.yz,
            FieldComponent::Gzz => self.tensor.zz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GravityTensor {
        GravityTensor { xx: -1.0, xy: 0.5, xz: 0.25, yy: -2.0, yz: 0.75, zz: 3.0 }
    }

    #[test]
    fn test_trace_and_matrix() {
        let tensor = sample();
        assert_eq!(tensor.trace(), 0.0);
        let m = tensor.as_matrix();
        for (i, row) in m.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                assert_eq!(*value, m[j][i]);
            }
        }
    }

    #[test]
    fn test_get() {
        let tensor = sample();
        assert_eq!(tensor.get(FieldComponent::Gyz), Ok(0.75));
        assert_eq!(
            tensor.get(FieldComponent::Gz),
            Err(PrismGravError::NotATensorComponent("gz"))
        );

        let response = FieldResponse { gz: 4.0, tensor };
        assert_eq!(response.get(FieldComponent::Gz), 4.0);
        assert_eq!(response.get(FieldComponent::Gzz), 3.0);
    }

    #[test]
    fn test_add() {
        let doubled = sample() + sample();
        assert_eq!(doubled.zz, 6.0);
        assert_eq!(doubled.trace(), 0.0);
    }
}
