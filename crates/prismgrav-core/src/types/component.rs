//! # Field Components and Units

use std::fmt;
use std::str::FromStr;

use crate::constants::{SI2EOTVOS, SI2MGAL};
use crate::errors::PrismGravError;

#[cfg(feature = "client")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Field Components
// ============================================================================

/// Selector for the derivative of the potential being evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "lowercase"))]
pub enum FieldComponent {
    /// Vertical gravity (first derivative)
    Gz,
    Gxx,
    Gxy,
    Gxz,
    Gyy,
    Gyz,
    Gzz,
}

impl FieldComponent {
    /// Every supported component, gz first
    pub const ALL: [FieldComponent; 7] = [
        FieldComponent::Gz,
        FieldComponent::Gxx,
        FieldComponent::Gxy,
        FieldComponent::Gxz,
        FieldComponent::Gyy,
        FieldComponent::Gyz,
        FieldComponent::Gzz,
    ];

    /// The six independent gravity gradient tensor components
    pub const TENSOR: [FieldComponent; 6] = [
        FieldComponent::Gxx,
        FieldComponent::Gxy,
        FieldComponent::Gxz,
        FieldComponent::Gyy,
        FieldComponent::Gyz,
        FieldComponent::Gzz,
    ];

    /// Lowercase component name
    pub const fn name(self) -> &'static str {
        match self {
            FieldComponent::Gz => "gz",
            FieldComponent::Gxx => "gxx",
            FieldComponent::Gxy => "gxy",
            FieldComponent::Gxz => "gxz",
            FieldComponent::Gyy => "gyy",
            FieldComponent::Gyz => "gyz",
            FieldComponent::Gzz => "gzz",
        }
    }

    /// True for second derivatives of the potential
    pub const fn is_tensor(self) -> bool {
        !matches!(self, FieldComponent::Gz)
    }

    /// Conventional unit: mGal for gz, Eotvos for the tensor
    pub const fn default_unit(self) -> FieldUnit {
        match self {
            FieldComponent::Gz => FieldUnit::Mgal,
            _ => FieldUnit::Eotvos,
        }
    }
}

impl fmt::Display for FieldComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldComponent {
    type Err = PrismGravError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FieldComponent::ALL
            .into_iter()
            .find(|component| component.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PrismGravError::UnknownComponent(s.to_string()))
    }
}

// ============================================================================
// Units
// ============================================================================

/// Output unit of a field component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "lowercase"))]
pub enum FieldUnit {
    /// 1 m/s^2 = 10^5 mGal
    #[default]
    Mgal,
    /// 1 /s^2 = 10^9 Eotvos
    Eotvos,
}

impl FieldUnit {
    /// Multiplier from SI to this unit
    pub const fn si_factor(self) -> f64 {
        match self {
            FieldUnit::Mgal => SI2MGAL,
            FieldUnit::Eotvos => SI2EOTVOS,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            FieldUnit::Mgal => "mGal",
            FieldUnit::Eotvos => "E",
        }
    }
}

impl fmt::Display for FieldUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for FieldUnit {
    type Err = PrismGravError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mgal" => Ok(FieldUnit::Mgal),
            "e" | "eotvos" => Ok(FieldUnit::Eotvos),
            other => Err(PrismGravError::InvalidConfig(format!("unknown unit '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_parse_and_display() {
        for component in FieldComponent::ALL {
            let parsed: FieldComponent = component.to_string().parse().unwrap();
            assert_eq!(parsed, component);
        }
        assert_eq!(" GXY ".parse::<FieldComponent>(), Ok(FieldComponent::Gxy));
        assert_eq!(
            "gzy".parse::<FieldComponent>(),
            Err(PrismGravError::UnknownComponent("gzy".into()))
        );
    }

    #[test]
    fn test_tensor_components() {
        assert!(!FieldComponent::Gz.is_tensor());
        assert!(FieldComponent::TENSOR.iter().all(|c| c.is_tensor()));
        assert_eq!(FieldComponent::Gz.default_unit(), FieldUnit::Mgal);
        assert_eq!(FieldComponent::Gyz.default_unit(), FieldUnit::Eotvos);
    }

    #[test]
    fn test_units() {
        assert_eq!(FieldUnit::Mgal.si_factor(), SI2MGAL);
        assert_eq!(FieldUnit::Eotvos.si_factor(), SI2EOTVOS);
        assert_eq!("Eotvos".parse::<FieldUnit>(), Ok(FieldUnit::Eotvos));
        assert_eq!("mGal".parse::<FieldUnit>(), Ok(FieldUnit::Mgal));
        assert!("gal".parse::<FieldUnit>().is_err());
    }
}
