//! # Evaluator Configuration

use std::fmt;
use std::str::FromStr;

use crate::errors::PrismGravError;
use crate::types::{FieldComponent, FieldUnit};

#[cfg(feature = "client")]
use serde::{Deserialize, Serialize};

/// How the eight signed corner terms are accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "lowercase"))]
pub enum Summation {
    /// Plain left-to-right double precision sum
    Naive,
    /// Neumaier compensated sum
    #[default]
    Compensated,
}

impl fmt::Display for Summation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summation::Naive => f.write_str("naive"),
            Summation::Compensated => f.write_str("compensated"),
        }
    }
}

impl FromStr for Summation {
    type Err = PrismGravError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Summation::Naive),
            "compensated" => Ok(Summation::Compensated),
            other => Err(PrismGravError::InvalidConfig(format!(
                "unknown summation mode '{}'",
                other
            ))),
        }
    }
}

/// Evaluator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "client", serde(default))]
pub struct EvaluatorConfig {
    /// Unit of the vertical gravity component. Tensor components are always
    /// in Eotvos.
    pub gz_unit: FieldUnit,

    /// Accumulation strategy for the corner terms
    pub summation: Summation,
}

impl EvaluatorConfig {
    /// Unit a component is reported in under this configuration
    pub fn unit_for(&self, component: FieldComponent) -> FieldUnit {
        match component {
            FieldComponent::Gz => self.gz_unit,
            other => other.default_unit(),
        }
    }

    pub fn with_gz_unit(self, gz_unit: FieldUnit) -> Self {
        Self { gz_unit, ..self }
    }

    pub fn with_summation(self, summation: Summation) -> Self {
        Self { summation, ..self }
    }
}
