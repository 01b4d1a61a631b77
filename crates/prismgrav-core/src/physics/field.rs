//! # Prism Field Evaluation
//!
//! Scales the corner sums by `G * density` and the unit conversion factor.
//! The seven `prism_*` functions are thin wrappers over [`evaluate`] that
//! keep the flat `(dens, x1, x2, y1, y2, z1, z2, xp, yp, zp)` signature.
//!
//! Evaluation is total: a degenerate prism yields exactly 0, a point on a
//! face yields the mean of the interior and exterior limits of the
//! discontinuous diagonal component, and a point on an edge or vertex yields
//! the finite value obtained by dropping the divergent logarithm. Callers
//! that cannot accept those values should screen points with
//! [`Prism::locate`](crate::types::Prism::locate).

use crate::config::EvaluatorConfig;
use crate::constants::G;
use crate::physics::kernel::{corner_sum, CornerOffsets};
use crate::types::{FieldComponent, FieldResponse, GravityTensor, ObservationPoint, Prism};

/// Stateless prism field evaluator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub const fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Value of one field component at `point`
    pub fn evaluate(&self, prism: &Prism, point: &ObservationPoint, component: FieldComponent) -> f64 {
        if prism.is_degenerate() {
            return 0.0;
        }

        let offsets = CornerOffsets::new(prism, point);
        let sum = corner_sum(&offsets, component, self.config.summation);
        G * self.config.unit_for(component).si_factor() * prism.density * sum
    }

    /// The six gradient tensor components at `point`
    pub fn tensor(&self, prism: &Prism, point: &ObservationPoint) -> GravityTensor {
        let eval = |component| self.evaluate(prism, point, component);
        GravityTensor {
            xx: eval(FieldComponent::Gxx),
            xy: eval(FieldComponent::Gxy),
            xz: eval(FieldComponent::Gxz),
            yy: eval(FieldComponent::Gyy),
            yz: eval(FieldComponent::Gyz),
            zz: eval(FieldComponent::Gzz),
        }
    }

    /// All seven components at `point`
    pub fn field(&self, prism: &Prism, point: &ObservationPoint) -> FieldResponse {
        FieldResponse {
            gz: self.evaluate(prism, point, FieldComponent::Gz),
            tensor: self.tensor(prism, point),
        }
    }
}

/// Evaluate one component with the default configuration.
///
/// `borders` is `[x1, x2, y1, y2, z1, z2]` and `point` is `[xp, yp, zp]`.
/// Border ordering is not checked; inverted borders flip the sign.
pub fn evaluate(density: f64, borders: [f64; 6], point: [f64; 3], component: FieldComponent) -> f64 {
    let [x1, x2, y1, y2, z1, z2] = borders;
    let prism = Prism::from_borders_unchecked(x1, x2, y1, y2, z1, z2, density);
    Evaluator::default().evaluate(&prism, &ObservationPoint::from(point), component)
}

/// Macro to generate the flat per-component entry points
macro_rules! prism_component {
    ($fn_name:ident, $component:expr, $doc:literal) => {
        #[doc = $doc]
        #[allow(clippy::too_many_arguments)]
        pub fn $fn_name(
            dens: f64,
            x1: f64,
            x2: f64,
            y1: f64,
            y2: f64,
            z1: f64,
            z2: f64,
            xp: f64,
            yp: f64,
            zp: f64,
        ) -> f64 {
            evaluate(dens, [x1, x2, y1, y2, z1, z2], [xp, yp, zp], $component)
        }
    };
}

prism_component!(prism_gz, FieldComponent::Gz, "Vertical gravity in mGal, positive downward");
prism_component!(prism_gxx, FieldComponent::Gxx, "Gxx gradient component in Eotvos");
prism_component!(prism_gxy, FieldComponent::Gxy, "Gxy gradient component in Eotvos");
prism_component!(prism_gxz, FieldComponent::Gxz, "Gxz gradient component in Eotvos");
prism_component!(prism_gyy, FieldComponent::Gyy, "Gyy gradient component in Eotvos");
prism_component!(prism_gyz, FieldComponent::Gyz, "Gyz gradient component in Eotvos");
prism_component!(prism_gzz, FieldComponent::Gzz, "Gzz gradient component in Eotvos");
