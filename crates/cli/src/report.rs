//! Evaluation results and their text/JSON rendering

use prismgrav_core::{
    Evaluator, FieldComponent, FieldUnit, ObservationPoint, PointLocation, Prism,
};
use serde::{Deserialize, Serialize};

use crate::config::{OutputConfig, OutputFormat};
use crate::error::CliResult;

/// One evaluated component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentValue {
    pub component: FieldComponent,
    pub value: f64,
    pub unit: FieldUnit,
}

/// Everything computed for a single prism and observation point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub prism: Prism,
    pub point: ObservationPoint,
    pub location: PointLocation,
    pub values: Vec<ComponentValue>,
}

impl Report {
    /// Evaluate the requested components
    pub fn compute(
        evaluator: &Evaluator,
        prism: &Prism,
        point: &ObservationPoint,
        components: &[FieldComponent],
    ) -> Self {
        let values = components
            .iter()
            .map(|&component| ComponentValue {
                component,
                value: evaluator.evaluate(prism, point, component),
                unit: evaluator.config().unit_for(component),
            })
            .collect();

        Self {
            prism: *prism,
            point: *point,
            location: prism.locate(point),
            values,
        }
    }

    /// Render in the configured format
    pub fn render(&self, output: &OutputConfig) -> CliResult<String> {
        match output.format {
            OutputFormat::Text => Ok(self.render_text(output.precision)),
            OutputFormat::Json => self.render_json(),
        }
    }

    /// One `name = value unit` line per component
    pub fn render_text(&self, precision: usize) -> String {
        let digits = precision.saturating_sub(1);
        self.values
            .iter()
            .map(|v| format!("{} = {:.*e} {}", v.component, digits, v.value, v.unit))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_json(&self) -> CliResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(components: &[FieldComponent]) -> Report {
        let prism = Prism::new(-0.5, 0.5, -0.5, 0.5, 0.0, 1.0, 1000.0).unwrap();
        let point = ObservationPoint::new(0.0, 0.0, -10.0).unwrap();
        Report::compute(&Evaluator::default(), &prism, &point, components)
    }

    #[test]
    fn test_compute_reports_units() {
        let report = report(&FieldComponent::ALL);
        assert_eq!(report.values.len(), 7);
        assert_eq!(report.location, PointLocation::Outside);
        assert_eq!(report.values[0].unit, FieldUnit::Mgal);
        assert!(report.values[0].value > 0.0);
        assert!(report.values[1..].iter().all(|v| v.unit == FieldUnit::Eotvos));
    }

    #[test]
    fn test_render_text() {
        let mut report = report(&[FieldComponent::Gz, FieldComponent::Gzz]);
        report.values[0].value = 1.5;
        report.values[1].value = -0.25;
        assert_eq!(report.render_text(3), "gz = 1.50e0 mGal\ngzz = -2.50e-1 E");
    }

    #[test]
    fn test_render_json() {
        let report = report(&[FieldComponent::Gxy]);
        let json = report.render_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["values"][0]["component"], "gxy");
        assert_eq!(parsed["values"][0]["unit"], "eotvos");
        assert_eq!(parsed["location"], "outside");
        assert_eq!(parsed["point"]["z"], -10.0);
    }
}
