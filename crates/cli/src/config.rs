use std::fs;
use std::path::Path;

use prismgrav_core::{EvaluatorConfig, FieldUnit, Summation};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Largest number of significant digits that still means something for f64
const MAX_PRECISION: usize = 17;

/// Evaluator configuration loaded from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Units and summation strategy
    pub evaluator: EvaluatorConfig,

    /// How results are printed
    pub output: OutputConfig,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Significant digits in text output
    pub precision: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl CliConfig {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> CliResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::InvalidConfig(format!("failed to read config file {}: {}", path.display(), e))
        })?;

        let config = Self::parse(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration when the file exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> CliResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: CliConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> CliResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        self.output.validate()
    }
}

impl OutputConfig {
    fn validate(&self) -> CliResult<()> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(CliError::InvalidConfig(format!(
                "output.precision is {}, expected 1 to {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 10,
        }
    }
}

/// Create example configuration file
pub fn create_example_config(path: impl AsRef<Path>) -> CliResult<()> {
    let example_config = CliConfig {
        evaluator: EvaluatorConfig {
            gz_unit: FieldUnit::Mgal,
            summation: Summation::Compensated,
        },
        output: OutputConfig {
            format: OutputFormat::Text,
            precision: 12,
        },
    };

    example_config.save(path)
}
