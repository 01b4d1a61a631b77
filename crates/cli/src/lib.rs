pub mod config;
pub mod error;
pub mod report;

pub use config::{CliConfig, OutputConfig, OutputFormat};
pub use error::CliError;
pub use report::{ComponentValue, Report};
