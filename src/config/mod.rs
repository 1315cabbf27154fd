#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "single-number")]
#[command(about = "Find the value appearing an odd number of times in a stream of integers")]
pub struct CliConfig {
    /// Read input from a file instead of stdin
    #[arg(long)]
    pub input: Option<String>,

    /// Write the result line to a file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    /// Report format: plain (bare decimal) or json
    #[arg(long, default_value = "plain")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn report_format(&self) -> &str {
        &self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_report_format("format", &self.format)?;

        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
        }
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            input: None,
            output: None,
            format: "plain".to_string(),
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_format() {
        let mut config = base_config();
        config.format = "yaml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_input_path() {
        let mut config = base_config();
        config.input = Some(String::new());
        assert!(config.validate().is_err());
    }
}
