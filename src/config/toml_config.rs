use crate::core::ConfigProvider;
use crate::utils::error::{Result, SolveError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub input: Option<InputConfig>,
    pub report: Option<ReportConfig>,
    pub monitoring: Option<MonitoringConfig>,
    pub environment: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SolveError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SolveError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NUMBERS_FILE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.path.as_deref())
    }

    fn output_path(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.output_path.as_deref())
    }

    fn report_format(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| r.format.as_deref())
            .unwrap_or("plain")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_non_empty_string("pipeline.version", &self.pipeline.version)?;

        validation::validate_report_format("report.format", self.report_format())?;

        if let Some(path) = self.input_path() {
            validation::validate_path("input.path", path)?;
        }
        if let Some(path) = self.output_path() {
            validation::validate_path("report.output_path", path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[pipeline]
name = "single-number"
description = "XOR fold over a number stream"
version = "0.1.0"
"#;

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let config = TomlConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.pipeline.name, "single-number");
        assert_eq!(config.report_format(), "plain");
        assert!(config.input_path().is_none());
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config_round_trip() {
        let content = r#"
[pipeline]
name = "single-number"
description = "XOR fold over a number stream"
version = "0.1.0"

[input]
path = "data/numbers.txt"

[report]
format = "json"
output_path = "out/result.json"

[monitoring]
enabled = true
log_level = "debug"
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.input_path(), Some("data/numbers.txt"));
        assert_eq!(config.report_format(), "json");
        assert_eq!(config.output_path(), Some("out/result.json"));
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_report_format_fails_validation() {
        let content = r#"
[pipeline]
name = "single-number"
description = "XOR fold over a number stream"
version = "0.1.0"

[report]
format = "csv"
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SINGLE_NUMBER_TEST_INPUT", "env/numbers.txt");
        let content = r#"
[pipeline]
name = "single-number"
description = "XOR fold over a number stream"
version = "0.1.0"

[input]
path = "${SINGLE_NUMBER_TEST_INPUT}"
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.input_path(), Some("env/numbers.txt"));
        std::env::remove_var("SINGLE_NUMBER_TEST_INPUT");
    }

    #[test]
    fn test_unset_env_var_left_as_is() {
        let content = r#"
[pipeline]
name = "single-number"
description = "XOR fold over a number stream"
version = "0.1.0"

[input]
path = "${SINGLE_NUMBER_UNSET_VAR}"
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.input_path(), Some("${SINGLE_NUMBER_UNSET_VAR}"));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("not toml at all [").unwrap_err();
        assert!(matches!(
            err,
            SolveError::ConfigValidationError { .. }
        ));
    }
}
