use crate::domain::model::{PricingModel, ReportFormat};
use crate::core::ConfigProvider;
use crate::utils::error::{EstimatorError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub pricing: PricingModel,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_path: String,
    pub formats: Vec<ReportFormat>,
    pub compress: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            formats: vec![ReportFormat::Txt],
            compress: false,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EstimatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EstimatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BASE_RATE})，未設定者保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EstimatorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn pricing(&self) -> &PricingModel {
        &self.pricing
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn report_formats(&self) -> &[ReportFormat] {
        &self.report.formats
    }

    fn compression_enabled(&self) -> bool {
        self.report.compress
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.pricing.validate()?;
        validate_path("report.output_path", &self.report.output_path)?;

        if self.report.formats.is_empty() {
            return Err(EstimatorError::MissingConfigError {
                field: "report.formats".to_string(),
            });
        }

        Ok(())
    }
}
