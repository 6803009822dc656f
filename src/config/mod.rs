pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::ReportFormat;
#[cfg(feature = "cli")]
use crate::core::ProjectSpec;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use self::toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cost-estimator")]
#[command(about = "Estimate the cost of a 3D modeling project")]
pub struct CliConfig {
    /// Project width in cm (1-100)
    #[arg(long, default_value = "10")]
    pub width: f64,

    /// Project length in cm (1-100)
    #[arg(long, default_value = "10")]
    pub length: f64,

    /// Material: Plastic, Metal or Wood
    #[arg(long, default_value = "Plastic")]
    pub material: String,

    /// Complexity from 1 (simple) to 10 (complex)
    #[arg(long, default_value = "5")]
    pub complexity: u8,

    /// Pricing configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override report output directory
    #[arg(long)]
    pub output_path: Option<String>,

    /// Override report formats: txt, json, csv
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<ReportFormat>,

    /// Bundle the report files into a single ZIP archive
    #[arg(long)]
    pub compress: bool,

    /// Show the estimate without writing a report
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn project_spec(&self) -> ProjectSpec {
        ProjectSpec::new(
            self.width,
            self.length,
            self.material.as_str(),
            self.complexity,
        )
    }

    /// 載入定價設定 (未指定檔案時使用預設值) 並套用命令列覆蓋
    pub fn load_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading pricing configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_overrides(&self, settings: &mut TomlConfig) {
        if let Some(output_path) = &self.output_path {
            settings.report.output_path = output_path.clone();
            tracing::info!("🔧 Output path overridden to: {}", output_path);
        }
        if !self.formats.is_empty() {
            settings.report.formats = self.formats.clone();
            tracing::info!("🔧 Report formats overridden to: {:?}", self.formats);
        }
        if self.compress {
            settings.report.compress = true;
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.project_spec().validate()
    }
}
