pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::engine::{EstimationEngine, EstimationOutcome};
pub use crate::core::estimator::{estimate, CostEstimator};
pub use crate::core::recommendations::recommend;
pub use crate::core::report::{build_report, render_screen, ReportDocument};
pub use crate::domain::model::{
    CostBreakdown, Estimate, Material, PricingModel, ProjectSpec, ReportFormat,
};
pub use crate::utils::error::{EstimatorError, Result};
