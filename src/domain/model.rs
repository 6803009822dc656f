use crate::utils::error::{EstimatorError, Result};
use crate::utils::validation::{validate_non_negative, validate_positive, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DIMENSION_MIN_CM: f64 = 1.0;
pub const DIMENSION_MAX_CM: f64 = 100.0;
pub const COMPLEXITY_MIN: u8 = 1;
pub const COMPLEXITY_MAX: u8 = 10;

/// Material choice for a project.
///
/// Parsing never fails. Names must match `Plastic`, `Metal` or `Wood` exactly;
/// anything else is kept verbatim as `Other` and priced with the fallback
/// multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Material {
    Plastic,
    Metal,
    Wood,
    Other(String),
}

impl Material {
    pub fn name(&self) -> &str {
        match self {
            Material::Plastic => "Plastic",
            Material::Metal => "Metal",
            Material::Wood => "Wood",
            Material::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Material::Other(_))
    }
}

impl From<&str> for Material {
    fn from(value: &str) -> Self {
        match value {
            "Plastic" => Material::Plastic,
            "Metal" => Material::Metal,
            "Wood" => Material::Wood,
            _ => Material::Other(value.to_string()),
        }
    }
}

impl From<String> for Material {
    fn from(value: String) -> Self {
        Material::from(value.as_str())
    }
}

impl From<Material> for String {
    fn from(value: Material) -> Self {
        value.name().to_string()
    }
}

impl FromStr for Material {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Material::from(s))
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One estimation request. Built fresh per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub width: f64,
    pub length: f64,
    pub material: Material,
    pub complexity: u8,
}

impl ProjectSpec {
    pub fn new(width: f64, length: f64, material: impl Into<Material>, complexity: u8) -> Self {
        Self {
            width,
            length,
            material: material.into(),
            complexity,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}

impl Validate for ProjectSpec {
    fn validate(&self) -> Result<()> {
        validate_range("width", self.width, DIMENSION_MIN_CM, DIMENSION_MAX_CM)?;
        validate_range("length", self.length, DIMENSION_MIN_CM, DIMENSION_MAX_CM)?;
        validate_range("complexity", self.complexity, COMPLEXITY_MIN, COMPLEXITY_MAX)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub base_cost: f64,
    pub material_cost: f64,
    pub complexity_cost: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.base_cost + self.material_cost + self.complexity_cost
    }
}

/// Full result of one estimation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub total_cost: f64,
    pub breakdown: CostBreakdown,
    pub recommendations: Vec<String>,
}

pub const DEFAULT_BASE_RATE_PER_SQ_CM: f64 = 0.05;
pub const DEFAULT_COMPLEXITY_DIVISOR: f64 = 5.0;

/// Per-material scalar applied to the base cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialMultipliers {
    pub plastic: f64,
    pub metal: f64,
    pub wood: f64,
    /// Used for any material outside the known set.
    pub fallback: f64,
}

impl Default for MaterialMultipliers {
    fn default() -> Self {
        Self {
            plastic: 1.0,
            metal: 1.5,
            wood: 1.2,
            fallback: 1.0,
        }
    }
}

/// Upper bounds (inclusive) of the simple and moderate bands; everything above
/// `moderate_max` is complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationBands {
    pub simple_max: i64,
    pub moderate_max: i64,
}

impl Default for RecommendationBands {
    fn default() -> Self {
        Self {
            simple_max: 3,
            moderate_max: 7,
        }
    }
}

impl Validate for RecommendationBands {
    fn validate(&self) -> Result<()> {
        if self.simple_max > self.moderate_max {
            return Err(EstimatorError::ConfigValidationError {
                field: "recommendations".to_string(),
                message: format!(
                    "simple_max ({}) must not exceed moderate_max ({})",
                    self.simple_max, self.moderate_max
                ),
            });
        }
        Ok(())
    }
}

/// Pricing constants. The defaults are placeholder calibration values and can
/// be overridden from the TOML config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingModel {
    pub base_rate_per_sq_cm: f64,
    pub complexity_divisor: f64,
    pub materials: MaterialMultipliers,
    #[serde(rename = "recommendations")]
    pub bands: RecommendationBands,
}

impl Default for PricingModel {
    fn default() -> Self {
        Self {
            base_rate_per_sq_cm: DEFAULT_BASE_RATE_PER_SQ_CM,
            complexity_divisor: DEFAULT_COMPLEXITY_DIVISOR,
            materials: MaterialMultipliers::default(),
            bands: RecommendationBands::default(),
        }
    }
}

impl Validate for PricingModel {
    fn validate(&self) -> Result<()> {
        validate_non_negative("pricing.base_rate_per_sq_cm", self.base_rate_per_sq_cm)?;
        validate_positive("pricing.complexity_divisor", self.complexity_divisor)?;
        validate_non_negative("pricing.materials.plastic", self.materials.plastic)?;
        validate_non_negative("pricing.materials.metal", self.materials.metal)?;
        validate_non_negative("pricing.materials.wood", self.materials.wood)?;
        validate_non_negative("pricing.materials.fallback", self.materials.fallback)?;
        self.bands.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Txt,
    Json,
    Csv,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::Txt, ReportFormat::Json, ReportFormat::Csv];

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Txt => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(ReportFormat::Txt),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(format!(
                "Unsupported report format '{}'. Valid formats: txt, json, csv",
                other
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
