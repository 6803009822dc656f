pub use crate::domain::model::RecommendationBands;

pub const SIMPLE_TIPS: [&str; 2] = [
    "Simplify your design to reduce material and labor costs.",
    "Consider using standard materials to lower material expenses.",
];

pub const MODERATE_TIPS: [&str; 2] = [
    "Optimize the design for efficient 3D printing.",
    "Explore different material options to balance cost and quality.",
];

pub const COMPLEX_TIPS: [&str; 2] = [
    "Collaborate with experienced professionals to tackle complex projects.",
    "Invest in advanced materials and technologies for high-quality results.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityBand {
    Simple,
    Moderate,
    Complex,
}

impl ComplexityBand {
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            ComplexityBand::Simple => &SIMPLE_TIPS,
            ComplexityBand::Moderate => &MODERATE_TIPS,
            ComplexityBand::Complex => &COMPLEX_TIPS,
        }
    }
}

impl RecommendationBands {
    pub fn band_for(&self, complexity: i64) -> ComplexityBand {
        if complexity <= self.simple_max {
            ComplexityBand::Simple
        } else if complexity <= self.moderate_max {
            ComplexityBand::Moderate
        } else {
            ComplexityBand::Complex
        }
    }

    pub fn recommend(&self, complexity: i64) -> Vec<String> {
        self.band_for(complexity)
            .tips()
            .iter()
            .map(|tip| tip.to_string())
            .collect()
    }
}

/// Recommendations for `complexity` using the default bands.
pub fn recommend(complexity: i64) -> Vec<String> {
    RecommendationBands::default().recommend(complexity)
}
