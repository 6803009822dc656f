use crate::domain::model::{CostBreakdown, Material, ProjectSpec};

pub use crate::domain::model::{
    MaterialMultipliers, PricingModel, DEFAULT_BASE_RATE_PER_SQ_CM, DEFAULT_COMPLEXITY_DIVISOR,
};

impl MaterialMultipliers {
    pub fn multiplier_for(&self, material: &Material) -> f64 {
        match material {
            Material::Plastic => self.plastic,
            Material::Metal => self.metal,
            Material::Wood => self.wood,
            Material::Other(_) => self.fallback,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    pricing: PricingModel,
}

impl CostEstimator {
    pub fn new(pricing: PricingModel) -> Self {
        Self { pricing }
    }

    pub fn pricing(&self) -> &PricingModel {
        &self.pricing
    }

    /// Returns `(total_cost, breakdown)` for `spec`. Pure; inputs are expected
    /// to be validated by the caller.
    pub fn estimate(&self, spec: &ProjectSpec) -> (f64, CostBreakdown) {
        let base_cost = spec.width * spec.length * self.pricing.base_rate_per_sq_cm;
        let material_cost = base_cost * self.pricing.materials.multiplier_for(&spec.material);
        let complexity_cost =
            base_cost * (f64::from(spec.complexity) / self.pricing.complexity_divisor);

        let breakdown = CostBreakdown {
            base_cost,
            material_cost,
            complexity_cost,
        };
        let total_cost = base_cost + material_cost + complexity_cost;

        tracing::debug!(
            "Estimated {}x{} cm {} (complexity {}): base={:.4}, material={:.4}, complexity={:.4}, total={:.4}",
            spec.width,
            spec.length,
            spec.material,
            spec.complexity,
            base_cost,
            material_cost,
            complexity_cost,
            total_cost
        );

        (total_cost, breakdown)
    }
}

/// Estimates with the default pricing model.
pub fn estimate(spec: &ProjectSpec) -> (f64, CostBreakdown) {
    CostEstimator::default().estimate(spec)
}
