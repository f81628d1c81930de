use crate::bands::ScoreBands;
use crate::error::{EmissionError, Result};
use eco_catalog::ComplexityTable;
use eco_types::{EmissionBreakdown, EmissionEstimate};
use std::sync::Arc;
use tracing::debug;

/// Complexity-adjusted CO2 estimator.
///
/// Holds the manufacturing complexity table and the score bands; both are
/// immutable after construction, so one estimator can serve any number of
/// threads.
#[derive(Clone, Debug)]
pub struct EmissionEstimator {
    complexity: Arc<ComplexityTable>,
    bands: ScoreBands,
}

impl EmissionEstimator {
    pub fn new(complexity: Arc<ComplexityTable>, bands: ScoreBands) -> Self {
        Self { complexity, bands }
    }

    /// Built-in complexity table with the recalibrated bands.
    pub fn builtin() -> Self {
        Self::new(Arc::new(ComplexityTable::builtin()), ScoreBands::recalibrated())
    }

    pub fn complexity(&self) -> &ComplexityTable {
        &self.complexity
    }

    pub fn bands(&self) -> &ScoreBands {
        &self.bands
    }

    /// Estimate the footprint of `weight_kg` of a material emitting
    /// `co2_per_kg`, shipped with `transport_multiplier`, in `category`.
    pub fn estimate(
        &self,
        weight_kg: f64,
        co2_per_kg: f64,
        transport_multiplier: f64,
        category: &str,
    ) -> Result<EmissionEstimate> {
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(EmissionError::InvalidWeight(weight_kg));
        }
        if !(co2_per_kg.is_finite() && co2_per_kg > 0.0) {
            return Err(EmissionError::InvalidCoefficient(co2_per_kg));
        }
        if !(transport_multiplier.is_finite() && transport_multiplier >= 1.0) {
            return Err(EmissionError::InvalidTransportMultiplier(transport_multiplier));
        }

        let complexity = self.complexity.lookup(category);

        let material_co2 = weight_kg * co2_per_kg;
        let baseline_co2_kg = material_co2 * transport_multiplier;
        let manufacturing = material_co2 * (complexity.complexity_factor - 1.0);
        let co2_kg = manufacturing + baseline_co2_kg;

        let breakdown = EmissionBreakdown {
            materials: material_co2,
            manufacturing,
            transport: material_co2 * (transport_multiplier - 1.0),
        };
        debug_assert!(
            (breakdown.total() - co2_kg).abs() <= 1e-9 * co2_kg.max(1.0),
            "breakdown {} does not sum to {}",
            breakdown.total(),
            co2_kg
        );

        let eco_score = self.bands.grade(co2_kg);

        debug!(
            category = %complexity.category,
            complexity_factor = complexity.complexity_factor,
            weight_kg,
            co2_kg,
            score = %eco_score,
            "Emission estimate"
        );

        Ok(EmissionEstimate {
            weight_kg,
            co2_kg,
            eco_score,
            breakdown,
            baseline_co2_kg,
            complexity,
        })
    }
}

impl Default for EmissionEstimator {
    fn default() -> Self {
        Self::builtin()
    }
}
