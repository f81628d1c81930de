//! Numeric encoding of an analysis for the classifier seam.

use eco_catalog::{ComplexityTable, MaterialCatalog};
use eco_types::{
    normalize_key, EmissionEstimate, MaterialResolution, ProductSignal, RecyclabilityClass,
    TransportMode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Countries with their own origin index; anything else shares the last.
const KNOWN_ORIGINS: &[&str] = &[
    "china",
    "united states",
    "germany",
    "japan",
    "india",
    "vietnam",
    "united kingdom",
    "italy",
    "france",
    "bangladesh",
    "turkey",
    "mexico",
    "south korea",
    "taiwan",
];

/// Engineered features for one analyzed product.
///
/// Indices are positions in sorted catalog keys; a value outside the
/// catalog gets index `len` (one past the last known entry).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub material_index: f64,
    pub transport_index: f64,
    pub recyclability_index: f64,
    pub origin_index: f64,
    pub weight_kg: f64,
    pub weight_log1p: f64,
    pub category_index: f64,
    pub material_co2_per_kg: f64,
    pub complexity_factor: f64,
    pub transport_multiplier: f64,
    pub material_confidence: f64,
}

impl FeatureVector {
    pub const NAMES: [&'static str; 11] = [
        "material_index",
        "transport_index",
        "recyclability_index",
        "origin_index",
        "weight_kg",
        "weight_log1p",
        "category_index",
        "material_co2_per_kg",
        "complexity_factor",
        "transport_multiplier",
        "material_confidence",
    ];

    pub fn to_array(&self) -> [f64; 11] {
        [
            self.material_index,
            self.transport_index,
            self.recyclability_index,
            self.origin_index,
            self.weight_kg,
            self.weight_log1p,
            self.category_index,
            self.material_co2_per_kg,
            self.complexity_factor,
            self.transport_multiplier,
            self.material_confidence,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

/// Builds [`FeatureVector`]s against the engine's catalogs.
#[derive(Clone, Debug)]
pub struct FeatureEncoder {
    materials: Arc<MaterialCatalog>,
    complexity: Arc<ComplexityTable>,
}

impl FeatureEncoder {
    pub fn new(materials: Arc<MaterialCatalog>, complexity: Arc<ComplexityTable>) -> Self {
        Self {
            materials,
            complexity,
        }
    }

    pub fn encode(
        &self,
        signal: &ProductSignal,
        resolution: &MaterialResolution,
        estimate: &EmissionEstimate,
        transport_multiplier: f64,
    ) -> FeatureVector {
        let material_index = self
            .materials
            .index_of(&resolution.primary_material)
            .unwrap_or(self.materials.len());
        let recyclability = self.materials.lookup(&resolution.primary_material).recyclability;
        let category_index = self
            .complexity
            .categories()
            .iter()
            .position(|c| *c == estimate.complexity.category)
            .unwrap_or(self.complexity.len());

        FeatureVector {
            material_index: material_index as f64,
            transport_index: transport_index(signal.transport_mode) as f64,
            recyclability_index: recyclability_index(recyclability) as f64,
            origin_index: origin_index(signal.origin.as_deref()) as f64,
            weight_kg: estimate.weight_kg,
            weight_log1p: estimate.weight_kg.ln_1p(),
            category_index: category_index as f64,
            material_co2_per_kg: resolution.environmental_impact_score,
            complexity_factor: estimate.complexity.complexity_factor,
            transport_multiplier,
            material_confidence: resolution.confidence,
        }
    }
}

fn transport_index(mode: TransportMode) -> usize {
    TransportMode::ALL
        .iter()
        .position(|m| *m == mode)
        .unwrap_or(TransportMode::ALL.len())
}

fn recyclability_index(class: RecyclabilityClass) -> usize {
    match class {
        RecyclabilityClass::Low => 0,
        RecyclabilityClass::Medium => 1,
        RecyclabilityClass::High => 2,
    }
}

fn origin_index(origin: Option<&str>) -> usize {
    let Some(origin) = origin else {
        return KNOWN_ORIGINS.len();
    };
    let key = match normalize_key(origin).as_str() {
        "usa" | "us" | "united states of america" => "united states".to_string(),
        "uk" | "great britain" | "england" => "united kingdom".to_string(),
        other => other.to_string(),
    };
    KNOWN_ORIGINS
        .iter()
        .position(|o| *o == key)
        .unwrap_or(KNOWN_ORIGINS.len())
}
