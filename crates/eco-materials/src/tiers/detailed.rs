//! Tiers 1 and 2: structured material lists from upstream extraction.

use crate::impact::{canonical_name, split_impact, weighted_impact};
use crate::request::MaterialRequest;
use crate::strategy::MaterialStrategy;
use eco_catalog::MaterialCatalog;
use eco_types::{MaterialResolution, MaterialShare, ResolutionTier, StructuredMaterial};
use std::sync::Arc;

pub const PERCENTAGE_CONFIDENCE: f64 = 0.95;
pub const RANKED_CONFIDENCE: f64 = 0.8;

/// Largest fraction accepted; anything above cannot be a percentage.
pub const MAX_FRACTION: f64 = 100.0;

/// Tier 1: materials with weight fractions.
///
/// Fractions are expected in `0..=1`; a list containing any value above 1 is
/// read as percentages. Values above 100 are not fractions at all and are
/// treated like missing ones. Materials without a usable fraction are kept
/// as secondaries without a percentage.
pub struct PercentageStrategy {
    catalog: Arc<MaterialCatalog>,
}

impl PercentageStrategy {
    pub fn new(catalog: Arc<MaterialCatalog>) -> Self {
        Self { catalog }
    }
}

impl MaterialStrategy for PercentageStrategy {
    fn tier(&self) -> ResolutionTier {
        ResolutionTier::DetailedWithPercentages
    }

    fn name(&self) -> &str {
        "structured_percentages"
    }

    fn resolve(&self, request: &MaterialRequest<'_>) -> Option<MaterialResolution> {
        let named: Vec<&StructuredMaterial> = request
            .structured
            .iter()
            .filter(|m| !m.name.trim().is_empty())
            .collect();

        let mut weighted: Vec<(String, f64)> = named
            .iter()
            .filter(|m| usable_fraction(m))
            .map(|m| (canonical_name(&self.catalog, &m.name), m.fraction.unwrap_or_default()))
            .collect();
        if weighted.is_empty() {
            return None;
        }

        let scale = if weighted.iter().any(|(_, f)| *f > 1.0) {
            1.0
        } else {
            100.0
        };
        weighted.sort_by(|a, b| b.1.total_cmp(&a.1));

        let shares: Vec<(&str, f64)> = weighted.iter().map(|(n, f)| (n.as_str(), *f)).collect();
        let impact = weighted_impact(&self.catalog, &shares);

        let mut secondary: Vec<MaterialShare> = weighted[1..]
            .iter()
            .map(|(name, f)| MaterialShare::new(name.clone(), Some(percent(*f, scale))))
            .collect();
        secondary.extend(
            named
                .iter()
                .filter(|m| !usable_fraction(m))
                .map(|m| MaterialShare::new(canonical_name(&self.catalog, &m.name), None)),
        );

        let (primary, fraction) = &weighted[0];
        Some(
            MaterialResolution::new(primary.clone(), self.tier(), PERCENTAGE_CONFIDENCE, impact)
                .with_primary_percentage(percent(*fraction, scale))
                .with_secondary(secondary)
                .with_method(self.name()),
        )
    }
}

fn usable_fraction(material: &StructuredMaterial) -> bool {
    material.has_fraction() && material.fraction.is_some_and(|f| f <= MAX_FRACTION)
}

fn percent(fraction: f64, scale: f64) -> f64 {
    (fraction * scale).clamp(0.0, 100.0)
}

/// Tier 2: materials without fractions, ordered by extractor confidence.
pub struct RankedStrategy {
    catalog: Arc<MaterialCatalog>,
}

impl RankedStrategy {
    pub fn new(catalog: Arc<MaterialCatalog>) -> Self {
        Self { catalog }
    }
}

impl MaterialStrategy for RankedStrategy {
    fn tier(&self) -> ResolutionTier {
        ResolutionTier::DetailedWithoutPercentages
    }

    fn name(&self) -> &str {
        "structured_ranked"
    }

    fn resolve(&self, request: &MaterialRequest<'_>) -> Option<MaterialResolution> {
        let mut ranked: Vec<(String, f64)> = request
            .structured
            .iter()
            .filter(|m| !m.name.trim().is_empty())
            .map(|m| {
                let confidence = m.confidence.filter(|c| c.is_finite()).unwrap_or(0.0);
                (canonical_name(&self.catalog, &m.name), confidence)
            })
            .collect();
        if ranked.is_empty() {
            return None;
        }
        // stable: equal confidences keep upstream order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let primary = ranked[0].0.clone();
        let secondary: Vec<&str> = ranked[1..].iter().map(|(n, _)| n.as_str()).collect();
        let impact = split_impact(&self.catalog, &primary, &secondary);

        Some(
            MaterialResolution::new(primary, self.tier(), RANKED_CONFIDENCE, impact)
                .with_secondary(
                    secondary
                        .iter()
                        .map(|n| MaterialShare::new(*n, None))
                        .collect(),
                )
                .with_method(self.name()),
        )
    }
}
