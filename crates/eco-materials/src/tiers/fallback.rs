//! Tier 5: the terminal state of the cascade.

use crate::request::MaterialRequest;
use crate::strategy::MaterialStrategy;
use eco_catalog::MaterialCatalog;
use eco_types::{MaterialResolution, ResolutionTier, MIXED_MATERIAL};
use std::sync::Arc;

pub const FALLBACK_CONFIDENCE: f64 = 0.1;

/// Always answers "Mixed" with the catalog's default coefficient.
pub struct FallbackStrategy {
    catalog: Arc<MaterialCatalog>,
}

impl FallbackStrategy {
    pub fn new(catalog: Arc<MaterialCatalog>) -> Self {
        Self { catalog }
    }

    pub fn resolution(&self) -> MaterialResolution {
        MaterialResolution::new(
            MIXED_MATERIAL,
            ResolutionTier::Fallback,
            FALLBACK_CONFIDENCE,
            self.catalog.default_record().co2_per_kg,
        )
        .with_method("fallback")
    }
}

impl MaterialStrategy for FallbackStrategy {
    fn tier(&self) -> ResolutionTier {
        ResolutionTier::Fallback
    }

    fn name(&self) -> &str {
        "fallback"
    }

    fn resolve(&self, _request: &MaterialRequest<'_>) -> Option<MaterialResolution> {
        Some(self.resolution())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_always_resolves() {
        let strategy = FallbackStrategy::new(Arc::new(MaterialCatalog::builtin()));
        let res = strategy.resolve(&MaterialRequest::default()).unwrap();
        assert!(res.is_mixed());
        assert_eq!(res.tier.number(), 5);
        assert_eq!(res.confidence, 0.1);
        assert_eq!(res.environmental_impact_score, 2.0);
    }

    #[test]
    fn fallback_follows_catalog_default() {
        let catalog = MaterialCatalog::builtin().with_default_coefficient(4.0).unwrap();
        let res = FallbackStrategy::new(Arc::new(catalog)).resolution();
        assert_eq!(res.environmental_impact_score, 4.0);
    }
}
