use crate::request::MaterialRequest;
use crate::strategy::MaterialStrategy;
use crate::tiers::{
    FallbackStrategy, KeywordStrategy, PercentageStrategy, ProductTypeStrategy, RankedStrategy,
};
use eco_catalog::MaterialCatalog;
use eco_types::{MaterialResolution, ProductSignal, StructuredMaterial};
use std::sync::Arc;
use tracing::debug;

/// Runs the material tiers in ascending order until one answers.
///
/// The fallback tier is held separately from the configurable chain, so the
/// resolver is total regardless of which strategies it was built with.
pub struct MaterialResolver {
    strategies: Vec<Box<dyn MaterialStrategy>>,
    fallback: FallbackStrategy,
}

impl MaterialResolver {
    /// Resolver over an explicit chain. Strategies are ordered by tier;
    /// strategies sharing a tier keep the given order.
    pub fn new(catalog: Arc<MaterialCatalog>, mut strategies: Vec<Box<dyn MaterialStrategy>>) -> Self {
        strategies.sort_by_key(|s| s.tier());
        Self {
            strategies,
            fallback: FallbackStrategy::new(catalog),
        }
    }

    /// The standard five-tier cascade with built-in keyword tables.
    pub fn builtin(catalog: Arc<MaterialCatalog>) -> eco_types::Result<Self> {
        let strategies: Vec<Box<dyn MaterialStrategy>> = vec![
            Box::new(PercentageStrategy::new(catalog.clone())),
            Box::new(RankedStrategy::new(catalog.clone())),
            Box::new(KeywordStrategy::builtin(catalog.clone())?),
            Box::new(ProductTypeStrategy::builtin(catalog.clone())?),
        ];
        Ok(Self::new(catalog, strategies))
    }

    pub fn resolve(&self, request: &MaterialRequest<'_>) -> MaterialResolution {
        for strategy in &self.strategies {
            if let Some(resolution) = strategy.resolve(request) {
                debug!(
                    title = request.title,
                    tier = resolution.tier.number(),
                    strategy = strategy.name(),
                    material = %resolution.primary_material,
                    confidence = resolution.confidence,
                    "Materials resolved"
                );
                return resolution;
            }
        }

        debug!(title = request.title, "No tier matched; falling back to mixed material");
        self.fallback.resolution()
    }

    /// Resolve from a product signal plus optional structured extraction.
    pub fn resolve_signal(&self, signal: &ProductSignal, structured: &[StructuredMaterial]) -> MaterialResolution {
        self.resolve(&MaterialRequest::from_signal(signal, structured))
    }

    /// Names of the configured strategies, in evaluation order.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies
            .iter()
            .map(|s| s.name())
            .chain(std::iter::once(self.fallback.name()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers::detailed::MAX_FRACTION;
    use eco_types::ResolutionTier;
    use proptest::prelude::*;

    fn resolver() -> MaterialResolver {
        MaterialResolver::builtin(Arc::new(MaterialCatalog::builtin())).unwrap()
    }

    #[test]
    fn chain_order_is_by_tier() {
        assert_eq!(
            resolver().strategy_names(),
            vec![
                "structured_percentages",
                "structured_ranked",
                "keyword_match",
                "product_type",
                "fallback"
            ]
        );
    }

    #[test]
    fn percentages_win_over_everything_else() {
        let structured = vec![
            StructuredMaterial::new("glass").with_fraction(0.3),
            StructuredMaterial::new("aluminum").with_fraction(0.7),
        ];
        let req = MaterialRequest::new("Paperback Book", "books").with_structured(&structured);
        let res = resolver().resolve(&req);
        assert_eq!(res.tier, ResolutionTier::DetailedWithPercentages);
        assert_eq!(res.primary_material, "aluminum");
    }

    #[test]
    fn ranked_list_beats_keywords() {
        let structured = vec![StructuredMaterial::new("bamboo")];
        let req = MaterialRequest::new("Wooden Spoon", "").with_structured(&structured);
        let res = resolver().resolve(&req);
        assert_eq!(res.tier, ResolutionTier::DetailedWithoutPercentages);
        assert_eq!(res.primary_material, "bamboo");
    }

    #[test]
    fn paperback_book_resolves_to_paper() {
        let res = resolver().resolve(&MaterialRequest::new("Paperback Book", "books"));
        assert!(matches!(
            res.tier,
            ResolutionTier::KeywordMatch | ResolutionTier::CategoryPrediction
        ));
        assert!(res.primary_material.contains("paper"));
        assert!(res.confidence >= 0.7);
    }

    #[test]
    fn missing_keyword_advances_to_product_type() {
        let res = resolver().resolve(&MaterialRequest::new("Apple iPhone 15", "smartphones"));
        assert_eq!(res.tier, ResolutionTier::CategoryPrediction);
        assert_eq!(res.primary_material, "aluminum");
    }

    #[test]
    fn unknown_product_falls_back() {
        let res = resolver().resolve(&MaterialRequest::new("Mystery Gadget", "misc"));
        assert_eq!(res.tier, ResolutionTier::Fallback);
        assert!(res.is_mixed());
        assert_eq!(res.confidence, 0.1);
        assert_eq!(res.environmental_impact_score, 2.0);
    }

    #[test]
    fn empty_chain_still_resolves() {
        let resolver = MaterialResolver::new(Arc::new(MaterialCatalog::builtin()), Vec::new());
        let res = resolver.resolve(&MaterialRequest::new("Anything", ""));
        assert_eq!(res.tier, ResolutionTier::Fallback);
    }

    #[test]
    fn signal_fields_feed_the_cascade() {
        let signal = ProductSignal::new("Minimalist Card Holder", "accessories")
            .unwrap()
            .with_material("Genuine Leather");
        let res = resolver().resolve_signal(&signal, &[]);
        assert_eq!(res.primary_material, "leather");
        assert_eq!(res.tier, ResolutionTier::KeywordMatch);
    }

    proptest! {
        #[test]
        fn cascade_is_total(
            title in "[A-Za-z0-9 ]{1,40}",
            category in "[a-z_&]{0,20}",
            material in proptest::option::of("[A-Za-z ]{0,15}"),
            fractions in proptest::collection::vec(
                ("[a-z]{0,10}", proptest::option::of(-1.0f64..120.0)),
                0..4,
            ),
        ) {
            let structured: Vec<StructuredMaterial> = fractions
                .into_iter()
                .map(|(name, fraction)| StructuredMaterial { name, fraction, confidence: None })
                .collect();
            let mut req = MaterialRequest::new(&title, &category).with_structured(&structured);
            req.scraped_material = material.as_deref();

            let res = resolver().resolve(&req);
            prop_assert!((1..=5).contains(&res.tier.number()));
            prop_assert!((0.0..=1.0).contains(&res.confidence));
            prop_assert!(res.environmental_impact_score > 0.0);
            prop_assert!(!res.primary_material.is_empty());

            let usable = |m: &StructuredMaterial| {
                m.fraction.is_some_and(|f| f > 0.0 && f <= MAX_FRACTION)
            };
            if structured.iter().any(|m| usable(m) && !m.name.trim().is_empty()) {
                prop_assert_eq!(res.tier, ResolutionTier::DetailedWithPercentages);
            }
        }
    }
}
