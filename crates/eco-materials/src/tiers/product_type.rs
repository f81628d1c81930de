//! Tier 4: materials typical of the product type.

use crate::impact::split_impact;
use crate::request::MaterialRequest;
use crate::strategy::MaterialStrategy;
use eco_catalog::MaterialCatalog;
use eco_types::{KeywordTable, MaterialResolution, MaterialShare, ResolutionTier};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Typical composition of one product type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductTypeProfile {
    pub primary: String,
    #[serde(default)]
    pub secondary: Vec<String>,
    pub confidence: f64,
}

impl ProductTypeProfile {
    pub fn new(primary: &str, secondary: &[&str], confidence: f64) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.iter().map(|s| s.to_string()).collect(),
            confidence,
        }
    }
}

/// (keyword, primary, secondaries, confidence)
type ProfileRow = (&'static str, &'static str, &'static [&'static str], f64);

const BUILTIN_PRODUCT_TYPES: &[ProfileRow] = &[
    // electronics
    ("smartphone", "aluminum", &["glass", "plastic", "copper"], 0.85),
    ("iphone", "aluminum", &["glass", "stainless steel", "copper"], 0.9),
    ("phone", "aluminum", &["glass", "plastic", "copper"], 0.8),
    ("laptop", "aluminum", &["plastic", "glass", "copper"], 0.85),
    ("macbook", "aluminum", &["glass", "copper"], 0.9),
    ("tablet", "aluminum", &["glass", "plastic"], 0.85),
    ("ipad", "aluminum", &["glass", "copper"], 0.9),
    ("headphones", "plastic", &["copper", "foam"], 0.8),
    ("earbuds", "plastic", &["copper", "silicone"], 0.8),
    ("charger", "plastic", &["copper"], 0.85),
    ("usb cable", "copper", &["plastic"], 0.85),
    ("keyboard", "plastic", &["copper"], 0.8),
    ("electronics", "plastic", &["copper", "aluminum"], 0.8),
    // books & paper goods
    ("book", "paper", &[], 0.95),
    ("novel", "paper", &[], 0.9),
    ("notebook", "paper", &["cardboard"], 0.9),
    ("journal", "paper", &["cardboard"], 0.85),
    // clothing
    ("t shirt", "cotton", &["polyester"], 0.85),
    ("shirt", "cotton", &["polyester"], 0.8),
    ("jeans", "cotton", &["polyester"], 0.9),
    ("jacket", "polyester", &["nylon", "cotton"], 0.8),
    ("socks", "cotton", &["polyester", "nylon"], 0.8),
    ("sweater", "wool", &["cotton"], 0.8),
    ("sneakers", "rubber", &["polyester", "leather"], 0.8),
    ("shoes", "leather", &["rubber"], 0.8),
    ("backpack", "polyester", &["nylon"], 0.8),
    ("wallet", "leather", &[], 0.8),
    ("clothing", "cotton", &["polyester"], 0.8),
    // kitchen
    ("water bottle", "stainless steel", &["plastic"], 0.8),
    ("mug", "ceramic", &[], 0.85),
    ("frying pan", "aluminum", &["steel"], 0.85),
    ("saucepan", "stainless steel", &["aluminum"], 0.85),
    ("kitchen knife", "stainless steel", &["plastic"], 0.9),
    ("cutting board", "wood", &[], 0.8),
    ("kettle", "stainless steel", &["plastic"], 0.8),
    // furniture & home
    ("chair", "wood", &["steel", "foam"], 0.8),
    ("sofa", "wood", &["foam", "polyester"], 0.8),
    ("desk", "wood", &["steel"], 0.8),
    ("table", "wood", &["steel"], 0.8),
    ("mattress", "foam", &["polyester", "steel"], 0.85),
    ("pillow", "polyester", &["cotton"], 0.8),
    ("blanket", "cotton", &["polyester"], 0.8),
    ("furniture", "wood", &["steel"], 0.8),
    // tools & garden
    ("pruning shears", "steel", &["plastic"], 0.9),
    ("secateurs", "steel", &["plastic"], 0.9),
    ("hammer", "steel", &["wood"], 0.9),
    ("screwdriver", "steel", &["plastic"], 0.9),
    ("wrench", "steel", &[], 0.95),
    ("shovel", "steel", &["wood"], 0.85),
    ("garden hose", "rubber", &["plastic"], 0.85),
    // toys, sport, personal care
    ("lego", "plastic", &[], 0.95),
    ("toy", "plastic", &[], 0.8),
    ("puzzle", "cardboard", &[], 0.85),
    ("yoga mat", "rubber", &[], 0.8),
    ("tent", "polyester", &["aluminum"], 0.8),
    ("dumbbell", "steel", &["rubber"], 0.85),
    ("toothbrush", "plastic", &["nylon"], 0.9),
];

/// Tier 4: product-type keyword in the title, else in the category.
pub struct ProductTypeStrategy {
    catalog: Arc<MaterialCatalog>,
    profiles: KeywordTable<ProductTypeProfile>,
}

impl ProductTypeStrategy {
    pub fn new(catalog: Arc<MaterialCatalog>, profiles: KeywordTable<ProductTypeProfile>) -> Self {
        Self { catalog, profiles }
    }

    pub fn builtin(catalog: Arc<MaterialCatalog>) -> eco_types::Result<Self> {
        let profiles = KeywordTable::from_entries(BUILTIN_PRODUCT_TYPES.iter().map(
            |(keyword, primary, secondary, confidence)| {
                (*keyword, ProductTypeProfile::new(primary, secondary, *confidence))
            },
        ))?;
        Ok(Self::new(catalog, profiles))
    }
}

impl MaterialStrategy for ProductTypeStrategy {
    fn tier(&self) -> ResolutionTier {
        ResolutionTier::CategoryPrediction
    }

    fn name(&self) -> &str {
        "product_type"
    }

    fn resolve(&self, request: &MaterialRequest<'_>) -> Option<MaterialResolution> {
        let category = request.category_text();
        let hit = self
            .profiles
            .longest_match(request.title)
            .or_else(|| self.profiles.longest_match(&category))?;

        let profile = hit.value;
        let secondary: Vec<&str> = profile.secondary.iter().map(String::as_str).collect();
        let impact = split_impact(&self.catalog, &profile.primary, &secondary);

        Some(
            MaterialResolution::new(profile.primary.clone(), self.tier(), profile.confidence, impact)
                .with_secondary(
                    secondary
                        .iter()
                        .map(|name| MaterialShare::new(*name, None))
                        .collect(),
                )
                .with_method(hit.keyword),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> ProductTypeStrategy {
        ProductTypeStrategy::builtin(Arc::new(MaterialCatalog::builtin())).unwrap()
    }

    #[test]
    fn builtin_profiles_use_catalog_materials() {
        let catalog = MaterialCatalog::builtin();
        for (keyword, primary, secondary, confidence) in BUILTIN_PRODUCT_TYPES {
            assert!(catalog.contains(primary), "{keyword}: {primary}");
            for s in *secondary {
                assert!(catalog.contains(s), "{keyword}: {s}");
            }
            assert!((0.0..=1.0).contains(confidence));
        }
    }

    #[test]
    fn phone_predicted_from_title() {
        let res = strategy()
            .resolve(&MaterialRequest::new("Apple iPhone 15", "smartphones"))
            .unwrap();
        assert_eq!(res.tier, ResolutionTier::CategoryPrediction);
        assert_eq!(res.primary_material, "aluminum");
        assert_eq!(res.prediction_method.as_deref(), Some("iphone"));
        assert_eq!(res.confidence, 0.9);
        assert_eq!(res.secondary_materials.len(), 3);
    }

    #[test]
    fn category_used_when_title_is_uninformative() {
        let res = strategy()
            .resolve(&MaterialRequest::new("The Midnight Library", "books"))
            .unwrap();
        assert_eq!(res.primary_material, "paper");
        assert_eq!(res.prediction_method.as_deref(), Some("book"));
        assert_eq!(res.environmental_impact_score, 1.1);
    }

    #[test]
    fn nothing_matches() {
        assert!(strategy()
            .resolve(&MaterialRequest::new("Mystery Gadget", "misc"))
            .is_none());
    }
}
