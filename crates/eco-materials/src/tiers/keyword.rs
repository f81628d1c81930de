//! Tier 3: a material named somewhere in the listing.

use crate::request::MaterialRequest;
use crate::strategy::MaterialStrategy;
use eco_catalog::MaterialCatalog;
use eco_types::{KeywordTable, MaterialResolution, ResolutionTier, MIXED_MATERIAL};
use std::sync::Arc;
use tracing::debug;

pub const KEYWORD_CONFIDENCE: f64 = 0.7;
pub const NO_KEYWORD_CONFIDENCE: f64 = 0.3;

/// Keyword → canonical catalog material.
const BUILTIN_MATERIAL_KEYWORDS: &[(&str, &str)] = &[
    ("aluminum", "aluminum"),
    ("aluminium", "aluminum"),
    ("stainless steel", "stainless steel"),
    ("stainless", "stainless steel"),
    ("carbon steel", "steel"),
    ("steel", "steel"),
    ("cast iron", "steel"),
    ("iron", "steel"),
    ("copper", "copper"),
    ("plastic", "plastic"),
    ("acrylic", "plastic"),
    ("polycarbonate", "plastic"),
    ("polypropylene", "polypropylene"),
    ("polyester", "polyester"),
    ("microfiber", "polyester"),
    ("fleece", "polyester"),
    ("nylon", "nylon"),
    ("organic cotton", "organic cotton"),
    ("cotton", "cotton"),
    ("denim", "cotton"),
    ("canvas", "cotton"),
    ("merino", "wool"),
    ("wool", "wool"),
    ("leather", "leather"),
    ("tempered glass", "glass"),
    ("glass", "glass"),
    ("paper", "paper"),
    ("paperback", "paper"),
    ("hardcover", "paper"),
    ("cardboard", "cardboard"),
    ("wooden", "wood"),
    ("wood", "wood"),
    ("oak", "wood"),
    ("walnut", "wood"),
    ("pine", "wood"),
    ("bamboo", "bamboo"),
    ("rubber", "rubber"),
    ("latex", "rubber"),
    ("silicone", "silicone"),
    ("ceramic", "ceramic"),
    ("porcelain", "ceramic"),
    ("stoneware", "ceramic"),
    ("memory foam", "foam"),
    ("foam", "foam"),
];

/// Tier 3: longest material keyword in the scraped material field, then in
/// the title and description, then in the brand name.
pub struct KeywordStrategy {
    catalog: Arc<MaterialCatalog>,
    keywords: KeywordTable<String>,
}

impl KeywordStrategy {
    pub fn new(catalog: Arc<MaterialCatalog>, keywords: KeywordTable<String>) -> Self {
        Self { catalog, keywords }
    }

    pub fn builtin(catalog: Arc<MaterialCatalog>) -> eco_types::Result<Self> {
        let keywords = KeywordTable::from_entries(
            BUILTIN_MATERIAL_KEYWORDS
                .iter()
                .map(|(k, m)| (*k, m.to_string())),
        )?;
        Ok(Self::new(catalog, keywords))
    }

    /// Raw detection. An unmatched request yields "Mixed" at 0.3, which
    /// [`MaterialStrategy::resolve`] treats as no result.
    pub fn detect(&self, request: &MaterialRequest<'_>) -> MaterialResolution {
        let from_field = request
            .specific_scraped_material()
            .and_then(|m| self.keywords.longest_match(m).map(|hit| (hit, "scraped_material")));
        let listing = request.listing_text();
        let found = from_field.or_else(|| {
            self.keywords
                .longest_match(&listing)
                .map(|hit| (hit, "listing"))
        });
        let found = found.or_else(|| {
            request
                .brand
                .and_then(|b| self.keywords.longest_match(b))
                .map(|hit| (hit, "brand"))
        });

        match found {
            Some((hit, source)) => {
                let material = hit.value.clone();
                let impact = self.catalog.coefficient(&material);
                MaterialResolution::new(material, self.tier(), KEYWORD_CONFIDENCE, impact)
                    .with_method(format!("keyword:{}:{}", source, hit.keyword))
            }
            None => MaterialResolution::new(
                MIXED_MATERIAL,
                self.tier(),
                NO_KEYWORD_CONFIDENCE,
                self.catalog.default_record().co2_per_kg,
            )
            .with_method("keyword:none"),
        }
    }
}

impl MaterialStrategy for KeywordStrategy {
    fn tier(&self) -> ResolutionTier {
        ResolutionTier::KeywordMatch
    }

    fn name(&self) -> &str {
        "keyword_match"
    }

    fn resolve(&self, request: &MaterialRequest<'_>) -> Option<MaterialResolution> {
        let detected = self.detect(request);
        if detected.is_mixed() {
            debug!(title = request.title, "No material keyword; advancing");
            return None;
        }
        Some(detected)
    }
}
