use crate::error::{EcoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name emitted when no specific material could be determined.
pub const MIXED_MATERIAL: &str = "Mixed";

/// How readily a material is recycled at end of life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecyclabilityClass {
    Low,
    #[default]
    Medium,
    High,
}

impl RecyclabilityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecyclabilityClass::Low => "Low",
            RecyclabilityClass::Medium => "Medium",
            RecyclabilityClass::High => "High",
        }
    }
}

impl fmt::Display for RecyclabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the material catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Canonical lowercase name, e.g. `"aluminum"`.
    pub name: String,
    /// kg CO2 emitted per kg of material produced.
    pub co2_per_kg: f64,
    #[serde(alias = "recyclability_class")]
    pub recyclability: RecyclabilityClass,
}

impl MaterialRecord {
    pub fn new(name: impl Into<String>, co2_per_kg: f64, recyclability: RecyclabilityClass) -> Self {
        Self {
            name: name.into(),
            co2_per_kg,
            recyclability,
        }
    }
}

/// A material as reported by upstream structured extraction.
///
/// `fraction` is the share of product weight in `0.0..=1.0`; `confidence` is
/// the extractor's own certainty about the material, used for ordering when
/// no fractions are known.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructuredMaterial {
    pub name: String,
    #[serde(default)]
    pub fraction: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl StructuredMaterial {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fraction: None,
            confidence: None,
        }
    }

    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.fraction = Some(fraction);
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// True when a usable, strictly positive fraction is present.
    pub fn has_fraction(&self) -> bool {
        self.fraction.is_some_and(|f| f.is_finite() && f > 0.0)
    }
}

/// A material together with its share of the product, in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialShare {
    pub name: String,
    pub percentage: Option<f64>,
}

impl MaterialShare {
    pub fn new(name: impl Into<String>, percentage: Option<f64>) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }
}

/// The strategy level of the material cascade that produced a resolution.
///
/// Lower numbers are more trusted. Tiers are tried in ascending order and
/// serialize as their number (1-5).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ResolutionTier {
    /// Structured extraction with weight fractions.
    DetailedWithPercentages = 1,
    /// Structured extraction, no usable fractions.
    DetailedWithoutPercentages = 2,
    /// Material keyword found in the listing text.
    KeywordMatch = 3,
    /// Material predicted from the product type.
    CategoryPrediction = 4,
    /// Nothing usable; generic mixed material.
    Fallback = 5,
}

impl ResolutionTier {
    pub const ALL: [ResolutionTier; 5] = [
        ResolutionTier::DetailedWithPercentages,
        ResolutionTier::DetailedWithoutPercentages,
        ResolutionTier::KeywordMatch,
        ResolutionTier::CategoryPrediction,
        ResolutionTier::Fallback,
    ];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionTier::DetailedWithPercentages => "detailed_with_percentages",
            ResolutionTier::DetailedWithoutPercentages => "detailed_without_percentages",
            ResolutionTier::KeywordMatch => "keyword_match",
            ResolutionTier::CategoryPrediction => "category_prediction",
            ResolutionTier::Fallback => "fallback",
        }
    }
}

impl From<ResolutionTier> for u8 {
    fn from(tier: ResolutionTier) -> u8 {
        tier.number()
    }
}

impl TryFrom<u8> for ResolutionTier {
    type Error = EcoError;

    fn try_from(number: u8) -> Result<Self> {
        ResolutionTier::ALL
            .into_iter()
            .find(|t| t.number() == number)
            .ok_or(EcoError::UnknownTier(number))
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier {} ({})", self.number(), self.as_str())
    }
}

/// Output of the material cascade.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialResolution {
    pub primary_material: String,
    /// Share of the primary material in percent, when the tier knows it.
    pub primary_percentage: Option<f64>,
    pub secondary_materials: Vec<MaterialShare>,
    /// Trust in this resolution, `0.0..=1.0`.
    pub confidence: f64,
    pub tier: ResolutionTier,
    /// Weighted kg CO2 per kg across primary and secondary materials.
    pub environmental_impact_score: f64,
    /// Provenance detail: the keyword or strategy that produced the result.
    pub prediction_method: Option<String>,
}

impl MaterialResolution {
    pub fn new(
        primary_material: impl Into<String>,
        tier: ResolutionTier,
        confidence: f64,
        environmental_impact_score: f64,
    ) -> Self {
        Self {
            primary_material: primary_material.into(),
            primary_percentage: None,
            secondary_materials: Vec::new(),
            confidence: confidence.clamp(0.0, 1.0),
            tier,
            environmental_impact_score,
            prediction_method: None,
        }
    }

    pub fn with_primary_percentage(mut self, percentage: f64) -> Self {
        self.primary_percentage = Some(percentage);
        self
    }

    pub fn with_secondary(mut self, secondary: Vec<MaterialShare>) -> Self {
        self.secondary_materials = secondary;
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.prediction_method = Some(method.into());
        self
    }

    /// True when the primary material is the generic mixed placeholder.
    pub fn is_mixed(&self) -> bool {
        self.primary_material.eq_ignore_ascii_case(MIXED_MATERIAL)
    }

    /// All material names, primary first.
    pub fn material_names(&self) -> Vec<&str> {
        std::iter::once(self.primary_material.as_str())
            .chain(self.secondary_materials.iter().map(|s| s.name.as_str()))
            .collect()
    }
}
