//! Classifier seam.
//!
//! An [`EcoClassifier`] predicts an eco grade from a [`FeatureVector`]. The
//! pipeline treats predictions as advisory; see [`crate::EcoPipeline`].

use crate::features::FeatureVector;
use eco_emissions::ScoreBands;
use eco_types::EcoScore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("invalid features: {0}")]
    InvalidFeatures(String),

    #[error("model error: {0}")]
    Model(String),
}

/// A classifier's answer for one product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierPrediction {
    pub eco_score: EcoScore,
    pub confidence: f64,
    /// Name of the classifier that produced the prediction.
    pub model: String,
}

/// Predicts an eco grade from engineered features.
pub trait EcoClassifier: Send + Sync {
    fn name(&self) -> &str;

    fn predict(&self, features: &FeatureVector) -> Result<ClassifierPrediction, ClassifierError>;
}

/// Rule-based classifier: recomputes CO2 from the features and grades it
/// with the score bands. Confidence is the material resolution confidence.
#[derive(Clone, Debug, Default)]
pub struct BandClassifier {
    bands: ScoreBands,
}

impl BandClassifier {
    pub fn new(bands: ScoreBands) -> Self {
        Self { bands }
    }
}

impl EcoClassifier for BandClassifier {
    fn name(&self) -> &str {
        "band"
    }

    fn predict(&self, features: &FeatureVector) -> Result<ClassifierPrediction, ClassifierError> {
        if !features.is_finite() {
            return Err(ClassifierError::InvalidFeatures("non-finite feature value".into()));
        }
        if features.weight_kg <= 0.0 {
            return Err(ClassifierError::InvalidFeatures(format!(
                "weight must be positive, got {}",
                features.weight_kg
            )));
        }

        let co2_kg = features.weight_kg
            * features.material_co2_per_kg
            * (features.complexity_factor + features.transport_multiplier - 1.0);

        Ok(ClassifierPrediction {
            eco_score: self.bands.grade(co2_kg),
            confidence: features.material_confidence.clamp(0.0, 1.0),
            model: self.name().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(weight_kg: f64) -> FeatureVector {
        FeatureVector {
            material_index: 0.0,
            transport_index: 1.0,
            recyclability_index: 2.0,
            origin_index: 0.0,
            weight_kg,
            weight_log1p: weight_kg.ln_1p(),
            category_index: 0.0,
            material_co2_per_kg: 9.2,
            complexity_factor: 12.0,
            transport_multiplier: 2.5,
            material_confidence: 0.9,
        }
    }

    #[test]
    fn band_classifier_grades_recomputed_co2() {
        let prediction = BandClassifier::default().predict(&features(0.22)).unwrap();
        assert_eq!(prediction.eco_score, EcoScore::C);
        assert_eq!(prediction.confidence, 0.9);
        assert_eq!(prediction.model, "band");
    }

    #[test]
    fn band_classifier_rejects_bad_features() {
        let classifier = BandClassifier::default();
        assert!(matches!(
            classifier.predict(&features(f64::NAN)),
            Err(ClassifierError::InvalidFeatures(_))
        ));
        assert!(classifier.predict(&features(0.0)).is_err());
    }
}
