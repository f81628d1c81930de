use crate::classifier::{ClassifierPrediction, EcoClassifier};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::features::{FeatureEncoder, FeatureVector};
use eco_catalog::{ComplexityTable, MaterialCatalog};
use eco_emissions::{EmissionEstimator, TransportProfile};
use eco_materials::{MaterialRequest, MaterialResolver};
use eco_rules::ValidationRuleEngine;
use eco_types::{EmissionEstimate, MaterialResolution, ProductSignal, StructuredMaterial};
use eco_weight::{WeightValidation, WeightValidator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything the engine inferred about one product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductAnalysis {
    pub title: String,
    pub weight: WeightValidation,
    pub materials: MaterialResolution,
    pub emissions: EmissionEstimate,
    /// Plausibility warnings; never affect the estimate.
    pub violations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<ClassifierPrediction>,
}

/// End-to-end analysis pipeline.
///
/// Immutable once built; share it behind an `Arc` to analyze products from
/// several threads.
pub struct EcoPipeline {
    materials: Arc<MaterialCatalog>,
    weights: WeightValidator,
    resolver: MaterialResolver,
    estimator: EmissionEstimator,
    rules: ValidationRuleEngine,
    transport: TransportProfile,
    encoder: FeatureEncoder,
    classifier: Option<Arc<dyn EcoClassifier>>,
    confidence_floor: f64,
}

impl EcoPipeline {
    pub fn builder() -> EcoPipelineBuilder {
        EcoPipelineBuilder::new()
    }

    /// Pipeline from configuration, without a classifier.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::builder().with_config(config.clone()).build()
    }

    /// Pipeline with the built-in tables and default configuration.
    pub fn builtin() -> Result<Self> {
        Self::from_config(&EngineConfig::default())
    }

    pub fn materials(&self) -> &MaterialCatalog {
        &self.materials
    }

    pub fn estimator(&self) -> &EmissionEstimator {
        &self.estimator
    }

    pub fn transport(&self) -> &TransportProfile {
        &self.transport
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn validate_weight(&self, title: &str, candidate_kg: Option<f64>, category: &str) -> WeightValidation {
        self.weights.validate(title, candidate_kg, category)
    }

    pub fn resolve_materials(&self, request: &MaterialRequest<'_>) -> MaterialResolution {
        self.resolver.resolve(request)
    }

    pub fn estimate_emissions(
        &self,
        weight_kg: f64,
        co2_per_kg: f64,
        transport_multiplier: f64,
        category: &str,
    ) -> Result<EmissionEstimate> {
        Ok(self
            .estimator
            .estimate(weight_kg, co2_per_kg, transport_multiplier, category)?)
    }

    pub fn check_plausibility(&self, title: &str, weight_kg: f64, material: &str) -> Vec<String> {
        self.rules.check(title, weight_kg, material)
    }

    /// Run the full analysis for one product.
    pub fn analyze(&self, signal: &ProductSignal, structured: &[StructuredMaterial]) -> Result<ProductAnalysis> {
        signal.validate()?;

        let weight = self.validate_weight(&signal.title, signal.scraped_weight_kg, &signal.category);
        let materials = self.resolve_materials(&MaterialRequest::from_signal(signal, structured));

        let multiplier = self.transport.multiplier(signal.transport_mode);
        let emissions = self.estimate_emissions(
            weight.weight_kg,
            materials.environmental_impact_score,
            multiplier,
            &signal.category,
        )?;

        let violations = self.check_plausibility(&signal.title, weight.weight_kg, &materials.primary_material);

        let (features, prediction) = match &self.classifier {
            Some(classifier) => {
                let features = self.encoder.encode(signal, &materials, &emissions, multiplier);
                let prediction = self.predict(classifier.as_ref(), &signal.title, &features);
                (Some(features), prediction)
            }
            None => (None, None),
        };

        info!(
            title = %signal.title,
            weight_kg = weight.weight_kg,
            weight_corrected = weight.corrected,
            material = %materials.primary_material,
            tier = materials.tier.number(),
            co2_kg = emissions.co2_kg,
            score = %emissions.eco_score,
            violations = violations.len(),
            "Product analyzed"
        );

        Ok(ProductAnalysis {
            title: signal.title.clone(),
            weight,
            materials,
            emissions,
            violations,
            features,
            prediction,
        })
    }

    fn predict(
        &self,
        classifier: &dyn EcoClassifier,
        title: &str,
        features: &FeatureVector,
    ) -> Option<ClassifierPrediction> {
        match classifier.predict(features) {
            Ok(prediction) if prediction.confidence >= self.confidence_floor => Some(prediction),
            Ok(prediction) => {
                debug!(
                    title,
                    model = classifier.name(),
                    confidence = prediction.confidence,
                    floor = self.confidence_floor,
                    "Discarding low-confidence prediction"
                );
                None
            }
            Err(e) => {
                warn!(title, model = classifier.name(), error = %e, "Classifier failed");
                None
            }
        }
    }
}

impl fmt::Debug for EcoPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcoPipeline")
            .field("materials", &self.materials.len())
            .field("strategies", &self.resolver.strategy_names())
            .field("rules", &self.rules.rules().len())
            .field("transport", &self.transport)
            .field("classifier", &self.classifier.as_ref().map(|c| c.name()))
            .field("confidence_floor", &self.confidence_floor)
            .finish()
    }
}

/// Builder for [`EcoPipeline`].
#[derive(Default)]
pub struct EcoPipelineBuilder {
    config: EngineConfig,
    materials: Option<MaterialCatalog>,
    complexity: Option<ComplexityTable>,
    classifier: Option<Arc<dyn EcoClassifier>>,
}

impl EcoPipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this catalog instead of the configured or built-in one.
    pub fn with_materials(mut self, catalog: MaterialCatalog) -> Self {
        self.materials = Some(catalog);
        self
    }

    /// Use this table instead of the configured or built-in one.
    pub fn with_complexity(mut self, table: ComplexityTable) -> Self {
        self.complexity = Some(table);
        self
    }

    pub fn with_classifier(mut self, classifier: impl EcoClassifier + 'static) -> Self {
        self.classifier = Some(Arc::new(classifier));
        self
    }

    pub fn build(self) -> Result<EcoPipeline> {
        let config = self.config;
        config.validate()?;

        let materials = match (self.materials, &config.materials_catalog) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => MaterialCatalog::load(path)?,
            (None, None) => MaterialCatalog::builtin(),
        }
        .with_default_coefficient(config.default_co2_per_kg)?;

        let complexity = match (self.complexity, &config.complexity_catalog) {
            (Some(table), _) => table,
            (None, Some(path)) => ComplexityTable::load(path)?,
            (None, None) => ComplexityTable::builtin(),
        }
        .with_default_factor(config.default_complexity_factor)?;

        let materials = Arc::new(materials);
        let complexity = Arc::new(complexity);

        let pipeline = EcoPipeline {
            weights: WeightValidator::builtin(config.weight.clone())?,
            resolver: MaterialResolver::builtin(Arc::clone(&materials))?,
            estimator: EmissionEstimator::new(Arc::clone(&complexity), config.score_bands.clone()),
            rules: ValidationRuleEngine::builtin()?,
            transport: config.transport.clone(),
            encoder: FeatureEncoder::new(Arc::clone(&materials), complexity),
            classifier: self.classifier,
            confidence_floor: config.classifier_confidence_floor,
            materials,
        };
        debug!(pipeline = ?pipeline, "Pipeline built");
        Ok(pipeline)
    }
}
