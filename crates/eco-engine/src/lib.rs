#![deny(unsafe_code)]
//! # eco-engine
//!
//! Wires the inference components into one analysis:
//!
//! ```text
//! ProductSignal ─▶ WeightValidator ─▶ MaterialResolver ─▶ EmissionEstimator
//!                                                            │
//!                        ValidationRuleEngine ◀──────────────┤
//!                        EcoClassifier (optional) ◀──────────┘
//! ```
//!
//! [`EcoPipeline`] is built from an [`EngineConfig`] (TOML, every field
//! defaulted) and returns a [`ProductAnalysis`] per product. The classifier
//! is advisory: a failure or a low-confidence prediction is logged and the
//! prediction omitted, never an analysis failure.
//!
//! The individual steps are also available on the pipeline as
//! [`EcoPipeline::validate_weight`], [`EcoPipeline::resolve_materials`],
//! [`EcoPipeline::estimate_emissions`] and [`EcoPipeline::check_plausibility`].

pub mod classifier;
pub mod config;
pub mod error;
pub mod features;
pub mod pipeline;

pub use classifier::{BandClassifier, ClassifierError, ClassifierPrediction, EcoClassifier};
pub use config::{ConfigError, EngineConfig};
pub use error::{EngineError, Result};
pub use features::{FeatureEncoder, FeatureVector};
pub use pipeline::{EcoPipeline, EcoPipelineBuilder, ProductAnalysis};

pub use eco_catalog::{ComplexityTable, MaterialCatalog};
pub use eco_emissions::{EmissionEstimator, ScoreBand, ScoreBands, TransportProfile};
pub use eco_materials::{MaterialRequest, MaterialResolver, MaterialStrategy};
pub use eco_rules::{PlausibilityRule, RuleViolation, ValidationRuleEngine};
pub use eco_types::*;
pub use eco_weight::{GlobalBounds, WeightValidation, WeightValidator};
