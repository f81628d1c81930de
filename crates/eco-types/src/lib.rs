#![deny(unsafe_code)]
//! # eco-types
//!
//! Shared records for the eco-impact inference engine.
//!
//! Every component in the workspace speaks in terms of these types:
//!
//! - [`ProductSignal`] - the raw, possibly noisy input describing one product
//! - [`MaterialRecord`] / [`ComplexityRecord`] - rows of the static tables
//! - [`MaterialResolution`] - output of the material cascade, tagged with a
//!   [`ResolutionTier`] and confidence
//! - [`EmissionEstimate`] - final CO2 figure, breakdown and [`EcoScore`]
//!
//! The [`keyword`] module holds the word-boundary, longest-match keyword
//! tables used by the weight validator, the material cascade and the
//! plausibility rules.

pub mod emission;
pub mod error;
pub mod keyword;
pub mod material;
pub mod normalize;
pub mod signal;

pub use emission::{
    ComplexityConfidence, ComplexityRecord, EcoScore, EmissionBreakdown, EmissionEstimate,
};
pub use error::{EcoError, Result};
pub use keyword::{KeywordMatch, KeywordTable};
pub use material::{
    MaterialRecord, MaterialResolution, MaterialShare, RecyclabilityClass, ResolutionTier,
    StructuredMaterial, MIXED_MATERIAL,
};
pub use normalize::{category_words, normalize_category, normalize_key};
pub use signal::{ProductSignal, TransportMode};

/// System-wide CO2 coefficient (kg CO2 per kg) used whenever a material
/// cannot be resolved against the catalog.
pub const DEFAULT_CO2_PER_KG: f64 = 2.0;

/// Complexity factor applied to categories missing from the table.
pub const DEFAULT_COMPLEXITY_FACTOR: f64 = 2.0;
