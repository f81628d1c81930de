#![deny(unsafe_code)]
//! # eco-materials
//!
//! Determines what a product is made of from whatever evidence is available.
//!
//! The [`MaterialResolver`] runs an ordered chain of [`MaterialStrategy`]
//! tiers and returns the first usable result:
//!
//! 1. [`PercentageStrategy`] - structured extraction with weight fractions (0.95)
//! 2. [`RankedStrategy`] - structured extraction without fractions (0.8)
//! 3. [`KeywordStrategy`] - material keyword in the listing text (0.7)
//! 4. [`ProductTypeStrategy`] - materials typical for the product type
//! 5. [`FallbackStrategy`] - "Mixed" at 0.1, always succeeds
//!
//! The chain is total: every request resolves, and the tier number records
//! which strategy produced the answer.

pub mod impact;
pub mod request;
pub mod resolver;
pub mod strategy;
pub mod tiers;

pub use request::MaterialRequest;
pub use resolver::MaterialResolver;
pub use strategy::MaterialStrategy;
pub use tiers::{
    FallbackStrategy, KeywordStrategy, PercentageStrategy, ProductTypeProfile,
    ProductTypeStrategy, RankedStrategy,
};
