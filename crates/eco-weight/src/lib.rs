#![deny(unsafe_code)]
//! # eco-weight
//!
//! Scraped weights are often wrong: listing titles embed nutritional
//! figures, pack counts and shipping weights that end up parsed as the
//! product weight. The [`WeightValidator`] checks a candidate weight against
//! per-product-type bounds and clamps it into range before any CO2 math.

pub mod bounds;
pub mod error;
pub mod validator;

pub use bounds::{GlobalBounds, WeightBounds};
pub use error::{Result, WeightError};
pub use validator::{WeightValidation, WeightValidator};
