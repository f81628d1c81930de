#![deny(unsafe_code)]
//! # eco-emissions
//!
//! Turns a validated weight and a material coefficient into a CO2 figure:
//!
//! ```text
//! material_co2      = weight_kg * material_co2_per_kg
//! baseline_total    = material_co2 * transport_multiplier
//! manufacturing_co2 = material_co2 * (complexity_factor - 1.0)
//! co2_kg            = manufacturing_co2 + baseline_total
//! ```
//!
//! The manufacturing term is layered on top of the material + transport
//! baseline, so the baseline stays recoverable from every estimate.
//! [`ScoreBands`] grades the result; [`TransportProfile`] supplies the
//! multiplier for each [`TransportMode`](eco_types::TransportMode).

pub mod bands;
pub mod error;
pub mod estimator;
pub mod transport;

pub use bands::{ScoreBand, ScoreBands};
pub use error::{EmissionError, Result};
pub use estimator::EmissionEstimator;
pub use transport::TransportProfile;
