#![deny(unsafe_code)]
//! # eco-rules
//!
//! Sanity checks run after an estimate has been produced. Each
//! [`PlausibilityRule`] pairs a predicate over (title, weight, material)
//! with the message reported when it fires. Every rule is evaluated; the
//! result is informational and never alters the estimate.

pub mod engine;
pub mod product;
pub mod rule;

pub use engine::ValidationRuleEngine;
pub use product::ProductClass;
pub use rule::{PlausibilityInput, PlausibilityRule, RuleViolation};
