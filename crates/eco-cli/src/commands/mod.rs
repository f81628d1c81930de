//! CLI command implementations

pub mod analyze;
pub mod check;
pub mod estimate;
pub mod resolve;
pub mod weight;

use crate::error::CliResult;
use eco_engine::StructuredMaterial;
use std::path::Path;

/// Read structured materials from a JSON array file.
pub(crate) fn read_structured(path: Option<&Path>) -> CliResult<Vec<StructuredMaterial>> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        }
        None => Ok(Vec::new()),
    }
}
