use crate::config::ConfigError;
use eco_catalog::CatalogError;
use eco_emissions::EmissionError;
use eco_types::EcoError;
use eco_weight::WeightError;
use thiserror::Error;

/// Errors raised while building a pipeline or analyzing a product.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("weight bounds error: {0}")]
    Weight(#[from] WeightError),

    #[error("emission error: {0}")]
    Emission(#[from] EmissionError),

    #[error(transparent)]
    Input(#[from] EcoError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
