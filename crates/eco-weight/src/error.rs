use eco_types::EcoError;
use thiserror::Error;

/// Errors raised while configuring a weight validator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeightError {
    #[error("invalid bounds for '{keyword}': {message}")]
    InvalidBounds { keyword: String, message: String },

    #[error(transparent)]
    Keyword(#[from] EcoError),
}

pub type Result<T> = std::result::Result<T, WeightError>;
