use thiserror::Error;

/// Arguments an estimate cannot be computed from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmissionError {
    #[error("weight must be positive and finite, got {0}")]
    InvalidWeight(f64),

    #[error("material coefficient must be positive and finite, got {0}")]
    InvalidCoefficient(f64),

    #[error("transport multiplier must be >= 1.0, got {0}")]
    InvalidTransportMultiplier(f64),

    #[error("invalid score bands: {0}")]
    InvalidBands(String),
}

pub type Result<T> = std::result::Result<T, EmissionError>;
