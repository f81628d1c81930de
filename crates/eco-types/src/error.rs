use thiserror::Error;

/// Errors raised while constructing shared records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EcoError {
    #[error("invalid product signal: {0}")]
    InvalidSignal(String),

    #[error("invalid keyword pattern '{keyword}': {message}")]
    InvalidKeyword { keyword: String, message: String },

    #[error("unknown transport mode: {0}")]
    UnknownTransportMode(String),

    #[error("unknown eco score: {0}")]
    UnknownEcoScore(String),

    #[error("unknown resolution tier: {0} (expected 1-5)")]
    UnknownTier(u8),
}

pub type Result<T> = std::result::Result<T, EcoError>;
