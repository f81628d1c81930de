use thiserror::Error;

/// Errors raised while building or loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("duplicate catalog key: {0}")]
    DuplicateKey(String),

    #[error("invalid record '{key}': {message}")]
    InvalidRecord { key: String, message: String },

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
