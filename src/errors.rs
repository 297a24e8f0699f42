use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for the aggregation engine and its loading/config seams.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
