use thiserror::Error;

/// Errors that can occur in trellis-kge.
#[derive(Error, Debug)]
pub enum Error {
    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Tensor shapes do not line up.
    #[error("Shape mismatch: {0}")]
    Shape(String),
    /// No scoring layer registered under this name.
    #[error("Unknown scoring layer: {0}")]
    UnknownLayer(String),
    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for trellis-kge.
pub type Result<T> = std::result::Result<T, Error>;
