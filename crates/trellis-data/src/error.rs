use thiserror::Error;

/// Errors that can occur in trellis-data.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV parse error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Rows could not be assembled into a rectangular array.
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
    /// Source has no identified type, so no loader is bound to it.
    #[error("Unsupported data source: {0}")]
    UnsupportedSource(String),
    /// Loader exists in the table but has no implementation yet.
    #[error("Loader not implemented: {0}")]
    NotImplemented(&'static str),
    /// Loader was handed a source it cannot read.
    #[error("Source mismatch: {0}")]
    SourceMismatch(String),
    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for trellis-data.
pub type Result<T> = std::result::Result<T, Error>;
