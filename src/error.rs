use thiserror::Error;

/// Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A training example or target had the wrong length. For targets,
    /// `expected` is the minimum accepted length.
    #[error("size mismatch for {what}: expected {expected}, got {actual}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
