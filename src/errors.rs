//! Error types for the I/O layer.
//!
//! The analysis core is total and never returns these; reading input and
//! writing reports can fail.

#[derive(Debug, thiserror::Error)]
pub enum ModmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type ModmapResult<T> = Result<T, ModmapError>;
