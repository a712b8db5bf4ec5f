//! Error types for cyclewise.

use thiserror::Error;

/// Errors that can occur in cyclewise operations.
///
/// The projector itself never fails; these cover the I/O and parsing
/// boundaries around it.
#[derive(Error, Debug)]
pub enum CycleWiseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for cyclewise operations.
pub type CycleWiseResult<T> = Result<T, CycleWiseError>;
