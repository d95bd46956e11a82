//! Structured error types for the known-answer suite

use fips180_api::Algorithm;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("failed to read vector file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse vector file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("digest operation failed: {0}")]
    Digest(String),

    #[error("vector '{0}' has neither `msg` nor `msg_hex`")]
    MissingMessage(String),

    #[error("{algorithm} '{name}' mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        algorithm: Algorithm,
        name: String,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;

// Helper for converting engine errors
impl From<fips180_algorithms::Error> for EngineError {
    fn from(e: fips180_algorithms::Error) -> Self {
        EngineError::Digest(e.to_string())
    }
}

impl From<fips180_api::Error> for EngineError {
    fn from(e: fips180_api::Error) -> Self {
        EngineError::Digest(e.to_string())
    }
}
