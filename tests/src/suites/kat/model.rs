//! Pure data model for known-answer vectors.

use fips180_api::Algorithm;
use serde::Deserialize;

use super::error::{EngineError, Result};

/// One known-answer vector
#[derive(Debug, Clone, Deserialize)]
pub struct KatVector {
    pub name: String,
    pub algorithm: Algorithm,
    /// ASCII message
    #[serde(default)]
    pub msg: Option<String>,
    /// Hex-encoded message, for non-text input
    #[serde(default)]
    pub msg_hex: Option<String>,
    /// Number of times the message is repeated
    #[serde(default = "default_repeat")]
    pub repeat: usize,
    /// Expected digest, lowercase hex
    pub md: String,
}

fn default_repeat() -> usize {
    1
}

impl KatVector {
    /// Materialize the full message bytes
    pub fn message(&self) -> Result<Vec<u8>> {
        let unit = match (&self.msg, &self.msg_hex) {
            (Some(text), _) => text.as_bytes().to_vec(),
            (None, Some(h)) => hex::decode(h)?,
            (None, None) => return Err(EngineError::MissingMessage(self.name.clone())),
        };
        Ok(unit.repeat(self.repeat))
    }
}

/// Whole vector file
#[derive(Debug, Deserialize)]
pub struct KatFile {
    #[serde(rename = "vector")]
    pub vectors: Vec<KatVector>,
}

impl KatFile {
    /// Vectors for one algorithm
    pub fn for_algorithm(&self, algorithm: Algorithm) -> impl Iterator<Item = &KatVector> {
        self.vectors.iter().filter(move |v| v.algorithm == algorithm)
    }
}
