//! Trait definitions shared across the workspace

use crate::types::Algorithm;

/// Static description of a hash algorithm
///
/// Implemented by zero-sized marker types so that sizes are available at
/// compile time.
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human readable identifier, e.g. `"SHA-256"`
    const ALGORITHM_ID: &'static str;

    /// Runtime counterpart of this marker
    const ALGORITHM: Algorithm;
}
