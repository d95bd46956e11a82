//! Security primitives and memory safety utilities
//!
//! This module provides the zeroizing containers and barriers used by the
//! compression functions to handle per-block intermediate state.

pub mod barrier;
pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use secret::SecretVec;
