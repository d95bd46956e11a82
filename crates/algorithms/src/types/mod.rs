//! Type-safe wrappers for digest outputs
//!
//! This module provides the fixed-size byte form of a digest together with
//! the small traits it implements.

pub mod digest;

// Re-export main types
pub use digest::Digest;

// Import and re-export security types from fips180-common
pub use fips180_common::security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};

/// Trait for types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}
