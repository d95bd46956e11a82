//! Common implementations and shared functionality for the fips180 workspace
//!
//! This crate provides the wrappers the digest engine uses to keep
//! per-call intermediate values (padded message, message schedule,
//! working variables) out of memory once a call returns.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use security::secret::SecretVec;

// Re-export memory barrier utilities
pub use security::barrier;
