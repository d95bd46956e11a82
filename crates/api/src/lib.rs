//! Public API traits and types for the fips180 digest engine
//!
//! This crate provides the public API surface shared by the engine and its
//! callers: the error type, the table of supported algorithms and the
//! marker trait every hash variant implements.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::HashAlgorithm;
pub use types::{Algorithm, WordWidth};
