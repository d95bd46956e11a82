//! # fips180
//!
//! SHA-1 and SHA-2 message digests as specified in FIPS 180-4.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fips180 = "0.1"
//! ```
//!
//! Hash with a statically chosen variant:
//!
//! ```
//! use fips180::prelude::*;
//!
//! let digest = Sha1::digest(b"abc")?;
//! assert_eq!(digest.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! # Ok::<(), fips180::algorithms::Error>(())
//! ```
//!
//! or choose the algorithm at runtime and pass the message length in bits:
//!
//! ```
//! use fips180::{digest, Algorithm};
//!
//! let words = digest(Algorithm::Sha256, b"abc", 24)?;
//! assert_eq!(words.as_u32().unwrap()[0], 0xba7816bf);
//!
//! assert!(digest(Algorithm::Sha256, b"", 1u128 << 64)
//!     .unwrap_err()
//!     .is_length_overflow());
//! # Ok::<(), fips180::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `alloc`: Heap allocation without `std`
//! - `serde`: Serialization of [`Algorithm`] by its FIPS name
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`fips180-api`]: Error type, algorithm table and marker trait
//! - [`fips180-algorithms`]: Padding, schedule, compression and assembly
//! - [`fips180-common`]: Wiping wrappers for intermediate values
//! - [`fips180-params`]: Sizes, round counts and length limits

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports
pub use fips180_algorithms as algorithms;
pub use fips180_api as api;
pub use fips180_common as common;
pub use fips180_params as params;

pub use fips180_algorithms::DigestWords;
pub use fips180_api::{Algorithm, Error, Result, WordWidth};

/// Hash `message` with `algorithm`, reporting failures as [`api::Error`]
///
/// `bit_length` is the message length in bits. A length that the
/// algorithm's trailer cannot encode yields `Error::LengthOverflow`.
pub fn digest(algorithm: Algorithm, message: &[u8], bit_length: u128) -> Result<DigestWords> {
    fips180_algorithms::error::to_core_result(
        fips180_algorithms::digest(algorithm, message, bit_length),
        algorithm.name(),
    )
}

/// Common imports for fips180 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::algorithms::{ConstantTimeEq, FixedSize, HashAlgorithm, HashFunction};

    // Hash variants and digest types
    pub use crate::algorithms::{
        Digest, DigestWords, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256,
    };
    pub use crate::api::{Algorithm, WordWidth};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretVec, SecureZeroingType, ZeroizeGuard};
}
