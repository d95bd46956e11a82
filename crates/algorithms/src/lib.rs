//! SHA-1 and SHA-2 digest engine
//!
//! This crate implements the padding, message schedule and compression
//! rounds of FIPS 180-4 for SHA-1, SHA-224, SHA-256, SHA-384, SHA-512,
//! SHA-512/224 and SHA-512/256. Each call hashes one complete message;
//! every intermediate buffer is owned by the call and wiped on return.
//!
//! ```
//! use fips180_algorithms::hash::{HashFunction, Sha256};
//!
//! let digest = Sha256::digest(b"abc").unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{
    digest, DigestWords, HashFunction, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224,
    Sha512_256,
};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest, FixedSize, SecureZeroingType};

// Algorithm table from the API crate
pub use fips180_api::{Algorithm, HashAlgorithm, WordWidth};
