//! SHA-1 and SHA-2 hash functions
//!
//! Each variant is a zero-sized marker implementing [`HashFunction`]. The
//! free function [`digest`] selects the variant at runtime and returns the
//! digest in word form.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use fips180_api::{Algorithm, HashAlgorithm};

use crate::error::Result;

pub mod engine;
pub mod padding;
pub mod schedule;
pub mod sha1;
pub mod sha2;
pub mod word;

pub use engine::Variant;
pub use sha1::Sha1;
pub use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

/// One-shot hashing of complete messages
pub trait HashFunction: HashAlgorithm {
    /// Digest in word form
    type Words;

    /// Digest in byte form
    type Output;

    /// Hash a byte message
    fn digest(message: &[u8]) -> Result<Self::Output>;

    /// Hash a byte message and return the digest words
    fn digest_words(message: &[u8]) -> Result<Self::Words>;

    /// Hash a message whose length in bits is supplied by the caller
    ///
    /// `bit_length` must fit the variant's length trailer, otherwise
    /// `Error::LengthOverflow` is returned, and must equal
    /// `8 * message.len()`.
    fn digest_bits(message: &[u8], bit_length: u128) -> Result<Self::Output>;

    /// Digest size in bytes
    fn output_size() -> usize {
        Self::OUTPUT_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        Self::ALGORITHM_ID
    }
}

impl<V: Variant> HashFunction for V {
    type Words = <V as Variant>::Words;
    type Output = <V as Variant>::Output;

    fn digest(message: &[u8]) -> Result<Self::Output> {
        Self::digest_bits(message, byte_bits(message))
    }

    fn digest_words(message: &[u8]) -> Result<Self::Words> {
        words::<V>(message, byte_bits(message))
    }

    fn digest_bits(message: &[u8], bit_length: u128) -> Result<Self::Output> {
        let state = engine::compute::<V>(message, bit_length)?;
        Ok(engine::assemble_bytes::<V>(&state))
    }
}

#[inline(always)]
fn byte_bits(message: &[u8]) -> u128 {
    message.len() as u128 * 8
}

fn words<V: Variant>(message: &[u8], bit_length: u128) -> Result<<V as Variant>::Words> {
    let state = engine::compute::<V>(message, bit_length)?;
    Ok(engine::assemble_words::<V>(&state))
}

/// Digest words of any supported algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestWords {
    /// SHA-1
    Sha1([u32; 5]),
    /// SHA-224
    Sha224([u32; 7]),
    /// SHA-256
    Sha256([u32; 8]),
    /// SHA-384
    Sha384([u64; 6]),
    /// SHA-512
    Sha512([u64; 8]),
    /// SHA-512/224; the low half of the last word is not part of the digest
    Sha512_224([u64; 4]),
    /// SHA-512/256
    Sha512_256([u64; 4]),
}

impl DigestWords {
    /// Algorithm that produced these words
    pub fn algorithm(&self) -> Algorithm {
        match self {
            DigestWords::Sha1(_) => Algorithm::Sha1,
            DigestWords::Sha224(_) => Algorithm::Sha224,
            DigestWords::Sha256(_) => Algorithm::Sha256,
            DigestWords::Sha384(_) => Algorithm::Sha384,
            DigestWords::Sha512(_) => Algorithm::Sha512,
            DigestWords::Sha512_224(_) => Algorithm::Sha512_224,
            DigestWords::Sha512_256(_) => Algorithm::Sha512_256,
        }
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.algorithm().output_words()
    }

    /// Always false; every digest has at least four words
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Words of a 32-bit variant
    pub fn as_u32(&self) -> Option<&[u32]> {
        match self {
            DigestWords::Sha1(w) => Some(&w[..]),
            DigestWords::Sha224(w) => Some(&w[..]),
            DigestWords::Sha256(w) => Some(&w[..]),
            _ => None,
        }
    }

    /// Words of a 64-bit variant
    pub fn as_u64(&self) -> Option<&[u64]> {
        match self {
            DigestWords::Sha384(w) => Some(&w[..]),
            DigestWords::Sha512(w) => Some(&w[..]),
            DigestWords::Sha512_224(w) | DigestWords::Sha512_256(w) => Some(&w[..]),
            _ => None,
        }
    }

    /// Big-endian digest bytes, truncated to the output size
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() * 8);
        if let Some(words) = self.as_u32() {
            words
                .iter()
                .for_each(|w| out.extend_from_slice(&w.to_be_bytes()));
        } else if let Some(words) = self.as_u64() {
            words
                .iter()
                .for_each(|w| out.extend_from_slice(&w.to_be_bytes()));
        }
        out.truncate(self.algorithm().output_size());
        out
    }

    /// Lowercase hex of [`DigestWords::to_bytes`]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

/// Hash `message` with the algorithm chosen at runtime
///
/// ```
/// use fips180_algorithms::{digest, Algorithm};
///
/// let words = digest(Algorithm::Sha1, b"abc", 24).unwrap();
/// assert_eq!(words.as_u32().unwrap()[0], 0xa9993e36);
/// ```
pub fn digest(algorithm: Algorithm, message: &[u8], bit_length: u128) -> Result<DigestWords> {
    Ok(match algorithm {
        Algorithm::Sha1 => DigestWords::Sha1(words::<Sha1>(message, bit_length)?),
        Algorithm::Sha224 => DigestWords::Sha224(words::<Sha224>(message, bit_length)?),
        Algorithm::Sha256 => DigestWords::Sha256(words::<Sha256>(message, bit_length)?),
        Algorithm::Sha384 => DigestWords::Sha384(words::<Sha384>(message, bit_length)?),
        Algorithm::Sha512 => DigestWords::Sha512(words::<Sha512>(message, bit_length)?),
        Algorithm::Sha512_224 => {
            DigestWords::Sha512_224(words::<Sha512_224>(message, bit_length)?)
        }
        Algorithm::Sha512_256 => {
            DigestWords::Sha512_256(words::<Sha512_256>(message, bit_length)?)
        }
    })
}
