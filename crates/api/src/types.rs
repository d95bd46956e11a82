//! Algorithm table for the SHA-1 / SHA-2 family
//!
//! `Algorithm` is the runtime name of a hash variant. It carries the
//! parameters that distinguish the variants: word width, block size,
//! number of rounds, output size and the width of the length trailer.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};
use fips180_params::utils::hash::{
    LENGTH_FIELD_SIZE_128, LENGTH_FIELD_SIZE_64, MAX_MESSAGE_BITS_128, MAX_MESSAGE_BITS_64,
    SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE, SHA1_ROUNDS, SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE,
    SHA256_OUTPUT_SIZE, SHA256_ROUNDS, SHA384_OUTPUT_SIZE, SHA512_224_OUTPUT_SIZE,
    SHA512_256_OUTPUT_SIZE, SHA512_BLOCK_SIZE, SHA512_OUTPUT_SIZE, SHA512_ROUNDS,
};

/// Width of the words an algorithm operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordWidth {
    /// 32-bit words (SHA-1, SHA-224, SHA-256)
    W32,
    /// 64-bit words (SHA-384, SHA-512, SHA-512/t)
    W64,
}

impl WordWidth {
    /// Word size in bytes
    pub const fn bytes(self) -> usize {
        match self {
            WordWidth::W32 => 4,
            WordWidth::W64 => 8,
        }
    }
}

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[cfg_attr(feature = "serde", serde(rename = "SHA-1"))]
    Sha1,
    #[cfg_attr(feature = "serde", serde(rename = "SHA-224"))]
    Sha224,
    #[cfg_attr(feature = "serde", serde(rename = "SHA-256"))]
    Sha256,
    #[cfg_attr(feature = "serde", serde(rename = "SHA-384"))]
    Sha384,
    #[cfg_attr(feature = "serde", serde(rename = "SHA-512"))]
    Sha512,
    #[cfg_attr(feature = "serde", serde(rename = "SHA-512/224"))]
    Sha512_224,
    #[cfg_attr(feature = "serde", serde(rename = "SHA-512/256"))]
    Sha512_256,
}

impl Algorithm {
    /// Every supported algorithm, in table order
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha512_224,
        Algorithm::Sha512_256,
    ];

    /// Canonical FIPS 180-4 name
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha224 => "SHA-224",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
            Algorithm::Sha512_224 => "SHA-512/224",
            Algorithm::Sha512_256 => "SHA-512/256",
        }
    }

    /// Word width of the compression function
    pub const fn word_width(self) -> WordWidth {
        match self {
            Algorithm::Sha1 | Algorithm::Sha224 | Algorithm::Sha256 => WordWidth::W32,
            _ => WordWidth::W64,
        }
    }

    /// Block size in bytes
    pub const fn block_size(self) -> usize {
        match self {
            Algorithm::Sha1 => SHA1_BLOCK_SIZE,
            Algorithm::Sha224 | Algorithm::Sha256 => SHA256_BLOCK_SIZE,
            _ => SHA512_BLOCK_SIZE,
        }
    }

    /// Compression rounds per block
    pub const fn rounds(self) -> usize {
        match self {
            Algorithm::Sha1 => SHA1_ROUNDS,
            Algorithm::Sha224 | Algorithm::Sha256 => SHA256_ROUNDS,
            _ => SHA512_ROUNDS,
        }
    }

    /// Digest size in bytes
    pub const fn output_size(self) -> usize {
        match self {
            Algorithm::Sha1 => SHA1_OUTPUT_SIZE,
            Algorithm::Sha224 => SHA224_OUTPUT_SIZE,
            Algorithm::Sha256 => SHA256_OUTPUT_SIZE,
            Algorithm::Sha384 => SHA384_OUTPUT_SIZE,
            Algorithm::Sha512 => SHA512_OUTPUT_SIZE,
            Algorithm::Sha512_224 => SHA512_224_OUTPUT_SIZE,
            Algorithm::Sha512_256 => SHA512_256_OUTPUT_SIZE,
        }
    }

    /// Digest size in bits
    pub const fn output_bits(self) -> usize {
        self.output_size() * 8
    }

    /// Number of state words the digest is read from
    ///
    /// SHA-512/224 yields four words of which only the upper half of the
    /// last one belongs to the digest.
    pub const fn output_words(self) -> usize {
        let word = self.word_width().bytes();
        (self.output_size() + word - 1) / word
    }

    /// Width of the big-endian length trailer in bits
    pub const fn length_field_bits(self) -> usize {
        match self.word_width() {
            WordWidth::W32 => LENGTH_FIELD_SIZE_64 * 8,
            WordWidth::W64 => LENGTH_FIELD_SIZE_128 * 8,
        }
    }

    /// Largest message length in bits the length trailer can encode
    pub const fn max_message_bits(self) -> u128 {
        match self.word_width() {
            WordWidth::W32 => MAX_MESSAGE_BITS_64,
            WordWidth::W64 => MAX_MESSAGE_BITS_128,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts `SHA-256`, `SHA2-256`, `sha256`, `SHA-512/224`, `SHA512_224`, ...
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut buf = [0u8; 16];
        let mut len = 0;

        let rest = match trimmed.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("SHA2-") => &trimmed[5..],
            _ => match trimmed.get(..3) {
                Some(prefix) if prefix.eq_ignore_ascii_case("SHA") => &trimmed[3..],
                _ => return Err(unknown_algorithm()),
            },
        };

        for byte in rest.bytes().filter(|b| !matches!(b, b'-' | b'/' | b'_')) {
            if len == buf.len() {
                return Err(unknown_algorithm());
            }
            buf[len] = byte;
            len += 1;
        }

        match &buf[..len] {
            b"1" => Ok(Algorithm::Sha1),
            b"224" => Ok(Algorithm::Sha224),
            b"256" => Ok(Algorithm::Sha256),
            b"384" => Ok(Algorithm::Sha384),
            b"512" => Ok(Algorithm::Sha512),
            b"512224" => Ok(Algorithm::Sha512_224),
            b"512256" => Ok(Algorithm::Sha512_256),
            _ => Err(unknown_algorithm()),
        }
    }
}

fn unknown_algorithm() -> Error {
    Error::invalid_parameter("Algorithm::from_str", "unknown hash algorithm")
}
