//! Message padding (FIPS 180-4 section 5.1)
//!
//! A message of `l` bits is followed by a single `1` bit, `k` zero bits and
//! the length `l` as a big-endian integer of 64 bits (512-bit blocks) or
//! 128 bits (1024-bit blocks), where `k` is the smallest non-negative
//! integer with `l + 1 + k ≡ block_bits − length_bits (mod block_bits)`.
//! Lengths are checked against the trailer width before anything is
//! allocated.

use byteorder::{BigEndian, ByteOrder};
use fips180_api::Algorithm;
use fips180_common::SecretVec;
use fips180_params::utils::hash::{
    LENGTH_FIELD_SIZE_128, LENGTH_FIELD_SIZE_64, SHA256_BLOCK_SIZE, SHA512_BLOCK_SIZE,
};

use crate::error::{validate, Error, Result};

/// Block and length-trailer geometry of a padding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingLayout {
    /// Block size in bytes
    pub block_size: usize,
    /// Length trailer size in bytes
    pub length_field_size: usize,
}

impl PaddingLayout {
    /// 512-bit blocks with a 64-bit length (SHA-1, SHA-224, SHA-256)
    pub const BLOCK_512: Self = Self {
        block_size: SHA256_BLOCK_SIZE,
        length_field_size: LENGTH_FIELD_SIZE_64,
    };

    /// 1024-bit blocks with a 128-bit length (SHA-384, SHA-512, SHA-512/t)
    pub const BLOCK_1024: Self = Self {
        block_size: SHA512_BLOCK_SIZE,
        length_field_size: LENGTH_FIELD_SIZE_128,
    };

    /// Layout used by `algorithm`
    pub const fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm.block_size() {
            SHA512_BLOCK_SIZE => Self::BLOCK_1024,
            _ => Self::BLOCK_512,
        }
    }

    /// Block size in bits
    pub const fn block_bits(&self) -> u128 {
        self.block_size as u128 * 8
    }

    /// Length trailer size in bits
    pub const fn length_field_bits(&self) -> u128 {
        self.length_field_size as u128 * 8
    }
}

/// Number of zero bits `k` inserted between the `1` marker and the trailer
pub fn zero_padding_bits(layout: PaddingLayout, bit_length: u128) -> u128 {
    let block = layout.block_bits();
    let target = block - layout.length_field_bits();
    // Reduce first so that `bit_length + 1` cannot overflow.
    let used = (bit_length % block + 1) % block;
    (target + block - used) % block
}

/// Total padded length in bytes for a message of `bit_length` bits
///
/// Fails with `LengthOverflow` when the length does not fit the trailer or
/// the padded size is not addressable on this platform.
pub fn padded_len(algorithm: Algorithm, bit_length: u128) -> Result<usize> {
    validate::bit_length(algorithm.name(), bit_length, algorithm.max_message_bits())?;

    let layout = PaddingLayout::for_algorithm(algorithm);
    let overhead = 1 + zero_padding_bits(layout, bit_length) + layout.length_field_bits();
    let total_bits = bit_length
        .checked_add(overhead)
        .ok_or_else(|| Error::overflow(algorithm.name(), bit_length))?;

    usize::try_from(total_bits / 8).map_err(|_| Error::overflow(algorithm.name(), bit_length))
}

/// Build the padded copy of `message` for `algorithm`
///
/// `bit_length` must be `8 * message.len()`; the returned buffer is a whole
/// number of blocks and is wiped when dropped.
pub fn pad(algorithm: Algorithm, message: &[u8], bit_length: u128) -> Result<SecretVec> {
    // Both checks must run before the buffer is allocated.
    let len = padded_len(algorithm, bit_length)?;
    validate::message_bits(message, bit_length)?;

    let layout = PaddingLayout::for_algorithm(algorithm);
    let mut padded = SecretVec::zeroed(len);
    let buf = padded.as_mut_slice();

    buf[..message.len()].copy_from_slice(message);
    buf[message.len()] = 0x80;

    let trailer = &mut buf[len - layout.length_field_size..];
    if layout.length_field_size == LENGTH_FIELD_SIZE_64 {
        // Checked against MAX_MESSAGE_BITS_64 by padded_len.
        BigEndian::write_u64(trailer, bit_length as u64);
    } else {
        BigEndian::write_u128(trailer, bit_length);
    }

    Ok(padded)
}
