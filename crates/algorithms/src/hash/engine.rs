//! Digest engine: padding, block iteration and digest assembly
//!
//! `compute` drives one variant over a whole message. The running state
//! lives in an `EphemeralSecret` owned by the call, so concurrent callers
//! never share intermediate values.

use fips180_api::HashAlgorithm;
use fips180_common::EphemeralSecret;
use fips180_params::utils::hash::SHA512_OUTPUT_SIZE;
use zeroize::Zeroize;

use super::padding::pad;
use super::word::Word;
use crate::error::Result;

/// A concrete member of the SHA-1 / SHA-2 family
pub trait Variant: HashAlgorithm {
    /// Word type of the compression function
    type Word: Word;

    /// Chaining value (five or eight words)
    type State: Copy + Zeroize + AsRef<[Self::Word]> + AsMut<[Self::Word]>;

    /// Leading state words that make up the digest
    type Words: Copy + Default + AsRef<[Self::Word]> + AsMut<[Self::Word]>;

    /// Digest bytes
    type Output: Default + AsMut<[u8]>;

    /// Initial hash value
    const IV: Self::State;

    /// Fold one block of `BLOCK_SIZE` bytes into `state`
    fn compress(state: &mut Self::State, block: &[u8]);
}

/// Hash `message` and return the final chaining value
///
/// `bit_length` is the message length in bits and must equal
/// `8 * message.len()`.
pub fn compute<V: Variant>(
    message: &[u8],
    bit_length: u128,
) -> Result<EphemeralSecret<V::State>> {
    let padded = pad(V::ALGORITHM, message, bit_length).map_err(|err| {
        tracing::debug!(
            algorithm = V::ALGORITHM_ID,
            bit_length = %bit_length,
            error = %err,
            "message rejected"
        );
        err
    })?;

    tracing::trace!(
        algorithm = V::ALGORITHM_ID,
        bit_length = %bit_length,
        blocks = padded.len() / V::BLOCK_SIZE,
        "hashing message"
    );

    let mut state = EphemeralSecret::new(V::IV);
    for block in padded.as_slice().chunks_exact(V::BLOCK_SIZE) {
        V::compress(&mut state, block);
    }
    Ok(state)
}

/// Copy the digest words out of a final state
pub fn assemble_words<V: Variant>(state: &V::State) -> V::Words {
    let mut words = V::Words::default();
    let n = words.as_ref().len();
    words.as_mut().copy_from_slice(&state.as_ref()[..n]);
    words
}

/// Serialize a final state big-endian and truncate it to `OUTPUT_SIZE`
pub fn assemble_bytes<V: Variant>(state: &V::State) -> V::Output {
    let mut buf = EphemeralSecret::new([0u8; SHA512_OUTPUT_SIZE]);
    for (chunk, word) in buf
        .chunks_exact_mut(<V::Word as Word>::BYTES)
        .zip(state.as_ref())
    {
        word.write_be(chunk);
    }

    let mut out = V::Output::default();
    let bytes = out.as_mut();
    let n = bytes.len();
    bytes.copy_from_slice(&buf[..n]);
    out
}
