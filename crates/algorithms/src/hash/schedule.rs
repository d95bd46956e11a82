//! Message schedule expansion (FIPS 180-4 sections 6.1.2 and 6.2.2)
//!
//! Every schedule is a fresh value owned by the compression call that
//! requested it and is wiped when that call returns.

use fips180_common::EphemeralSecret;
use fips180_params::utils::hash::{BLOCK_WORDS, MAX_SCHEDULE_WORDS, SHA1_ROUNDS};

use super::sha2::{small_sigma0, small_sigma1, Sha2Params};
use super::word::Word;

/// Expanded message schedule; only the first `rounds` entries are used
pub type Schedule<W> = EphemeralSecret<[W; MAX_SCHEDULE_WORDS]>;

/// Load the 16 big-endian words of a block into `w[0..16]`
#[inline(always)]
fn load<W: Word>(w: &mut [W; MAX_SCHEDULE_WORDS], block: &[u8]) {
    for (word, chunk) in w[..BLOCK_WORDS]
        .iter_mut()
        .zip(block.chunks_exact(W::BYTES))
    {
        *word = W::read_be(chunk);
    }
}

/// SHA-1 schedule: W[t] = ROTL1(W[t-3] ^ W[t-8] ^ W[t-14] ^ W[t-16])
pub fn expand_sha1(block: &[u8]) -> Schedule<u32> {
    let mut w = Schedule::new([0u32; MAX_SCHEDULE_WORDS]);
    load(&mut w, block);

    for t in BLOCK_WORDS..SHA1_ROUNDS {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}

/// SHA-2 schedule: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
pub fn expand_sha2<P: Sha2Params>(block: &[u8]) -> Schedule<P::Word> {
    let mut w = Schedule::new([P::Word::default(); MAX_SCHEDULE_WORDS]);
    load(&mut w, block);

    for t in BLOCK_WORDS..P::ROUNDS {
        w[t] = small_sigma1::<P>(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0::<P>(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}
