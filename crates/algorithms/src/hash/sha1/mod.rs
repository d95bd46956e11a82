//! SHA-1 compression
//!
//! SHA-1 is cryptographically broken for collision resistance and is kept
//! for interoperability with existing formats only.

use fips180_api::{Algorithm, HashAlgorithm};
use fips180_common::{barrier, ZeroizeGuard};
use fips180_params::utils::hash::{SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE, SHA1_ROUNDS};

use super::engine::Variant;
use super::schedule::expand_sha1;
use super::word::{ch, maj, parity};
use crate::types::Digest;

const IV: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

/// SHA-1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha1;

impl HashAlgorithm for Sha1 {
    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA1_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = Algorithm::Sha1.name();
    const ALGORITHM: Algorithm = Algorithm::Sha1;
}

impl Variant for Sha1 {
    type Word = u32;
    type State = [u32; 5];
    type Words = [u32; 5];
    type Output = Digest<SHA1_OUTPUT_SIZE>;

    const IV: [u32; 5] = IV;

    fn compress(state: &mut [u32; 5], block: &[u8]) {
        compress(state, block)
    }
}

/// Logical function for round `t`
#[inline(always)]
fn round_function(t: usize, x: u32, y: u32, z: u32) -> u32 {
    match t {
        0..=19 => ch(x, y, z),
        40..=59 => maj(x, y, z),
        _ => parity(x, y, z),
    }
}

fn compress(state: &mut [u32; 5], block: &[u8]) {
    let w = expand_sha1(block);

    barrier::compiler_fence_seq_cst();

    let mut working_vars = *state;
    let mut v = ZeroizeGuard::new(&mut working_vars);

    for t in 0..SHA1_ROUNDS {
        let [a, b, c, d, e] = *v;
        let temp = a
            .rotate_left(5)
            .wrapping_add(round_function(t, b, c, d))
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(w[t]);

        *v = [temp, a, b.rotate_left(30), c, d];
    }

    for (s, x) in state.iter_mut().zip(v.iter()) {
        *s = s.wrapping_add(*x);
    }

    barrier::compiler_fence_seq_cst();
}
