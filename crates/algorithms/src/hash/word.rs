//! Word-level primitives shared by every compression function
//!
//! The SHA family operates on 32-bit or 64-bit unsigned words with
//! wrapping addition, rotations and the three logical functions Ch, Parity
//! and Maj. `Word` abstracts over the two widths so that the SHA-2 rounds
//! are written once.

use byteorder::{BigEndian, ByteOrder};
use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shr};
use zeroize::Zeroize;

/// An unsigned machine word the compression functions operate on
pub trait Word:
    Copy
    + Default
    + Eq
    + Debug
    + Zeroize
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
{
    /// Size of the word in bytes
    const BYTES: usize;

    /// Read a big-endian word from the first `BYTES` bytes of `bytes`
    fn read_be(bytes: &[u8]) -> Self;

    /// Write the word big-endian into the first `BYTES` bytes of `out`
    fn write_be(self, out: &mut [u8]);

    /// Addition modulo 2^bits
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Circular right shift
    fn rotate_right(self, n: u32) -> Self;

    /// Circular left shift
    fn rotate_left(self, n: u32) -> Self;
}

macro_rules! impl_word {
    ($t:ty, $bytes:expr, $read:ident, $write:ident) => {
        impl Word for $t {
            const BYTES: usize = $bytes;

            #[inline(always)]
            fn read_be(bytes: &[u8]) -> Self {
                BigEndian::$read(bytes)
            }

            #[inline(always)]
            fn write_be(self, out: &mut [u8]) {
                BigEndian::$write(out, self)
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn rotate_right(self, n: u32) -> Self {
                <$t>::rotate_right(self, n)
            }

            #[inline(always)]
            fn rotate_left(self, n: u32) -> Self {
                <$t>::rotate_left(self, n)
            }
        }
    };
}

impl_word!(u32, 4, read_u32, write_u32);
impl_word!(u64, 8, read_u64, write_u64);

/// Ch(x, y, z): bits of `y` where `x` is set, bits of `z` elsewhere
#[inline(always)]
pub fn ch<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

/// Parity(x, y, z)
#[inline(always)]
pub fn parity<W: Word>(x: W, y: W, z: W) -> W {
    x ^ y ^ z
}

/// Maj(x, y, z): majority vote per bit
#[inline(always)]
pub fn maj<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}
