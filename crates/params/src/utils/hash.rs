//! Constants for hash functions

/// Output size of SHA-1 in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Output size of SHA-512/224 in bytes
pub const SHA512_224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-512/256 in bytes
pub const SHA512_256_OUTPUT_SIZE: usize = 32;

/// Internal block size of SHA-1 in bytes
pub const SHA1_BLOCK_SIZE: usize = 64;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Internal block size of SHA-512 in bytes
pub const SHA512_BLOCK_SIZE: usize = 128;

/// Number of rounds in one SHA-1 compression
pub const SHA1_ROUNDS: usize = 80;

/// Number of rounds in one SHA-256 compression
pub const SHA256_ROUNDS: usize = 64;

/// Number of rounds in one SHA-512 compression
pub const SHA512_ROUNDS: usize = 80;

/// Longest message schedule of any variant, in words
pub const MAX_SCHEDULE_WORDS: usize = 80;

/// Number of schedule words loaded directly from a block
pub const BLOCK_WORDS: usize = 16;

/// Width of the length trailer for 512-bit block variants, in bytes
pub const LENGTH_FIELD_SIZE_64: usize = 8;

/// Width of the length trailer for 1024-bit block variants, in bytes
pub const LENGTH_FIELD_SIZE_128: usize = 16;

/// Largest message bit length for SHA-1, SHA-224 and SHA-256
pub const MAX_MESSAGE_BITS_64: u128 = u64::MAX as u128;

/// Largest message bit length for the SHA-512 family
pub const MAX_MESSAGE_BITS_128: u128 = u128::MAX;
