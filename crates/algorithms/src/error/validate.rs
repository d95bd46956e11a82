//! Validation utilities for the digest engine

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a message bit length fits the algorithm's length field
#[inline(always)]
pub fn bit_length(algorithm: &'static str, bit_length: u128, max_bits: u128) -> Result<()> {
    if bit_length > max_bits {
        return Err(Error::overflow(algorithm, bit_length));
    }
    Ok(())
}

/// Validate that an explicit bit length describes exactly `message`
///
/// Only byte-aligned messages are supported, and the length must agree
/// with the number of bytes supplied.
#[inline(always)]
pub fn message_bits(message: &[u8], bit_length: u128) -> Result<()> {
    parameter(
        bit_length % 8 == 0,
        "bit_length",
        "must be a multiple of 8",
    )?;
    parameter(
        bit_length / 8 == message.len() as u128,
        "bit_length",
        "does not match the message length",
    )
}
