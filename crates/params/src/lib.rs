//! Constant values for the fips180 digest engine
//!
//! Sizes, round counts and length limits shared by every crate in the
//! workspace. Round constants and initialization vectors live next to the
//! compression functions that use them.

#![no_std]

pub mod utils;
