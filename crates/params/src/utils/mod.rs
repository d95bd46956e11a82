//! Constant values for fips180 hashing operations

pub mod hash;
