//! Testing utilities for the fips180 digest engine
pub mod suites;

pub use suites::kat;
