//! Test suites driven by data files under `src/vectors`
pub mod kat;
