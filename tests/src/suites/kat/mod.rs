//! Known-answer suite.
//!
//! Re-export the public surface so callers can do
//! `use fips180_tests::kat::*;`.

pub mod engine;
pub mod error;
pub mod model;
pub mod runner;

pub use engine::*;
pub use error::*;
pub use loader::*;
pub use model::*;
pub use runner::*;
