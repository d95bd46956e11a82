//! Generic driver that checks a `KatFile` using a pluggable engine.

use crate::suites::kat::engine::KatEngine;
use crate::suites::kat::error::{EngineError, Result};
use crate::suites::kat::model::{KatFile, KatVector};

/// Thin wrapper that walks vector files and tallies results.
pub struct Runner<'e, E: KatEngine> {
    engine: &'e E,
}

impl<'e, E: KatEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Check a single vector
    pub fn run_vector(&self, vector: &KatVector) -> Result<()> {
        let message = vector.message()?;
        let actual = self.engine.hex_digest(vector.algorithm, &message)?;
        if actual != vector.md {
            return Err(EngineError::Mismatch {
                algorithm: vector.algorithm,
                name: vector.name.clone(),
                expected: vector.md.clone(),
                actual,
            });
        }
        Ok(())
    }

    /// Check every vector and report the number that passed
    pub fn run_file<'v, I>(&self, vectors: I) -> std::result::Result<usize, String>
    where
        I: IntoIterator<Item = &'v KatVector>,
    {
        let mut passed = 0;
        let mut failed = 0;

        for vector in vectors {
            match self.run_vector(vector) {
                Ok(()) => passed += 1,
                Err(e) => {
                    failed += 1;
                    eprintln!("Vector {} failed: {}", vector.name, e);
                }
            }
        }

        println!("Test results: {} passed, {} failed", passed, failed);

        if failed > 0 {
            Err(format!("{} vectors failed", failed))
        } else {
            Ok(passed)
        }
    }

    /// Check a whole file
    pub fn run_suite(&self, file: &KatFile) -> std::result::Result<usize, String> {
        self.run_file(&file.vectors)
    }
}
