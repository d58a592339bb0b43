//! Generate command
//!
//! Produces a single puzzle without starting a game.

use crate::puzzle::{GenerateError, Generator, Puzzle, PuzzleConfig};
use crate::wordlists::WordSources;
use rand::Rng;
use std::time::{Duration, Instant};

/// A generated puzzle and how long it took
#[derive(Debug)]
pub struct GenerateResult {
    pub puzzle: Puzzle,
    pub duration: Duration,
}

/// Generate one puzzle from the common-word list
///
/// # Errors
///
/// Returns `GenerateError` if the settings are invalid or every attempt fails.
pub fn generate_puzzle<R: Rng + ?Sized>(
    sources: &WordSources,
    config: &PuzzleConfig,
    rng: &mut R,
) -> Result<GenerateResult, GenerateError> {
    let start = Instant::now();
    let puzzle = Generator::new(sources.common().words(), config.clone())?.generate(rng)?;

    Ok(GenerateResult {
        puzzle,
        duration: start.elapsed(),
    })
}
