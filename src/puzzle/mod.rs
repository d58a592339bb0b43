//! Puzzle generation
//!
//! Picks a solvable set of solution words and derives the letter pool from them.

mod config;
mod generator;

pub use config::{ConfigError, PuzzleConfig};
pub use generator::{GenerateError, Generator, Puzzle};
