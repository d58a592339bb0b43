//! Core domain types for the puzzle
//!
//! Letters, letter bags and words. Pure values with no I/O and no randomness.

mod letters;
mod word;

pub use letters::{ALPHABET_SIZE, Letter, LetterMultiset};
pub use word::{Word, WordError};
