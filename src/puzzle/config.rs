//! Puzzle generation settings

use std::ops::RangeInclusive;
use thiserror::Error;

/// Bounds and budgets for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Fewest solution words a puzzle may have
    pub min_words: usize,
    /// Most solution words a puzzle may have
    pub max_words: usize,
    /// Fewest letters in the pool
    pub min_letters: usize,
    /// Most letters in the pool
    pub max_letters: usize,
    /// Shortest candidate word
    pub min_word_len: usize,
    /// Longest candidate word
    pub max_word_len: usize,
    /// Random draws allowed while picking the words of one attempt
    pub draw_attempts: usize,
    /// Whole generation attempts before giving up
    pub max_generations: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            min_words: 4,
            max_words: 6,
            min_letters: 15,
            max_letters: 25,
            min_word_len: 3,
            max_word_len: 8,
            draw_attempts: 100,
            max_generations: 1000,
        }
    }
}

/// Inconsistent generation settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a puzzle needs at least one solution word")]
    NoWords,
    #[error("{name}: minimum {min} exceeds maximum {max}")]
    InvertedRange {
        name: &'static str,
        min: usize,
        max: usize,
    },
    #[error("word length must be at least 1")]
    ZeroWordLength,
    #[error("{0} must be at least 1")]
    ZeroBudget(&'static str),
}

impl PuzzleConfig {
    /// Check that every range is non-empty and every budget is positive
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.min_words == 0 {
            return Err(ConfigError::NoWords);
        }
        if self.min_words > self.max_words {
            return Err(ConfigError::InvertedRange {
                name: "words",
                min: self.min_words,
                max: self.max_words,
            });
        }
        if self.min_letters > self.max_letters {
            return Err(ConfigError::InvertedRange {
                name: "letters",
                min: self.min_letters,
                max: self.max_letters,
            });
        }
        if self.min_word_len == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.min_word_len > self.max_word_len {
            return Err(ConfigError::InvertedRange {
                name: "word length",
                min: self.min_word_len,
                max: self.max_word_len,
            });
        }
        if self.draw_attempts == 0 {
            return Err(ConfigError::ZeroBudget("draw attempts"));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroBudget("generation attempts"));
        }
        Ok(())
    }

    /// Accepted candidate word lengths
    #[must_use]
    pub const fn word_lengths(&self) -> RangeInclusive<usize> {
        self.min_word_len..=self.max_word_len
    }

    #[must_use]
    pub const fn letter_bounds(&self) -> RangeInclusive<usize> {
        self.min_letters..=self.max_letters
    }
}
