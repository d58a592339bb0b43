//! Puzzle word representation
//!
//! A Word stores an uppercase alphabetic word along with its letter counts,
//! which is everything the formability check and the ledger need.

use super::letters::{Letter, LetterMultiset};
use std::fmt;
use thiserror::Error;

/// An uppercase A-Z word with cached letter counts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    counts: LetterMultiset,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only the letters A-Z, found {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use scrambled::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let mut counts = LetterMultiset::new();
        for ch in text.chars() {
            let letter = Letter::new(ch).ok_or(WordError::InvalidCharacter(ch))?;
            counts.add(letter);
        }

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letter requirement of the word
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterMultiset {
        &self.counts
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a `Word` is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letters of the word in spelling order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.chars().filter_map(Letter::new)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
