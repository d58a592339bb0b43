//! Word sources for building and playing puzzles
//!
//! Two lists drive the game: the dictionary that submitted words are checked
//! against, and the shorter list of common words the generator draws solution
//! words from. Both are embedded at build time and can be replaced by files.

mod embedded;
pub mod loader;

pub use embedded::{COMMON, COMMON_COUNT, DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Substrings that disqualify a common word from appearing in a puzzle
pub const DEFAULT_BLOCKLIST: &[&str] = &["DEATH"];

/// A word source could not be loaded; fatal for starting a session
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{what} word list contains no usable words")]
    Empty { what: &'static str },
}

/// Set of uppercase words accepted as submissions
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries, normalising and dropping invalid ones
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: loader::normalize_all(words).into_iter().collect(),
        }
    }

    /// Exact membership test on an uppercase word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn insert(&mut self, word: &Word) {
        self.words.insert(word.text().to_string());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Candidate solution words, filtered to a length band and a blocklist
#[derive(Debug, Clone, Default)]
pub struct CommonWords {
    words: Vec<Word>,
}

impl CommonWords {
    /// Build the candidate list from raw entries
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    #[must_use]
    pub fn from_words<S: AsRef<str>>(
        words: &[S],
        lengths: &RangeInclusive<usize>,
        blocklist: &[&str],
    ) -> Self {
        let mut seen = FxHashSet::default();
        let words = loader::normalize_all(words)
            .into_iter()
            .filter(|w| lengths.contains(&w.len()))
            .filter(|w| !blocklist.iter().any(|banned| w.contains(banned)))
            .filter(|w| seen.insert(w.clone()))
            .filter_map(|w| Word::new(w).ok())
            .collect();

        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Loaded dictionary and common-word list
///
/// A session can only be created from a `WordSources`, so play never starts
/// before loading has finished.
#[derive(Debug, Clone)]
pub struct WordSources {
    dictionary: Dictionary,
    common: CommonWords,
}

impl WordSources {
    /// Combine a dictionary and a candidate list
    ///
    /// Every candidate word is added to the dictionary so that the reference
    /// solution is always submittable.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` if either list ends up empty.
    pub fn new(mut dictionary: Dictionary, common: CommonWords) -> Result<Self, LoadError> {
        if common.is_empty() {
            return Err(LoadError::Empty { what: "common" });
        }
        for word in common.words() {
            dictionary.insert(word);
        }
        if dictionary.is_empty() {
            return Err(LoadError::Empty { what: "dictionary" });
        }

        log::info!(
            "word sources ready: {} dictionary words, {} common words",
            dictionary.len(),
            common.len()
        );

        Ok(Self { dictionary, common })
    }

    /// Word sources compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` if the length band filters out every
    /// embedded common word.
    pub fn embedded(lengths: &RangeInclusive<usize>) -> Result<Self, LoadError> {
        Self::new(
            Dictionary::from_words(DICTIONARY),
            CommonWords::from_words(COMMON, lengths, DEFAULT_BLOCKLIST),
        )
    }

    /// Load word sources, falling back to the embedded list for any path not given
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if a file cannot be read or a list has no usable words.
    pub fn load(
        dictionary_path: Option<&Path>,
        common_path: Option<&Path>,
        lengths: &RangeInclusive<usize>,
    ) -> Result<Self, LoadError> {
        let dictionary = match dictionary_path {
            Some(path) => {
                log::info!("loading dictionary from {}", path.display());
                Dictionary::from_words(&loader::read_lines(path)?)
            }
            None => Dictionary::from_words(DICTIONARY),
        };

        let common = match common_path {
            Some(path) => {
                log::info!("loading common words from {}", path.display());
                CommonWords::from_words(&loader::read_lines(path)?, lengths, DEFAULT_BLOCKLIST)
            }
            None => CommonWords::from_words(COMMON, lengths, DEFAULT_BLOCKLIST),
        };

        Self::new(dictionary, common)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn common(&self) -> &CommonWords {
        &self.common
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_counts_match_consts() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
        assert_eq!(COMMON.len(), COMMON_COUNT);
    }

    #[test]
    fn embedded_lists_are_uppercase_alphabetic() {
        for &word in COMMON.iter().chain(DICTIONARY.iter()) {
            assert!(
                !word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' is not uppercase A-Z"
            );
        }
    }

    #[test]
    fn embedded_sources_load() {
        let sources = WordSources::embedded(&(3..=8)).unwrap();
        assert!(sources.common().len() > 100);
        assert!(sources.dictionary().len() >= sources.common().len());
    }

    #[test]
    fn common_words_are_in_dictionary() {
        let sources = WordSources::embedded(&(3..=8)).unwrap();
        for word in sources.common().words() {
            assert!(sources.dictionary().contains(word.text()), "{word} missing");
        }
    }

    #[test]
    fn common_words_filter_length_band() {
        let common = CommonWords::from_words(&["at", "cat", "elephant", "elephants"], &(3..=8), &[]);
        let texts: Vec<&str> = common.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CAT", "ELEPHANT"]);
    }

    #[test]
    fn common_words_filter_blocklist_and_duplicates() {
        let common = CommonWords::from_words(
            &["deathly", "life", "LIFE", "tree"],
            &(3..=8),
            DEFAULT_BLOCKLIST,
        );
        let texts: Vec<&str> = common.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["LIFE", "TREE"]);
    }

    #[test]
    fn dictionary_membership_is_exact() {
        let dict = Dictionary::from_words(&["cat", "dog"]);
        assert!(dict.contains("CAT"));
        assert!(!dict.contains("cat"));
        assert!(!dict.contains("COW"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn empty_common_list_is_a_load_failure() {
        let err = WordSources::new(Dictionary::from_words(&["cat"]), CommonWords::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::Empty { what: "common" }));
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let err = WordSources::load(Some(Path::new("no/such/dictionary.txt")), None, &(3..=8))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
