//! Submission checks
//!
//! Two independent tests decide whether a word may be submitted: dictionary
//! membership and formability from the letters still in play. Callers need to
//! know which one failed, so both are exposed alongside the combined check.

use crate::core::{LetterMultiset, Word};
use crate::wordlists::Dictionary;
use std::fmt;

/// Why a submitted word was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotInDictionary,
    NotFormable,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInDictionary => write!(f, "not in dictionary"),
            Self::NotFormable => write!(f, "not formable from the available letters"),
        }
    }
}

/// True iff no letter of `word` is needed more often than `pool` holds it
///
/// # Examples
/// ```
/// use scrambled::core::{LetterMultiset, Word};
/// use scrambled::game::validator::formable;
///
/// let pool = LetterMultiset::from_letters("TEAR").unwrap();
/// assert!(formable(&Word::new("rate").unwrap(), &pool));
/// assert!(!formable(&Word::new("tree").unwrap(), &pool));
/// ```
#[inline]
#[must_use]
pub fn formable(word: &Word, pool: &LetterMultiset) -> bool {
    pool.contains(word.counts())
}

#[inline]
#[must_use]
pub fn in_dictionary(word: &Word, dictionary: &Dictionary) -> bool {
    dictionary.contains(word.text())
}

/// Combined check; the dictionary is consulted first
///
/// # Errors
///
/// Returns the first `Rejection` that applies.
pub fn check(word: &Word, dictionary: &Dictionary, pool: &LetterMultiset) -> Result<(), Rejection> {
    if !in_dictionary(word, dictionary) {
        return Err(Rejection::NotInDictionary);
    }
    if !formable(word, pool) {
        return Err(Rejection::NotFormable);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pool(text: &str) -> LetterMultiset {
        LetterMultiset::from_letters(text).unwrap()
    }

    #[test]
    fn formable_with_exact_letters() {
        assert!(formable(&word("CAT"), &pool("TAC")));
    }

    #[test]
    fn formable_with_spare_letters() {
        assert!(formable(&word("CAT"), &pool("CATDOG")));
    }

    #[test]
    fn not_formable_when_letter_missing() {
        assert!(!formable(&word("CAB"), &pool("CAT")));
    }

    #[test]
    fn not_formable_when_duplicate_short() {
        assert!(!formable(&word("TREE"), &pool("TRE")));
        assert!(formable(&word("TREE"), &pool("TREE")));
    }

    #[test]
    fn dictionary_failure_takes_precedence() {
        let dict = Dictionary::from_words(&["cat"]);
        assert_eq!(
            check(&word("XYZ"), &dict, &pool("A")),
            Err(Rejection::NotInDictionary)
        );
    }

    #[test]
    fn formability_failure_is_distinguished() {
        let dict = Dictionary::from_words(&["tree"]);
        assert_eq!(
            check(&word("TREE"), &dict, &pool("TRE")),
            Err(Rejection::NotFormable)
        );
        assert!(in_dictionary(&word("TREE"), &dict));
    }

    #[test]
    fn valid_word_passes() {
        let dict = Dictionary::from_words(&["at"]);
        assert_eq!(check(&word("AT"), &dict, &pool("AT")), Ok(()));
    }
}
