//! Letter pool ledger
//!
//! Tracks where every letter of the puzzle currently is:
//! - `available`: free for typing
//! - `in_flight`: reserved by the word being typed
//! - `committed`: spent on accepted words
//!
//! For every letter `L`, `available[L] + in_flight[L] + committed[L]` equals
//! the puzzle's original count. Each transition builds the next state first,
//! audits it, and only then replaces the current one, so a failed operation
//! never leaves the ledger half-updated.

use crate::core::{Letter, LetterMultiset, Word};
use crate::puzzle::Puzzle;
use thiserror::Error;

/// Ledger operation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("no {0} left in the pool")]
    Unavailable(Letter),
    #[error("{0} is not reserved by the pending word")]
    NotInFlight(Letter),
    #[error("the pool does not hold the letters of {0}")]
    LettersMissing(String),
    #[error("{0} is not among the accepted words")]
    NotFound(String),
    #[error("letter accounting violated: {0}")]
    AccountingViolation(String),
}

/// Live accounting of the puzzle's letters
///
/// # Examples
/// ```
/// use scrambled::core::{Letter, LetterMultiset, Word};
/// use scrambled::game::Ledger;
///
/// let mut ledger = Ledger::new(LetterMultiset::from_letters("CATDOG").unwrap());
/// ledger.reserve(Letter::new('C').unwrap()).unwrap();
/// ledger.commit(&Word::new("CAT").unwrap()).unwrap();
///
/// assert_eq!(ledger.available().to_string(), "DGO");
/// assert!(ledger.in_flight().is_empty());
/// assert_eq!(ledger.used_words().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    original: LetterMultiset,
    available: LetterMultiset,
    in_flight: LetterMultiset,
    committed: LetterMultiset,
    used_words: Vec<Word>,
}

impl Ledger {
    /// Fresh ledger with every letter available
    #[must_use]
    pub const fn new(original: LetterMultiset) -> Self {
        Self {
            original,
            available: original,
            in_flight: LetterMultiset::new(),
            committed: LetterMultiset::new(),
            used_words: Vec::new(),
        }
    }

    #[must_use]
    pub const fn from_puzzle(puzzle: &Puzzle) -> Self {
        Self::new(*puzzle.original_letters())
    }

    #[must_use]
    pub const fn original(&self) -> &LetterMultiset {
        &self.original
    }

    #[must_use]
    pub const fn available(&self) -> &LetterMultiset {
        &self.available
    }

    #[must_use]
    pub const fn in_flight(&self) -> &LetterMultiset {
        &self.in_flight
    }

    #[must_use]
    pub const fn committed(&self) -> &LetterMultiset {
        &self.committed
    }

    /// Accepted words in submission order
    #[must_use]
    pub fn used_words(&self) -> &[Word] {
        &self.used_words
    }

    /// Letters not yet committed (`available` plus `in_flight`)
    #[must_use]
    pub fn open_letters(&self) -> LetterMultiset {
        self.available.union(&self.in_flight)
    }

    /// Every original letter is committed
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.available.is_empty() && self.in_flight.is_empty()
    }

    /// Move one `letter` from `available` to `in_flight`
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Unavailable` without touching the ledger if no
    /// instance of `letter` is available.
    pub fn reserve(&mut self, letter: Letter) -> Result<(), LedgerError> {
        let mut available = self.available;
        if !available.remove(letter) {
            return Err(LedgerError::Unavailable(letter));
        }
        let mut in_flight = self.in_flight;
        in_flight.add(letter);

        self.settle(available, in_flight, self.committed)?;
        log::debug!("reserved {letter}; in flight: {}", self.in_flight);
        Ok(())
    }

    /// Move one `letter` from `in_flight` back to `available`
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotInFlight` if `letter` is not reserved.
    pub fn release(&mut self, letter: Letter) -> Result<(), LedgerError> {
        let mut in_flight = self.in_flight;
        if !in_flight.remove(letter) {
            return Err(LedgerError::NotInFlight(letter));
        }
        let mut available = self.available;
        available.add(letter);

        self.settle(available, in_flight, self.committed)?;
        log::debug!("released {letter}; in flight: {}", self.in_flight);
        Ok(())
    }

    /// Return every reserved letter to `available`
    ///
    /// Returns the number of letters released.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::AccountingViolation` if the ledger was already
    /// inconsistent.
    pub fn release_all_in_flight(&mut self) -> Result<usize, LedgerError> {
        let released = self.in_flight.total();
        if released == 0 {
            return Ok(0);
        }
        self.settle(self.open_letters(), LetterMultiset::new(), self.committed)?;
        log::debug!("released {released} pending letter(s)");
        Ok(released)
    }

    /// Spend the letters of `word` and record it as accepted
    ///
    /// Reserved letters are returned to `available` first and the word is then
    /// drawn from the reopened pool, so `in_flight` is always empty afterwards.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::LettersMissing` without touching the ledger if the
    /// uncommitted letters cannot cover `word`.
    pub fn commit(&mut self, word: &Word) -> Result<(), LedgerError> {
        let Some(available) = self.open_letters().difference(word.counts()) else {
            log::error!("commit of {word} with uncovered letters; {}", self.describe());
            return Err(LedgerError::LettersMissing(word.text().to_string()));
        };
        let committed = self.committed.union(word.counts());

        self.settle(available, LetterMultiset::new(), committed)?;
        self.used_words.push(word.clone());
        log::debug!("committed {word}; available: {}", self.available);
        Ok(())
    }

    /// Remove the most recent occurrence of `text` from the accepted words and
    /// return its letters to `available`
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` if no accepted word matches.
    pub fn uncommit(&mut self, text: &str) -> Result<Word, LedgerError> {
        let wanted = text.trim().to_ascii_uppercase();
        let index = self
            .used_words
            .iter()
            .rposition(|w| w.text() == wanted)
            .ok_or(LedgerError::NotFound(wanted))?;

        let counts = *self.used_words[index].counts();
        let Some(committed) = self.committed.difference(&counts) else {
            return Err(self.violation(format!(
                "committed letters {} do not cover {}",
                self.committed, self.used_words[index]
            )));
        };
        let available = self.available.union(&counts);

        self.settle(available, self.in_flight, committed)?;
        let word = self.used_words.remove(index);
        log::debug!("uncommitted {word}; available: {}", self.available);
        Ok(word)
    }

    /// Verify the per-letter conservation invariant
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::AccountingViolation` describing the first
    /// mismatch.
    pub fn audit(&self) -> Result<(), LedgerError> {
        Self::check(
            &self.original,
            &self.available,
            &self.in_flight,
            &self.committed,
        )
        .map_err(|detail| self.violation(detail))?;

        let spent = self
            .used_words
            .iter()
            .fold(LetterMultiset::new(), |acc, w| acc.union(w.counts()));
        if spent != self.committed {
            return Err(self.violation(format!(
                "accepted words spell {spent} but committed holds {}",
                self.committed
            )));
        }
        Ok(())
    }

    /// Replace the three pools after checking them against `original`
    fn settle(
        &mut self,
        available: LetterMultiset,
        in_flight: LetterMultiset,
        committed: LetterMultiset,
    ) -> Result<(), LedgerError> {
        Self::check(&self.original, &available, &in_flight, &committed)
            .map_err(|detail| self.violation(detail))?;

        self.available = available;
        self.in_flight = in_flight;
        self.committed = committed;
        Ok(())
    }

    fn check(
        original: &LetterMultiset,
        available: &LetterMultiset,
        in_flight: &LetterMultiset,
        committed: &LetterMultiset,
    ) -> Result<(), String> {
        let total = available.union(in_flight).union(committed);
        if total == *original {
            return Ok(());
        }
        let mismatch = (0..crate::core::ALPHABET_SIZE)
            .map(Letter::from_index)
            .find(|&l| total.count(l) != original.count(l));
        Err(match mismatch {
            Some(letter) => format!(
                "{letter}: {} available + {} in flight + {} committed != {} original",
                available.count(letter),
                in_flight.count(letter),
                committed.count(letter),
                original.count(letter)
            ),
            None => "pool totals differ from the original".to_string(),
        })
    }

    fn violation(&self, detail: String) -> LedgerError {
        log::error!("accounting violation: {detail}; {}", self.describe());
        LedgerError::AccountingViolation(detail)
    }

    /// Full state dump for diagnostics
    fn describe(&self) -> String {
        let words: Vec<&str> = self.used_words.iter().map(Word::text).collect();
        format!(
            "original={} available={} in_flight={} committed={} used_words=[{}]",
            self.original,
            self.available,
            self.in_flight,
            self.committed,
            words.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn bag(text: &str) -> LetterMultiset {
        LetterMultiset::from_letters(text).unwrap()
    }

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn new_ledger_has_everything_available() {
        let ledger = Ledger::new(bag("CATDOG"));
        assert_eq!(ledger.available(), &bag("CATDOG"));
        assert!(ledger.in_flight().is_empty());
        assert!(ledger.committed().is_empty());
        assert!(ledger.used_words().is_empty());
        assert!(!ledger.is_exhausted());
        assert_eq!(ledger.audit(), Ok(()));
    }

    #[test]
    fn reserve_moves_one_letter() {
        let mut ledger = Ledger::new(bag("AAT"));
        ledger.reserve(letter('A')).unwrap();

        assert_eq!(ledger.available(), &bag("AT"));
        assert_eq!(ledger.in_flight(), &bag("A"));
    }

    #[test]
    fn reserve_unavailable_leaves_state_untouched() {
        let mut ledger = Ledger::new(bag("A"));
        let before = ledger.clone();

        assert_eq!(
            ledger.reserve(letter('B')),
            Err(LedgerError::Unavailable(letter('B')))
        );
        assert_eq!(ledger, before);

        ledger.reserve(letter('A')).unwrap();
        assert_eq!(
            ledger.reserve(letter('A')),
            Err(LedgerError::Unavailable(letter('A')))
        );
    }

    #[test]
    fn reserve_then_release_round_trips() {
        let mut ledger = Ledger::new(bag("LETTER"));
        let before = ledger.clone();

        ledger.reserve(letter('T')).unwrap();
        ledger.release(letter('T')).unwrap();
        assert_eq!(ledger, before);
    }

    #[test]
    fn release_requires_reservation() {
        let mut ledger = Ledger::new(bag("AT"));
        assert_eq!(
            ledger.release(letter('A')),
            Err(LedgerError::NotInFlight(letter('A')))
        );
    }

    #[test]
    fn release_all_returns_reserved_letters() {
        let mut ledger = Ledger::new(bag("STAR"));
        ledger.reserve(letter('S')).unwrap();
        ledger.reserve(letter('T')).unwrap();

        assert_eq!(ledger.release_all_in_flight(), Ok(2));
        assert_eq!(ledger.available(), &bag("STAR"));
        assert!(ledger.in_flight().is_empty());
        assert_eq!(ledger.release_all_in_flight(), Ok(0));
    }

    #[test]
    fn commit_consumes_reserved_letters() {
        let mut ledger = Ledger::new(bag("AT"));
        ledger.reserve(letter('A')).unwrap();
        ledger.reserve(letter('T')).unwrap();
        ledger.commit(&word("AT")).unwrap();

        assert!(ledger.is_exhausted());
        assert_eq!(ledger.committed(), &bag("AT"));
        assert_eq!(ledger.used_words(), &[word("AT")]);
    }

    #[test]
    fn commit_returns_unused_reservations() {
        let mut ledger = Ledger::new(bag("CATDOG"));
        ledger.reserve(letter('D')).unwrap();
        ledger.reserve(letter('C')).unwrap();

        ledger.commit(&word("CAT")).unwrap();
        assert!(ledger.in_flight().is_empty());
        assert_eq!(ledger.available(), &bag("DOG"));
    }

    #[test]
    fn commit_without_letters_is_rejected() {
        let mut ledger = Ledger::new(bag("TRE"));
        let before = ledger.clone();

        assert_eq!(
            ledger.commit(&word("TREE")),
            Err(LedgerError::LettersMissing("TREE".to_string()))
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn commit_then_uncommit_round_trips() {
        let mut ledger = Ledger::new(bag("CATDOG"));
        let before = ledger.clone();

        ledger.commit(&word("DOG")).unwrap();
        let removed = ledger.uncommit("dog").unwrap();

        assert_eq!(removed, word("DOG"));
        assert_eq!(ledger, before);
    }

    #[test]
    fn uncommit_removes_most_recent_duplicate() {
        let mut ledger = Ledger::new(bag("ATATDOG"));
        ledger.commit(&word("AT")).unwrap();
        ledger.commit(&word("DOG")).unwrap();
        ledger.commit(&word("AT")).unwrap();

        ledger.uncommit("AT").unwrap();
        assert_eq!(ledger.used_words(), &[word("AT"), word("DOG")]);
        assert_eq!(ledger.available(), &bag("AT"));
        assert_eq!(ledger.audit(), Ok(()));
    }

    #[test]
    fn uncommit_unknown_word() {
        let mut ledger = Ledger::new(bag("CAT"));
        let before = ledger.clone();

        assert_eq!(
            ledger.uncommit("CAT"),
            Err(LedgerError::NotFound("CAT".to_string()))
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn uncommit_keeps_pending_reservations() {
        let mut ledger = Ledger::new(bag("CATDOG"));
        ledger.commit(&word("CAT")).unwrap();
        ledger.reserve(letter('D')).unwrap();

        ledger.uncommit("CAT").unwrap();
        assert_eq!(ledger.in_flight(), &bag("D"));
        assert_eq!(ledger.available(), &bag("CATOG"));
    }

    #[test]
    fn cat_dog_scenario_exhausts_pool() {
        let mut ledger = Ledger::new(bag("CATDOG"));

        ledger.commit(&word("CAT")).unwrap();
        assert_eq!(ledger.available(), &bag("DOG"));
        assert_eq!(ledger.committed(), &bag("CAT"));

        ledger.commit(&word("DOG")).unwrap();
        assert!(ledger.available().is_empty());
        assert!(ledger.in_flight().is_empty());
        assert!(ledger.is_exhausted());
        assert_eq!(ledger.used_words().len(), 2);
    }

    #[test]
    fn audit_detects_tampering() {
        let mut ledger = Ledger::new(bag("CAT"));
        ledger.available.add(letter('Z'));

        assert!(matches!(
            ledger.audit(),
            Err(LedgerError::AccountingViolation(detail)) if detail.starts_with('Z')
        ));
    }

    #[test]
    fn audit_detects_word_mismatch() {
        let mut ledger = Ledger::new(bag("CAT"));
        ledger.commit(&word("CAT")).unwrap();
        ledger.used_words.clear();

        assert!(matches!(
            ledger.audit(),
            Err(LedgerError::AccountingViolation(_))
        ));
    }

    #[test]
    fn random_operations_preserve_totals() {
        let original = bag("STREAMLINEDOCTOPUS");
        let vocabulary = [
            "STREAM", "LINE", "OCTOPUS", "TEA", "MAST", "DOT", "PUS", "SLEET", "ZZZ",
        ];
        let letters: Vec<Letter> = "ABCDEILMNOPRSTUZ".chars().map(letter).collect();

        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ledger = Ledger::new(original);

            for _ in 0..300 {
                let before = ledger.clone();
                match rng.random_range(0..5) {
                    0 => {
                        let l = letters[rng.random_range(0..letters.len())];
                        if ledger.reserve(l).is_err() {
                            assert_eq!(ledger, before);
                        }
                    }
                    1 => {
                        let l = letters[rng.random_range(0..letters.len())];
                        if ledger.release(l).is_err() {
                            assert_eq!(ledger, before);
                        }
                    }
                    2 => {
                        let w = word(vocabulary[rng.random_range(0..vocabulary.len())]);
                        if ledger.commit(&w).is_err() {
                            assert_eq!(ledger, before);
                        }
                    }
                    3 => {
                        let w = vocabulary[rng.random_range(0..vocabulary.len())];
                        if ledger.uncommit(w).is_err() {
                            assert_eq!(ledger, before);
                        }
                    }
                    _ => {
                        ledger.release_all_in_flight().unwrap();
                    }
                }

                assert_eq!(ledger.audit(), Ok(()));
                let total = ledger.available().total()
                    + ledger.in_flight().total()
                    + ledger.committed().total();
                assert_eq!(total, original.total());
            }
        }
    }
}
