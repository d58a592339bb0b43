//! Letters and letter multisets
//!
//! A `LetterMultiset` is a bag of uppercase ASCII letters backed by a fixed
//! 26-slot count array. Order is never meaningful; only counts are.

use std::fmt;

/// Number of distinct letters (A-Z)
pub const ALPHABET_SIZE: usize = 26;

/// A single uppercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Build a letter from a character, normalising lowercase to uppercase
    ///
    /// Returns `None` for anything outside `a-z` / `A-Z`.
    #[inline]
    #[must_use]
    pub const fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self(ch.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Build a letter from its alphabet index (0 = A)
    ///
    /// # Panics
    /// Panics in debug mode if `index >= 26`
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < ALPHABET_SIZE, "letter index must be < 26");
        Self(b'A' + index as u8)
    }

    /// Position in the alphabet (A = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Unordered bag of letters
///
/// # Examples
/// ```
/// use scrambled::core::{Letter, LetterMultiset};
///
/// let bag = LetterMultiset::from_letters("CATDOG").unwrap();
/// assert_eq!(bag.total(), 6);
/// assert_eq!(bag.count(Letter::new('a').unwrap()), 1);
///
/// let cat = LetterMultiset::from_letters("CAT").unwrap();
/// assert!(bag.contains(&cat));
/// assert_eq!(bag.difference(&cat).unwrap().to_string(), "DGO");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterMultiset {
    counts: [u32; ALPHABET_SIZE],
}

impl LetterMultiset {
    /// The empty bag
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Count the letters of `text`
    ///
    /// Returns `None` if `text` contains a non-alphabetic character.
    #[must_use]
    pub fn from_letters(text: &str) -> Option<Self> {
        let mut bag = Self::new();
        for ch in text.chars() {
            bag.add(Letter::new(ch)?);
        }
        Some(bag)
    }

    #[inline]
    #[must_use]
    pub const fn count(&self, letter: Letter) -> u32 {
        self.counts[letter.index()]
    }

    /// Total number of letters in the bag
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Number of distinct letters with a non-zero count
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    #[inline]
    pub fn add(&mut self, letter: Letter) {
        self.counts[letter.index()] += 1;
    }

    /// Remove one instance of `letter`
    ///
    /// Returns `false` and leaves the bag untouched if the letter is absent.
    #[inline]
    pub fn remove(&mut self, letter: Letter) -> bool {
        let slot = &mut self.counts[letter.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// True iff every letter of `other` is covered by this bag
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(have, need)| need <= have)
    }

    /// Sum of both bags
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut counts = self.counts;
        for (slot, extra) in counts.iter_mut().zip(other.counts.iter()) {
            *slot += extra;
        }
        Self { counts }
    }

    /// This bag minus `other`
    ///
    /// Returns `None` if `other` is not contained in this bag.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Option<Self> {
        let mut counts = self.counts;
        for (slot, take) in counts.iter_mut().zip(other.counts.iter()) {
            *slot = slot.checked_sub(*take)?;
        }
        Some(Self { counts })
    }

    /// Non-zero `(letter, count)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (Letter::from_index(i), c))
    }

    /// Expand the bag into a sorted list of letters
    #[must_use]
    pub fn to_letters(&self) -> Vec<Letter> {
        self.iter()
            .flat_map(|(letter, count)| std::iter::repeat_n(letter, count as usize))
            .collect()
    }
}

impl FromIterator<Letter> for LetterMultiset {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut bag = Self::new();
        for letter in iter {
            bag.add(letter);
        }
        bag
    }
}

impl fmt::Display for LetterMultiset {
    /// Letters in alphabetical order, e.g. `AACT`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.to_letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
