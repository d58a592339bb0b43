//! Puzzle generation
//!
//! Letters are derived from randomly drawn solution words, so every puzzle is
//! solvable by construction. Attempts that miss the configured bounds are
//! discarded and retried inside a bounded loop.

use super::config::{ConfigError, PuzzleConfig};
use crate::core::{Letter, LetterMultiset, Word};
use crate::game::validator::formable;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fmt;
use thiserror::Error;

/// A generated puzzle: the letter pool and the reference solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    original: LetterMultiset,
    solution_words: Vec<Word>,
    display_order: Vec<Letter>,
    generations: usize,
}

impl Puzzle {
    /// Build a puzzle whose pool is exactly the letters of `words`
    ///
    /// Letters are displayed in alphabetical order; use [`Puzzle::shuffled`]
    /// for a random presentation. Returns `None` for an empty word list.
    ///
    /// # Examples
    /// ```
    /// use scrambled::core::Word;
    /// use scrambled::puzzle::Puzzle;
    ///
    /// let words = vec![Word::new("cat").unwrap(), Word::new("dog").unwrap()];
    /// let puzzle = Puzzle::from_solution(words).unwrap();
    /// assert_eq!(puzzle.letter_count(), 6);
    /// assert_eq!(puzzle.original_letters().to_string(), "ACDGOT");
    /// ```
    #[must_use]
    pub fn from_solution(solution_words: Vec<Word>) -> Option<Self> {
        if solution_words.is_empty() {
            return None;
        }
        let original = letters_of(&solution_words);
        Some(Self {
            display_order: original.to_letters(),
            original,
            solution_words,
            generations: 1,
        })
    }

    /// Shuffle the display order; the multiset itself is unchanged
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.display_order.shuffle(rng);
        self
    }

    /// The letter multiset fixed at generation time
    #[must_use]
    pub const fn original_letters(&self) -> &LetterMultiset {
        &self.original
    }

    /// Reference solution, in draw order
    #[must_use]
    pub fn solution_words(&self) -> &[Word] {
        &self.solution_words
    }

    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.display_order.len()
    }

    /// Letters in presentation order
    #[must_use]
    pub fn display_order(&self) -> &[Letter] {
        &self.display_order
    }

    /// Number of generation attempts it took to produce this puzzle
    #[must_use]
    pub const fn generations(&self) -> usize {
        self.generations
    }
}

/// Generation failed outright
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid puzzle settings: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("no candidate words to build a puzzle from")]
    NoCandidates,
    #[error("no valid puzzle found after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Why a single attempt was thrown away
#[derive(Debug, Clone, PartialEq, Eq)]
enum Retry {
    TooFewWords(usize),
    TooFewLetters(usize),
    TooManyLetters(usize),
    Unformable(String),
}

impl fmt::Display for Retry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewWords(n) => write!(f, "only {n} distinct words drawn"),
            Self::TooFewLetters(n) => write!(f, "too few letters ({n})"),
            Self::TooManyLetters(n) => write!(f, "too many letters after trimming ({n})"),
            Self::Unformable(word) => write!(f, "{word} cannot be spelled from the pool"),
        }
    }
}

/// Draws puzzles from a list of candidate words
pub struct Generator<'a> {
    candidates: &'a [Word],
    config: PuzzleConfig,
}

impl<'a> Generator<'a> {
    /// Create a generator over `candidates`
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::InvalidConfig` for inconsistent settings and
    /// `GenerateError::NoCandidates` for an empty candidate list.
    pub fn new(candidates: &'a [Word], config: PuzzleConfig) -> Result<Self, GenerateError> {
        config.validate()?;
        if candidates.is_empty() {
            return Err(GenerateError::NoCandidates);
        }
        Ok(Self { candidates, config })
    }

    #[must_use]
    pub const fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Generate a puzzle, retrying up to `max_generations` times
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Exhausted` if no attempt satisfied the bounds.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Puzzle, GenerateError> {
        for generation in 1..=self.config.max_generations {
            match self.attempt(rng) {
                Ok(words) => {
                    let original = letters_of(&words);
                    let mut display_order = original.to_letters();
                    display_order.shuffle(rng);

                    log::info!(
                        "generated puzzle after {generation} attempt(s): {} words, {} letters",
                        words.len(),
                        display_order.len()
                    );
                    log::debug!(
                        "solution words: {}",
                        words.iter().map(Word::text).collect::<Vec<_>>().join(", ")
                    );

                    return Ok(Puzzle {
                        original,
                        solution_words: words,
                        display_order,
                        generations: generation,
                    });
                }
                Err(retry) => log::debug!("generation attempt {generation} discarded: {retry}"),
            }
        }

        log::warn!(
            "giving up after {} generation attempts",
            self.config.max_generations
        );
        Err(GenerateError::Exhausted {
            attempts: self.config.max_generations,
        })
    }

    /// One generation attempt: draw words, trim to the letter budget, verify
    fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Word>, Retry> {
        let config = &self.config;
        let target = rng.random_range(config.min_words..=config.max_words);
        let lengths = config.word_lengths();

        let mut words: Vec<Word> = Vec::with_capacity(target);
        let mut draws = 0;
        while words.len() < target && draws < config.draw_attempts {
            draws += 1;
            let Some(word) = self.candidates.choose(rng) else {
                break;
            };
            if words.contains(word) || !lengths.contains(&word.len()) {
                continue;
            }
            words.push(word.clone());
        }

        if words.len() < config.min_words {
            return Err(Retry::TooFewWords(words.len()));
        }

        let mut letters = letters_of(&words);
        if letters.total() < config.min_letters {
            return Err(Retry::TooFewLetters(letters.total()));
        }

        // Drop whole words, longest first, so the rest stay spellable
        while letters.total() > config.max_letters && words.len() > config.min_words {
            let removed = words.remove(longest_index(&words));
            log::debug!("removed {removed} to reduce letter count");
            letters = letters_of(&words);
        }

        if letters.total() > config.max_letters {
            return Err(Retry::TooManyLetters(letters.total()));
        }
        if letters.total() < config.min_letters {
            return Err(Retry::TooFewLetters(letters.total()));
        }

        if let Some(word) = words.iter().find(|w| !formable(w, &letters)) {
            return Err(Retry::Unformable(word.text().to_string()));
        }

        Ok(words)
    }
}

/// Combined letter multiset of a word list
fn letters_of(words: &[Word]) -> LetterMultiset {
    words
        .iter()
        .fold(LetterMultiset::new(), |acc, w| acc.union(w.counts()))
}

/// Index of the longest word, first occurrence on ties
fn longest_index(words: &[Word]) -> usize {
    let mut best = 0;
    for (i, word) in words.iter().enumerate() {
        if word.len() > words[best].len() {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordSources;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn from_solution_derives_multiset() {
        let puzzle = Puzzle::from_solution(words(&["CAT", "DOG"])).unwrap();
        let expected = LetterMultiset::from_letters("CATDOG").unwrap();

        assert_eq!(puzzle.original_letters(), &expected);
        assert_eq!(puzzle.letter_count(), 6);
        assert_eq!(puzzle.solution_words().len(), 2);
    }

    #[test]
    fn from_solution_rejects_empty() {
        assert!(Puzzle::from_solution(Vec::new()).is_none());
    }

    #[test]
    fn shuffle_keeps_multiset() {
        let puzzle = Puzzle::from_solution(words(&["BANANA", "APPLE"])).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = puzzle.clone().shuffled(&mut rng);

        let displayed: LetterMultiset = shuffled.display_order().iter().copied().collect();
        assert_eq!(&displayed, puzzle.original_letters());
        assert_eq!(shuffled.original_letters(), puzzle.original_letters());
    }

    #[test]
    fn longest_index_prefers_first_on_ties() {
        let list = words(&["CAT", "HORSE", "MOUSE", "OX"]);
        assert_eq!(longest_index(&list), 1);
    }

    #[test]
    fn generated_puzzles_respect_bounds() {
        let sources = WordSources::embedded(&(3..=8)).unwrap();
        let config = PuzzleConfig::default();
        let generator = Generator::new(sources.common().words(), config.clone()).unwrap();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generator.generate(&mut rng).unwrap();

            assert!(config.letter_bounds().contains(&puzzle.letter_count()));
            assert!(puzzle.solution_words().len() >= config.min_words);
            assert!(puzzle.solution_words().len() <= config.max_words);
            assert_eq!(puzzle.original_letters().total(), puzzle.letter_count());
        }
    }

    #[test]
    fn solution_words_are_formable_from_original() {
        let sources = WordSources::embedded(&(3..=8)).unwrap();
        let generator = Generator::new(sources.common().words(), PuzzleConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let puzzle = generator.generate(&mut rng).unwrap();
            for word in puzzle.solution_words() {
                assert!(formable(word, puzzle.original_letters()));
            }
            // The pool is exactly the solution's letters, nothing invented
            assert_eq!(puzzle.original_letters(), &letters_of(puzzle.solution_words()));
        }
    }

    #[test]
    fn solution_words_are_distinct() {
        let sources = WordSources::embedded(&(3..=8)).unwrap();
        let generator = Generator::new(sources.common().words(), PuzzleConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let puzzle = generator.generate(&mut rng).unwrap();
        let solution = puzzle.solution_words();
        for (i, word) in solution.iter().enumerate() {
            assert!(!solution[i + 1..].contains(word));
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let sources = WordSources::embedded(&(3..=8)).unwrap();
        let generator = Generator::new(sources.common().words(), PuzzleConfig::default()).unwrap();

        let a = generator.generate(&mut StdRng::seed_from_u64(99)).unwrap();
        let b = generator.generate(&mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn trims_longest_words_to_fit() {
        // Every draw is long, so the letter budget forces trimming down to min_words
        let candidates = words(&["ELEPHANT", "MOUNTAIN", "DOG", "CAT", "OWL", "BEE"]);
        let config = PuzzleConfig {
            min_words: 2,
            max_words: 6,
            min_letters: 6,
            max_letters: 6,
            ..PuzzleConfig::default()
        };
        let generator = Generator::new(&candidates, config).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let puzzle = generator.generate(&mut rng).unwrap();
        assert_eq!(puzzle.letter_count(), 6);
        assert_eq!(puzzle.solution_words().len(), 2);
        assert!(puzzle.solution_words().iter().all(|w| w.len() == 3));
    }

    #[test]
    fn exhausts_when_bounds_unreachable() {
        let candidates = words(&["CAT"]);
        let config = PuzzleConfig {
            min_words: 2,
            max_words: 2,
            min_letters: 1,
            max_generations: 5,
            ..PuzzleConfig::default()
        };
        let generator = Generator::new(&candidates, config).unwrap();

        let result = generator.generate(&mut StdRng::seed_from_u64(0));
        assert_eq!(result, Err(GenerateError::Exhausted { attempts: 5 }));
    }

    #[test]
    fn rejects_out_of_band_candidates() {
        let candidates = words(&["AN", "TO", "BE"]);
        let config = PuzzleConfig {
            min_words: 1,
            max_words: 1,
            min_letters: 1,
            max_generations: 10,
            ..PuzzleConfig::default()
        };
        let generator = Generator::new(&candidates, config).unwrap();

        assert!(generator.generate(&mut StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn new_rejects_bad_input() {
        let candidates = words(&["CAT"]);
        assert!(matches!(
            Generator::new(&[], PuzzleConfig::default()),
            Err(GenerateError::NoCandidates)
        ));
        let bad = PuzzleConfig {
            min_words: 0,
            ..PuzzleConfig::default()
        };
        assert!(matches!(
            Generator::new(&candidates, bad),
            Err(GenerateError::InvalidConfig(ConfigError::NoWords))
        ));
    }
}
