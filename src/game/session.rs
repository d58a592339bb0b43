//! Session controller
//!
//! Translates front-end events (input snapshots, submit, delete, cancel,
//! reset) into ledger operations and reports the results to a `Presenter`.
//! Every event is handled synchronously to completion.

use super::input::PendingInput;
use super::ledger::{Ledger, LedgerError};
use super::validator::{self, Rejection};
use crate::core::{Letter, Word};
use crate::puzzle::{GenerateError, Generator, Puzzle, PuzzleConfig};
use crate::wordlists::WordSources;
use rand::rngs::StdRng;
use std::fmt;
use thiserror::Error;

/// Receives render snapshots and notices from a session
pub trait Presenter {
    /// Called after every state change
    fn render(&mut self, snapshot: &Snapshot);

    /// Called with the outcome of an event
    fn notify(&mut self, notice: &Notice);
}

/// Presenter that ignores everything
impl Presenter for () {
    fn render(&mut self, _snapshot: &Snapshot) {}

    fn notify(&mut self, _notice: &Notice) {}
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed
    Idle,
    /// A word is being composed
    Typing,
    /// Every letter is used; only reset is accepted
    Completed,
}

/// How a notice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Outcome messages for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NewPuzzle { letters: usize },
    Accepted(String),
    Rejected { word: String, reason: Rejection },
    Removed(String),
    NotFound(String),
    LetterUnavailable(char),
    Completed {
        used: usize,
        reference: usize,
        solution: Vec<String>,
    },
}

impl Notice {
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        match self {
            Self::NewPuzzle { .. } => NoticeKind::Info,
            Self::Accepted(_) | Self::Removed(_) | Self::Completed { .. } => NoticeKind::Success,
            Self::Rejected { .. } | Self::NotFound(_) | Self::LetterUnavailable(_) => {
                NoticeKind::Error
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewPuzzle { letters } => {
                write!(f, "New puzzle started! Use all {letters} letters.")
            }
            Self::Accepted(word) => write!(f, "Word \"{word}\" added successfully!"),
            Self::Rejected {
                word,
                reason: Rejection::NotInDictionary,
            } => write!(f, "\"{word}\" is not a valid word in our dictionary."),
            Self::Rejected {
                word,
                reason: Rejection::NotFormable,
            } => write!(f, "\"{word}\" cannot be formed from the available letters."),
            Self::Removed(word) => write!(f, "Word \"{word}\" removed and letters returned."),
            Self::NotFound(word) => write!(f, "\"{word}\" is not in your word list."),
            Self::LetterUnavailable(ch) => write!(f, "No \"{ch}\" left to use."),
            Self::Completed {
                used, reference, ..
            } => {
                write!(
                    f,
                    "Congratulations! You've used all the letters in {used} {}. ",
                    plural(*used, "word", "words")
                )?;
                write!(f, "{}", comparison(*used, *reference))
            }
        }
    }
}

/// Compare the player's word count with the reference solution
#[must_use]
pub fn comparison(used: usize, reference: usize) -> String {
    match used.cmp(&reference) {
        std::cmp::Ordering::Less => {
            "Amazing! You found a better solution than ours using fewer words!".to_string()
        }
        std::cmp::Ordering::Equal => "Great job! You matched our solution perfectly!".to_string(),
        std::cmp::Ordering::Greater => format!(
            "Well done! Our solution used {reference} {}, but you used {used}.",
            plural(reference, "word", "words")
        ),
    }
}

const fn plural<'s>(n: usize, one: &'s str, many: &'s str) -> &'s str {
    if n == 1 { one } else { many }
}

/// What the front end needs to draw the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Available letters in display order
    pub letters: Vec<Letter>,
    /// Accepted words in submission order
    pub used_words: Vec<String>,
    /// Text of the pending word
    pub pending: String,
    pub phase: Phase,
    /// Letters not yet committed
    pub remaining: usize,
    /// Letters in the puzzle
    pub total: usize,
    /// Revealed once the puzzle is completed
    pub solution: Option<Vec<String>>,
}

/// Session-level failures
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("\"{0}\" is not available")]
    Vetoed(char),
    #[error("the puzzle is complete; start a new one")]
    Completed,
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Result of a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to submit
    Empty,
    Accepted,
    /// Accepted and the pool is now empty
    Completed,
    Rejected(Rejection),
}

/// One game against one puzzle at a time
pub struct Session<'a, P: Presenter> {
    sources: &'a WordSources,
    config: PuzzleConfig,
    rng: StdRng,
    puzzle: Puzzle,
    ledger: Ledger,
    pending: PendingInput,
    phase: Phase,
    presenter: P,
}

impl<'a, P: Presenter> Session<'a, P> {
    /// Start a session on a freshly generated puzzle
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Generate` if no puzzle can be generated.
    pub fn new(
        sources: &'a WordSources,
        config: PuzzleConfig,
        mut rng: StdRng,
        presenter: P,
    ) -> Result<Self, SessionError> {
        let puzzle = Generator::new(sources.common().words(), config.clone())?.generate(&mut rng)?;
        Ok(Self::with_puzzle(sources, config, rng, puzzle, presenter))
    }

    /// Start a session on a given puzzle
    #[must_use]
    pub fn with_puzzle(
        sources: &'a WordSources,
        config: PuzzleConfig,
        rng: StdRng,
        puzzle: Puzzle,
        presenter: P,
    ) -> Self {
        let mut session = Self {
            sources,
            config,
            rng,
            ledger: Ledger::from_puzzle(&puzzle),
            puzzle,
            pending: PendingInput::new(),
            phase: Phase::Idle,
            presenter,
        };
        session.presenter.notify(&Notice::NewPuzzle {
            letters: session.puzzle.letter_count(),
        });
        session.publish();
        session
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Current pending text
    #[must_use]
    pub fn pending(&self) -> &str {
        self.pending.text()
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Apply a new snapshot of the input field
    ///
    /// Characters removed since the previous snapshot are released and new
    /// ones reserved. If any new character is unavailable the whole event is
    /// undone and the pending text keeps its previous value.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Vetoed` for an unavailable or non-letter
    /// character and `SessionError::Completed` once the puzzle is solved.
    pub fn input(&mut self, text: &str) -> Result<(), SessionError> {
        self.ensure_open()?;

        let change = self.pending.diff_to(text);
        if change.is_empty() {
            return Ok(());
        }

        let mut inserted = Vec::with_capacity(change.inserted.len());
        for &ch in &change.inserted {
            let Some(letter) = Letter::new(ch) else {
                return Err(self.veto(ch));
            };
            inserted.push(letter);
        }
        let removed: Vec<Letter> = change.removed.iter().filter_map(|&c| Letter::new(c)).collect();

        for &letter in &removed {
            self.ledger.release(letter)?;
        }

        for (reserved, &letter) in inserted.iter().enumerate() {
            match self.ledger.reserve(letter) {
                Ok(()) => {}
                Err(LedgerError::Unavailable(_)) => {
                    for &undo in &inserted[..reserved] {
                        self.ledger.release(undo)?;
                    }
                    for &undo in &removed {
                        self.ledger.reserve(undo)?;
                    }
                    return Err(self.veto(letter.as_char()));
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.pending.set(text);
        self.phase = if self.pending.is_empty() {
            Phase::Idle
        } else {
            Phase::Typing
        };
        self.publish();
        Ok(())
    }

    /// Type one character at the end of the pending word
    ///
    /// # Errors
    ///
    /// See [`Session::input`].
    pub fn type_letter(&mut self, ch: char) -> Result<(), SessionError> {
        let next = self.pending.with_pushed(ch);
        self.input(&next)
    }

    /// Delete the last character of the pending word
    ///
    /// # Errors
    ///
    /// See [`Session::input`].
    pub fn backspace(&mut self) -> Result<(), SessionError> {
        let next = self.pending.with_popped();
        self.input(&next)
    }

    /// Submit the pending word
    ///
    /// # Errors
    ///
    /// See [`Session::submit_word`].
    pub fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        let text = self.pending.text().to_string();
        self.submit_word(&text)
    }

    /// Submit `text` as a word
    ///
    /// The word is checked against the dictionary and against every letter
    /// not yet committed. A rejected word returns all reserved letters.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the puzzle is solved and
    /// `SessionError::Ledger` if the ledger detects an accounting defect.
    pub fn submit_word(&mut self, text: &str) -> Result<SubmitOutcome, SessionError> {
        self.ensure_open()?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(SubmitOutcome::Empty);
        }

        let verdict = match Word::new(text) {
            Ok(word) => validator::check(
                &word,
                self.sources.dictionary(),
                &self.ledger.open_letters(),
            )
            .map(|()| word),
            Err(_) => Err(Rejection::NotInDictionary),
        };

        let word = match verdict {
            Ok(word) => word,
            Err(reason) => {
                let shown = text.to_ascii_uppercase();
                log::debug!("rejected {shown}: {reason}");
                self.ledger.release_all_in_flight()?;
                self.pending.clear();
                self.phase = Phase::Idle;
                self.presenter.notify(&Notice::Rejected {
                    word: shown,
                    reason,
                });
                self.publish();
                return Ok(SubmitOutcome::Rejected(reason));
            }
        };

        self.ledger.commit(&word)?;
        self.pending.clear();
        self.presenter
            .notify(&Notice::Accepted(word.text().to_string()));

        let outcome = if self.ledger.is_exhausted() {
            self.phase = Phase::Completed;
            let used = self.ledger.used_words().len();
            let reference = self.puzzle.solution_words().len();
            log::info!("puzzle completed with {used} words (reference {reference})");
            self.presenter.notify(&Notice::Completed {
                used,
                reference,
                solution: self.solution_texts(),
            });
            SubmitOutcome::Completed
        } else {
            self.phase = Phase::Idle;
            SubmitOutcome::Accepted
        };

        self.publish();
        Ok(outcome)
    }

    /// Remove an accepted word and return its letters to the pool
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Ledger(LedgerError::NotFound)` if the word was
    /// never accepted and `SessionError::Completed` once the puzzle is solved.
    pub fn delete(&mut self, text: &str) -> Result<Word, SessionError> {
        self.ensure_open()?;

        match self.ledger.uncommit(text) {
            Ok(word) => {
                self.presenter
                    .notify(&Notice::Removed(word.text().to_string()));
                self.publish();
                Ok(word)
            }
            Err(LedgerError::NotFound(word)) => {
                log::warn!("delete of unknown word {word}");
                self.presenter.notify(&Notice::NotFound(word.clone()));
                Err(LedgerError::NotFound(word).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Abandon the pending word
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the puzzle is solved.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;

        self.ledger.release_all_in_flight()?;
        self.pending.clear();
        self.phase = Phase::Idle;
        self.publish();
        Ok(())
    }

    /// Replace the puzzle with a freshly generated one
    ///
    /// The current game is kept if generation fails.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Generate` if no puzzle can be generated.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        let puzzle = Generator::new(self.sources.common().words(), self.config.clone())?
            .generate(&mut self.rng)?;

        self.ledger = Ledger::from_puzzle(&puzzle);
        self.puzzle = puzzle;
        self.pending.clear();
        self.phase = Phase::Idle;
        self.presenter.notify(&Notice::NewPuzzle {
            letters: self.puzzle.letter_count(),
        });
        self.publish();
        Ok(())
    }

    /// Build the current render snapshot
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut budget = *self.ledger.available();
        let letters = self
            .puzzle
            .display_order()
            .iter()
            .copied()
            .filter(|&l| budget.remove(l))
            .collect();

        Snapshot {
            letters,
            used_words: self
                .ledger
                .used_words()
                .iter()
                .map(|w| w.text().to_string())
                .collect(),
            pending: self.pending.text().to_string(),
            phase: self.phase,
            remaining: self.ledger.open_letters().total(),
            total: self.puzzle.letter_count(),
            solution: (self.phase == Phase::Completed).then(|| self.solution_texts()),
        }
    }

    fn solution_texts(&self) -> Vec<String> {
        self.puzzle
            .solution_words()
            .iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.phase == Phase::Completed {
            return Err(SessionError::Completed);
        }
        Ok(())
    }

    fn veto(&mut self, ch: char) -> SessionError {
        let ch = ch.to_ascii_uppercase();
        log::warn!("keystroke vetoed: {ch:?} unavailable");
        self.presenter.notify(&Notice::LetterUnavailable(ch));
        self.publish();
        SessionError::Vetoed(ch)
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.presenter.render(&snapshot);
    }
}
