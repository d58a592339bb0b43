//! Scrambled
//!
//! A word-construction puzzle: a pool of letters is built from a few hidden
//! words, and the player spells dictionary words until every letter is used.
//!
//! # Quick Start
//!
//! ```rust
//! use scrambled::core::{Letter, Word};
//! use scrambled::game::Ledger;
//! use scrambled::puzzle::Puzzle;
//!
//! let words = vec![Word::new("cat").unwrap(), Word::new("dog").unwrap()];
//! let puzzle = Puzzle::from_solution(words).unwrap();
//! let mut ledger = Ledger::from_puzzle(&puzzle);
//!
//! // Typing reserves letters; submitting commits them
//! for ch in "CAT".chars() {
//!     ledger.reserve(Letter::new(ch).unwrap()).unwrap();
//! }
//! ledger.commit(&Word::new("cat").unwrap()).unwrap();
//! assert_eq!(ledger.available().to_string(), "DGO");
//! ```

// Core domain types
pub mod core;

// Puzzle generation
pub mod puzzle;

// Letter accounting and session control
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
