//! Wordle Advisor
//!
//! Recommends guesses for Wordle-style puzzles by ranking every allowed guess
//! on the Shannon entropy of the feedback it would produce over the answers
//! that are still possible, then narrowing that pool with the observed feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Pattern, Word};
//! use wordle_advisor::solver::{NoProgress, Phase, Session, SolverConfig};
//!
//! let words: Vec<Word> = ["crane", "trace", "slate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let mut session = Session::new(words.clone(), words, SolverConfig::default()).unwrap();
//!
//! let guess = session.recommend(&NoProgress).unwrap().best().unwrap().word;
//! assert_eq!(guess.to_string(), "crane");
//!
//! let phase = session.apply_feedback(guess, Pattern::parse("AACAC").unwrap()).unwrap();
//! assert_eq!(phase, Phase::Solved);
//! assert_eq!(session.solution().unwrap().to_string(), "slate");
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Entropy ranking, filtering and session state
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
