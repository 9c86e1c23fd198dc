//! Error types
//!
//! Boundary validation failures are [`InputError`]s. They reject a single
//! offending input and never touch solver state. [`SessionError`] covers the
//! conditions under which a session cannot be built or advanced.

use crate::solver::Phase;
use thiserror::Error;

/// A word or feedback string rejected at the input boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected exactly {expected} letters, got {found}")]
    InvalidWordLength { expected: usize, found: usize },

    #[error("'{character}' at position {position} is not a letter a-z")]
    InvalidCharacter { character: char, position: usize },

    #[error("'{symbol}' at position {position} is not a feedback symbol (use C/P/A or G/Y/-)")]
    InvalidFeedbackSymbol { symbol: char, position: usize },

    #[error("expected GUESS=FEEDBACK, got '{0}'")]
    InvalidObservation(String),
}

/// Failure to construct or advance a solving session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("the allowed-guess list is empty, nothing can be recommended")]
    DegenerateGuessSet,

    #[error("the answer list is empty")]
    EmptyAnswerSet,

    #[error("the session is already {0}, reset it to play again")]
    Finished(Phase),

    #[error(transparent)]
    Input(#[from] InputError),
}
