//! Core domain types for Wordle
//!
//! Words and feedback patterns. Everything here is pure and independent of
//! the solver.

mod pattern;
mod word;

pub use pattern::{Feedback, PATTERN_COUNT, Pattern};
pub use word::{WORD_LEN, Word};
