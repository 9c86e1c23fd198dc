//! Entropy-based guess evaluation
//!
//! Computes the expected information gain of each guess and ranks guesses by it.

pub mod calculator;
pub mod ranker;
pub mod table;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, entropy_of_row, shannon_entropy,
};
pub use ranker::{GuessScore, Ranking, rank_guesses, select_best_guess};
pub use table::PatternTable;
