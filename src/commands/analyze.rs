//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::core::Word;
use crate::solver::entropy::{GuessMetrics, calculate_metrics, rank_guesses};
use crate::solver::{CandidatePool, ProgressObserver};
use anyhow::{Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// Whether the word is itself in the candidate pool
    pub possible_answer: bool,
    /// 1-based position in the full ranking of allowed guesses
    pub rank: Option<usize>,
    pub total_guesses: usize,
}

/// Analyze the entropy of a word against a candidate pool
///
/// The word is also placed in the ranking of every allowed guess, so this
/// runs a full scan.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in the allowed guess list
pub fn analyze_word(
    word: &str,
    allowed: &[Word],
    pool: &CandidatePool,
    tolerance: f64,
    progress: &dyn ProgressObserver,
) -> Result<AnalysisResult> {
    let word = Word::new(word)?;

    if !allowed.contains(&word) {
        bail!("word '{word}' is not in the allowed guess list");
    }

    let ranking = rank_guesses(allowed, pool, tolerance, progress);
    let rank = ranking
        .scores
        .iter()
        .position(|score| score.word == word)
        .map(|index| index + 1);

    Ok(AnalysisResult {
        word,
        metrics: calculate_metrics(&word, pool),
        total_candidates: pool.len(),
        possible_answer: pool.contains(&word),
        rank,
        total_guesses: allowed.len(),
    })
}
