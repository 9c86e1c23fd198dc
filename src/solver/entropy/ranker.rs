//! Entropy-based guess ranking
//!
//! Scores every allowed guess against the current pool in parallel and orders
//! them by descending entropy. Ties within a tolerance prefer guesses that
//! could themselves be the answer, then fall back to alphabetical order.

use super::calculator::entropy_of_row;
use super::table::PatternTable;
use crate::core::{Pattern, Word};
use crate::solver::{CandidatePool, ProgressObserver};
use log::debug;
use rayon::prelude::*;

/// A guess with its expected information gain against the current pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore {
    pub word: Word,
    /// Entropy in bits
    pub entropy: f64,
    /// Whether the guess is still a possible answer
    pub in_pool: bool,
}

/// Output of one ranking pass
///
/// `table` holds the pattern row of every scored guess so the pool filter can
/// reuse it for whichever guess is actually played this round.
#[derive(Debug, Default)]
pub struct Ranking {
    pub scores: Vec<GuessScore>,
    pub table: PatternTable,
}

impl Ranking {
    #[must_use]
    pub fn best(&self) -> Option<&GuessScore> {
        self.scores.first()
    }
}

/// Rank all guesses by descending entropy against `pool`
///
/// A pool with one word short-circuits to that word with entropy 0; an empty
/// pool yields an empty ranking.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::{CandidatePool, NoProgress, DEFAULT_TIE_TOLERANCE};
/// use wordle_advisor::solver::entropy::rank_guesses;
///
/// let words: Vec<Word> = ["aaaaa", "aeros"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let pool = CandidatePool::new(["slate", "irate", "crate", "grate"].map(|w| Word::new(w).unwrap()));
///
/// let ranking = rank_guesses(&words, &pool, DEFAULT_TIE_TOLERANCE, &NoProgress);
/// assert_eq!(ranking.best().unwrap().word.to_string(), "aeros");
/// ```
#[must_use]
pub fn rank_guesses(
    guesses: &[Word],
    pool: &CandidatePool,
    tolerance: f64,
    progress: &dyn ProgressObserver,
) -> Ranking {
    if let Some(&only) = pool.single() {
        return Ranking {
            scores: vec![GuessScore {
                word: only,
                entropy: 0.0,
                in_pool: true,
            }],
            table: PatternTable::new(),
        };
    }

    if pool.is_empty() {
        return Ranking::default();
    }

    progress.start(guesses.len());

    let scored: Vec<(GuessScore, Box<[Pattern]>)> = guesses
        .par_iter()
        .map(|&word| {
            let row = PatternTable::compute_row(&word, pool);
            let score = GuessScore {
                word,
                entropy: entropy_of_row(&row),
                in_pool: pool.contains(&word),
            };
            progress.advance(1);
            (score, row)
        })
        .collect();

    progress.finish();

    let (scores, rows): (Vec<GuessScore>, Vec<Box<[Pattern]>>) = scored.into_iter().unzip();
    let table = scores.iter().map(|s| s.word).zip(rows).collect();
    let scores = order_scores(scores, tolerance);

    if let Some(best) = scores.first() {
        debug!(
            "ranked {} guesses against {} candidates, best {} ({:.3} bits)",
            scores.len(),
            pool.len(),
            best.word,
            best.entropy
        );
    }

    Ranking { scores, table }
}

/// Select the single best guess, or `None` if there is nothing to rank
#[must_use]
pub fn select_best_guess(
    guesses: &[Word],
    pool: &CandidatePool,
    tolerance: f64,
) -> Option<GuessScore> {
    rank_guesses(guesses, pool, tolerance, &crate::solver::NoProgress)
        .best()
        .copied()
}

/// Sort descending by entropy, then reorder each tolerance band
///
/// A band starts at the highest remaining entropy and takes every following
/// score within `tolerance` of it. Inside a band pool members come first,
/// then words in alphabetical order.
fn order_scores(mut scores: Vec<GuessScore>, tolerance: f64) -> Vec<GuessScore> {
    scores.sort_by(|a, b| {
        b.entropy
            .total_cmp(&a.entropy)
            .then_with(|| a.word.cmp(&b.word))
    });

    let mut start = 0;
    while start < scores.len() {
        let leader = scores[start].entropy;
        let end = scores[start..]
            .iter()
            .position(|s| leader - s.entropy > tolerance)
            .map_or(scores.len(), |offset| start + offset);

        scores[start..end].sort_by(|a, b| {
            b.in_pool
                .cmp(&a.in_pool)
                .then_with(|| a.word.cmp(&b.word))
        });
        start = end;
    }

    scores
}
