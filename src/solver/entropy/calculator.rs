//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and the candidate pool, computes the expected information gain.

use crate::core::{PATTERN_COUNT, Pattern, Word};
use crate::solver::CandidatePool;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against the pool
///
/// Returns the expected information gain in bits. Pools of size 0 or 1
/// carry no information and yield 0.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::CandidatePool;
/// use wordle_advisor::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let pool = CandidatePool::new(["slate", "irate"].map(|w| Word::new(w).unwrap()));
///
/// let entropy = calculate_entropy(&guess, &pool);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, pool: &CandidatePool) -> f64 {
    if pool.len() <= 1 {
        return 0.0;
    }

    let pattern_counts =
        group_by_pattern(pool.iter().map(|answer| Pattern::calculate(guess, answer)));
    shannon_entropy(&pattern_counts)
}

/// Entropy of a precomputed row of patterns (one per pool member)
#[must_use]
pub fn entropy_of_row(row: &[Pattern]) -> f64 {
    if row.len() <= 1 {
        return 0.0;
    }

    shannon_entropy(&group_by_pattern(row.iter().copied()))
}

/// Tally how often each pattern occurs
fn group_by_pattern(
    patterns: impl ExactSizeIterator<Item = Pattern>,
) -> FxHashMap<Pattern, usize> {
    let mut counts =
        FxHashMap::with_capacity_and_hasher(patterns.len().min(PATTERN_COUNT), Default::default());

    for pattern in patterns {
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p), evaluated as Σ p * log₂(n / count) so a certain
/// outcome gives exactly +0.0.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_advisor::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
/// use wordle_advisor::core::Pattern;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::new(0), 25);
/// uniform.insert(Pattern::new(1), 25);
/// uniform.insert(Pattern::new(2), 25);
/// uniform.insert(Pattern::new(3), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let count = count as f64;
            (count / total) * (total / count).log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, pool: &CandidatePool) -> GuessMetrics {
    if pool.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let pattern_counts =
        group_by_pattern(pool.iter().map(|answer| Pattern::calculate(guess, answer)));
    let total = pool.len() as f64;

    let entropy = if pool.len() == 1 {
        0.0
    } else {
        shannon_entropy(&pattern_counts)
    };

    // Σ p × size, where p = size / total
    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&size| {
            let size = size as f64;
            size * size / total
        })
        .sum();

    let max_partition = pattern_counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}
