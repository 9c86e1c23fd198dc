//! Pool filtering: keep the answers consistent with an observation

use super::CandidatePool;
use crate::core::{Pattern, Word};

/// Keep every candidate `s` with `Pattern::calculate(guess, s) == observed`
///
/// An empty result is a legitimate outcome: the feedback contradicts every
/// remaining word.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Pattern, Word};
/// use wordle_advisor::solver::{CandidatePool, filter_pool};
///
/// let pool = CandidatePool::new(["crane", "trace", "slate"].map(|w| Word::new(w).unwrap()));
/// let guess = Word::new("crane").unwrap();
///
/// let next = filter_pool(&pool, &guess, Pattern::parse("AACAC").unwrap());
/// assert_eq!(next.single().unwrap().to_string(), "slate");
/// ```
#[must_use]
pub fn filter_pool(pool: &CandidatePool, guess: &Word, observed: Pattern) -> CandidatePool {
    CandidatePool::from_sorted(
        pool.iter()
            .filter(|&candidate| Pattern::calculate(guess, candidate) == observed)
            .copied()
            .collect(),
    )
}

/// Filter using a precomputed pattern row aligned with `pool`
///
/// # Panics
/// Panics in debug mode if the row length differs from the pool size
#[must_use]
pub fn filter_with_row(pool: &CandidatePool, row: &[Pattern], observed: Pattern) -> CandidatePool {
    debug_assert_eq!(row.len(), pool.len(), "row computed against another pool");

    CandidatePool::from_sorted(
        pool.iter()
            .zip(row)
            .filter(|&(_, &pattern)| pattern == observed)
            .map(|(&candidate, _)| candidate)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PatternTable;

    fn pool(words: &[&str]) -> CandidatePool {
        CandidatePool::new(words.iter().map(|w| Word::new(w).unwrap()))
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    const ANSWERS: &[&str] = &[
        "crane", "trace", "slate", "crate", "grate", "irate", "raise", "could", "plate", "ultra",
    ];

    #[test]
    fn true_solution_always_survives() {
        let candidates = pool(ANSWERS);
        for guess in ["crane", "aaaaa", "slate", "zesty", "rupee"] {
            let guess = word(guess);
            for solution in &candidates {
                let observed = Pattern::calculate(&guess, solution);
                let next = filter_pool(&candidates, &guess, observed);
                assert!(next.contains(solution), "{guess} / {solution}");
                assert!(next.len() <= candidates.len());
            }
        }
    }

    #[test]
    fn result_is_subset_of_pool() {
        let candidates = pool(ANSWERS);
        let guess = word("crane");
        let next = filter_pool(&candidates, &guess, Pattern::parse("PCCAC").unwrap());
        assert!(next.iter().all(|w| candidates.contains(w)));
        assert!(next.contains(&word("trace")));
    }

    #[test]
    fn inconsistent_feedback_empties_pool() {
        let candidates = pool(ANSWERS);
        let next = filter_pool(&candidates, &word("zzzzz"), Pattern::PERFECT);
        assert!(next.is_empty());
    }

    #[test]
    fn row_filter_agrees_with_direct_filter() {
        let candidates = pool(ANSWERS);
        let guess = word("slate");
        let row = PatternTable::compute_row(&guess, &candidates);

        for solution in &candidates {
            let observed = Pattern::calculate(&guess, solution);
            assert_eq!(
                filter_with_row(&candidates, &row, observed),
                filter_pool(&candidates, &guess, observed)
            );
        }
    }
}
