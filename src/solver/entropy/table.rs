//! Pattern rows cached for a single ranking pass
//!
//! Each row holds `Pattern::calculate(guess, answer)` for every answer of the
//! pool the row was computed against, in pool order. A table is only valid
//! for that pool and is discarded as soon as the pool is replaced.

use crate::core::{Pattern, Word};
use crate::solver::CandidatePool;
use rustc_hash::FxHashMap;

/// Feedback patterns per guess against one specific pool
#[derive(Debug, Default)]
pub struct PatternTable {
    rows: FxHashMap<Word, Box<[Pattern]>>,
}

impl PatternTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the row for `guess` against every member of `pool`
    #[must_use]
    pub fn compute_row(guess: &Word, pool: &CandidatePool) -> Box<[Pattern]> {
        pool.iter()
            .map(|answer| Pattern::calculate(guess, answer))
            .collect()
    }

    pub fn insert(&mut self, guess: Word, row: Box<[Pattern]>) {
        self.rows.insert(guess, row);
    }

    #[must_use]
    pub fn row(&self, guess: &Word) -> Option<&[Pattern]> {
        self.rows.get(guess).map(|row| &**row)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<(Word, Box<[Pattern]>)> for PatternTable {
    fn from_iter<I: IntoIterator<Item = (Word, Box<[Pattern]>)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
