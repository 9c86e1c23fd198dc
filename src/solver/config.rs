//! Solver configuration

use crate::core::Word;

/// Entropies closer than this (in bits) are treated as equal when ranking
pub const DEFAULT_TIE_TOLERANCE: f64 = 1e-9;

/// Knobs for a solving session
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Fixed first guess; skips the round-0 scan entirely
    pub opening_guess: Option<Word>,
    /// Tolerance for entropy ties, absorbs floating-point summation noise
    pub tie_tolerance: f64,
    /// Only the first N allowed guesses (in load order) are scanned
    pub scan_limit: Option<usize>,
}

impl SolverConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            opening_guess: None,
            tie_tolerance: DEFAULT_TIE_TOLERANCE,
            scan_limit: None,
        }
    }

    #[must_use]
    pub const fn with_opening_guess(mut self, guess: Word) -> Self {
        self.opening_guess = Some(guess);
        self
    }

    #[must_use]
    pub const fn with_scan_limit(mut self, limit: usize) -> Self {
        self.scan_limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn with_tie_tolerance(mut self, tolerance: f64) -> Self {
        self.tie_tolerance = tolerance;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
