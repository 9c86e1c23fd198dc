//! Solving session: owns the candidate pool across rounds
//!
//! ```text
//! Initialized ──recommend──▶ AwaitingFeedback ──apply_feedback──▶ Narrowed ─┐
//!                                  ▲                                 │      │
//!                                  └────────────recommend────────────┘      │
//!                                            apply_feedback ──▶ Solved | Exhausted
//! ```

use super::entropy::{GuessScore, PatternTable, entropy_of_row, rank_guesses};
use super::{CandidatePool, ProgressObserver, SolverConfig, filter_pool, filter_with_row};
use crate::core::{Pattern, Word};
use crate::error::SessionError;
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::fmt;

/// Where a session is in its round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Full answer pool, nothing recommended yet
    Initialized,
    /// A recommendation was issued for the current pool
    AwaitingFeedback,
    /// Feedback applied, more than one candidate remains
    Narrowed,
    /// Exactly one candidate remains
    Solved,
    /// No candidate is consistent with the feedback
    Exhausted,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initialized => "initialized",
            Self::AwaitingFeedback => "awaiting feedback",
            Self::Narrowed => "narrowed",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// Ranked guesses for one round
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// Rounds completed before this recommendation
    pub round: usize,
    pub pool_size: usize,
    /// Full ranking, best first
    pub ranking: Vec<GuessScore>,
    /// True when the configured opening guess was used instead of a scan
    pub forced_opening: bool,
}

impl Recommendation {
    #[must_use]
    pub fn best(&self) -> Option<&GuessScore> {
        self.ranking.first()
    }
}

/// State of one solving session
///
/// Each round is one [`Session::recommend`] followed by one
/// [`Session::apply_feedback`]. The pool only ever shrinks; [`Session::reset`]
/// starts over from the full answer list.
#[derive(Debug)]
pub struct Session {
    answers: CandidatePool,
    allowed: Vec<Word>,
    config: SolverConfig,
    pool: CandidatePool,
    round: usize,
    phase: Phase,
    history: Vec<(Word, Pattern)>,
    recommendation: Option<Recommendation>,
    table: PatternTable,
}

impl Session {
    /// Start a session over the given answer and guess universes
    ///
    /// Duplicate allowed guesses are dropped, keeping load order.
    ///
    /// # Errors
    /// `DegenerateGuessSet` when `allowed` is empty or the scan limit leaves
    /// nothing to scan, `EmptyAnswerSet` when `answers` is empty.
    pub fn new(
        answers: Vec<Word>,
        allowed: Vec<Word>,
        config: SolverConfig,
    ) -> Result<Self, SessionError> {
        if allowed.is_empty() || config.scan_limit == Some(0) {
            return Err(SessionError::DegenerateGuessSet);
        }
        if answers.is_empty() {
            return Err(SessionError::EmptyAnswerSet);
        }

        let mut seen = FxHashSet::default();
        let allowed: Vec<Word> = allowed.into_iter().filter(|w| seen.insert(*w)).collect();
        let answers = CandidatePool::new(answers);

        info!(
            "session ready: {} answers, {} allowed guesses",
            answers.len(),
            allowed.len()
        );

        Ok(Self {
            pool: answers.clone(),
            answers,
            allowed,
            config,
            round: 0,
            phase: Phase::Initialized,
            history: Vec::new(),
            recommendation: None,
            table: PatternTable::new(),
        })
    }

    /// Rank guesses for the current pool
    ///
    /// Calling this again before feedback returns the same recommendation
    /// without rescanning.
    ///
    /// # Errors
    /// `Finished` once the session is solved or exhausted.
    pub fn recommend(
        &mut self,
        progress: &dyn ProgressObserver,
    ) -> Result<&Recommendation, SessionError> {
        if self.phase.is_terminal() {
            return Err(SessionError::Finished(self.phase));
        }

        if self.recommendation.is_none() {
            let recommendation = self.build_recommendation(progress);
            self.recommendation = Some(recommendation);
        }
        self.phase = Phase::AwaitingFeedback;

        self.recommendation
            .as_ref()
            .ok_or(SessionError::Finished(self.phase))
    }

    fn build_recommendation(&mut self, progress: &dyn ProgressObserver) -> Recommendation {
        // a single remaining word is always the forced guess
        let opening = self
            .config
            .opening_guess
            .filter(|_| self.round == 0 && self.pool.len() > 1);

        let (ranking, forced_opening) = if let Some(word) = opening {
            let row = PatternTable::compute_row(&word, &self.pool);
            let score = GuessScore {
                word,
                entropy: entropy_of_row(&row),
                in_pool: self.pool.contains(&word),
            };
            self.table.insert(word, row);
            (vec![score], true)
        } else {
            let limit = self.config.scan_limit.unwrap_or(self.allowed.len());
            let scan = &self.allowed[..limit.min(self.allowed.len())];
            let ranking = rank_guesses(scan, &self.pool, self.config.tie_tolerance, progress);
            self.table = ranking.table;
            (ranking.scores, false)
        };

        Recommendation {
            round: self.round,
            pool_size: self.pool.len(),
            ranking,
            forced_opening,
        }
    }

    /// Apply the feedback observed for `guess` and move to the next pool
    ///
    /// The guess need not be the recommended one. Returns the new phase.
    ///
    /// # Errors
    /// `Finished` once the session is solved or exhausted.
    pub fn apply_feedback(
        &mut self,
        guess: Word,
        observed: Pattern,
    ) -> Result<Phase, SessionError> {
        if self.phase.is_terminal() {
            return Err(SessionError::Finished(self.phase));
        }

        let next = match self.table.row(&guess) {
            Some(row) => filter_with_row(&self.pool, row, observed),
            None => filter_pool(&self.pool, &guess, observed),
        };

        info!(
            "round {}: {guess} {observed} narrowed {} -> {} candidates",
            self.round + 1,
            self.pool.len(),
            next.len()
        );

        self.pool = next;
        self.round += 1;
        self.history.push((guess, observed));
        self.recommendation = None;
        self.table = PatternTable::new();

        self.phase = match self.pool.len() {
            0 => {
                warn!("no remaining candidates, feedback is inconsistent with the answer list");
                Phase::Exhausted
            }
            1 => Phase::Solved,
            _ => Phase::Narrowed,
        };

        Ok(self.phase)
    }

    /// Parse feedback text and apply it
    ///
    /// # Errors
    /// `Input` for malformed feedback (the session is left untouched), or
    /// `Finished` once the session is over.
    pub fn apply_feedback_str(
        &mut self,
        guess: Word,
        feedback: &str,
    ) -> Result<Phase, SessionError> {
        let observed = Pattern::parse(feedback)?;
        self.apply_feedback(guess, observed)
    }

    /// Discard all observations and start again from the full answer list
    pub fn reset(&mut self) {
        self.pool = self.answers.clone();
        self.round = 0;
        self.phase = Phase::Initialized;
        self.history.clear();
        self.recommendation = None;
        self.table = PatternTable::new();
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of feedback observations applied
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    #[must_use]
    pub const fn answers(&self) -> &CandidatePool {
        &self.answers
    }

    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    #[must_use]
    pub const fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The answer, once the session is solved
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        match self.phase {
            Phase::Solved => self.pool.single(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::solver::NoProgress;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn small_session() -> Session {
        let answers = words(&["crane", "trace", "slate"]);
        Session::new(answers.clone(), answers, SolverConfig::default()).unwrap()
    }

    #[test]
    fn new_session_is_initialized() {
        let session = small_session();
        assert_eq!(session.phase(), Phase::Initialized);
        assert_eq!(session.round(), 0);
        assert_eq!(session.pool().len(), 3);
        assert!(session.recommendation().is_none());
    }

    #[test]
    fn empty_guess_set_is_rejected() {
        let result = Session::new(words(&["crane"]), Vec::new(), SolverConfig::default());
        assert!(matches!(result, Err(SessionError::DegenerateGuessSet)));
    }

    #[test]
    fn empty_answer_set_is_rejected() {
        let result = Session::new(Vec::new(), words(&["crane"]), SolverConfig::default());
        assert!(matches!(result, Err(SessionError::EmptyAnswerSet)));
    }

    #[test]
    fn zero_scan_limit_is_a_degenerate_guess_set() {
        let answers = words(&["crane", "slate"]);
        let config = SolverConfig::default().with_scan_limit(0);
        let result = Session::new(answers.clone(), answers, config);
        assert!(matches!(result, Err(SessionError::DegenerateGuessSet)));
    }

    #[test]
    fn duplicate_guesses_are_dropped() {
        let session = Session::new(
            words(&["crane"]),
            words(&["slate", "crane", "slate"]),
            SolverConfig::default(),
        )
        .unwrap();
        assert_eq!(session.allowed(), words(&["slate", "crane"]).as_slice());
    }

    #[test]
    fn crane_against_slate_solves_in_one_round() {
        let mut session = small_session();

        let recommendation = session.recommend(&NoProgress).unwrap();
        assert_eq!(recommendation.pool_size, 3);
        assert_eq!(recommendation.ranking.len(), 3);
        let best = recommendation.best().unwrap();
        assert_eq!(best.word, word("crane"));
        assert!((best.entropy - 3f64.log2()).abs() < 1e-12);
        assert_eq!(session.phase(), Phase::AwaitingFeedback);

        let observed = Pattern::calculate(&word("crane"), &word("slate"));
        assert_eq!(observed.to_string(), "AACAC");
        assert_ne!(observed, Pattern::calculate(&word("crane"), &word("trace")));
        assert_ne!(observed, Pattern::calculate(&word("crane"), &word("crane")));

        let phase = session.apply_feedback(word("crane"), observed).unwrap();

        assert_eq!(phase, Phase::Solved);
        assert_eq!(session.round(), 1);
        assert_eq!(session.solution(), Some(&word("slate")));
        assert_eq!(session.history(), &[(word("crane"), observed)]);
    }

    #[test]
    fn terminal_sessions_refuse_to_continue() {
        let mut session = small_session();
        session.apply_feedback_str(word("crane"), "AACAC").unwrap();

        assert!(matches!(
            session.recommend(&NoProgress),
            Err(SessionError::Finished(Phase::Solved))
        ));
        assert!(matches!(
            session.apply_feedback(word("slate"), Pattern::PERFECT),
            Err(SessionError::Finished(Phase::Solved))
        ));
    }

    #[test]
    fn inconsistent_feedback_exhausts_and_reset_recovers() {
        let mut session = small_session();

        let phase = session.apply_feedback(word("zzzzz"), Pattern::PERFECT).unwrap();
        assert_eq!(phase, Phase::Exhausted);
        assert!(session.pool().is_empty());
        assert!(session.solution().is_none());

        session.reset();
        assert_eq!(session.phase(), Phase::Initialized);
        assert_eq!(session.pool().len(), 3);
        assert!(session.history().is_empty());
        assert!(session.recommend(&NoProgress).is_ok());
    }

    #[test]
    fn malformed_feedback_leaves_pool_untouched() {
        let mut session = small_session();
        session.recommend(&NoProgress).unwrap();

        let result = session.apply_feedback_str(word("crane"), "AAXAC");
        assert!(matches!(
            result,
            Err(SessionError::Input(InputError::InvalidFeedbackSymbol { symbol: 'X', .. }))
        ));
        let result = session.apply_feedback_str(word("crane"), "AAC");
        assert!(matches!(
            result,
            Err(SessionError::Input(InputError::InvalidWordLength { .. }))
        ));

        assert_eq!(session.pool().len(), 3);
        assert_eq!(session.round(), 0);
        assert_eq!(session.phase(), Phase::AwaitingFeedback);
    }

    #[test]
    fn pool_shrinks_monotonically_across_rounds() {
        let answers = words(&[
            "crane", "trace", "slate", "crate", "grate", "irate", "plate", "state", "skate",
        ]);
        let mut session =
            Session::new(answers.clone(), answers, SolverConfig::default()).unwrap();
        let solution = word("skate");

        let mut previous: Vec<Word> = session.pool().words().to_vec();
        while !session.phase().is_terminal() {
            let guess = session.recommend(&NoProgress).unwrap().best().unwrap().word;
            let observed = Pattern::calculate(&guess, &solution);
            session.apply_feedback(guess, observed).unwrap();

            assert!(session.pool().iter().all(|w| previous.contains(w)));
            assert!(session.pool().contains(&solution));
            previous = session.pool().words().to_vec();
            assert!(session.round() < 10, "no progress");
        }

        assert_eq!(session.solution(), Some(&solution));
    }

    #[test]
    fn recommend_is_idempotent_until_feedback() {
        let mut session = small_session();
        let first = session.recommend(&NoProgress).unwrap().ranking.clone();
        let second = session.recommend(&NoProgress).unwrap().ranking.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn opening_guess_skips_scan_on_first_round_only() {
        let answers = words(&["crane", "trace", "slate", "crate", "grate"]);
        let config = SolverConfig::default().with_opening_guess(word("zesty"));
        let mut session = Session::new(answers.clone(), answers, config).unwrap();

        let recommendation = session.recommend(&NoProgress).unwrap();
        assert!(recommendation.forced_opening);
        assert_eq!(recommendation.ranking.len(), 1);
        assert_eq!(recommendation.best().unwrap().word, word("zesty"));
        assert!(!recommendation.best().unwrap().in_pool);

        let observed = Pattern::calculate(&word("zesty"), &word("grate"));
        session.apply_feedback(word("zesty"), observed).unwrap();

        if !session.phase().is_terminal() {
            let recommendation = session.recommend(&NoProgress).unwrap();
            assert!(!recommendation.forced_opening);
            assert!(recommendation.ranking.len() > 1);
        }
    }

    #[test]
    fn single_candidate_overrides_opening_guess() {
        let config = SolverConfig::default().with_opening_guess(word("zzzzz"));
        let mut session =
            Session::new(words(&["slate"]), words(&["slate", "zzzzz"]), config).unwrap();

        let recommendation = session.recommend(&NoProgress).unwrap();

        assert!(!recommendation.forced_opening);
        assert_eq!(recommendation.ranking.len(), 1);
        let best = recommendation.best().unwrap();
        assert_eq!(best.word, word("slate"));
        assert!(best.entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn consecutive_feedback_filters_against_the_current_pool() {
        let answers = words(&[
            "crane", "trace", "slate", "crate", "grate", "irate", "plate", "state", "skate",
        ]);
        let mut session =
            Session::new(answers.clone(), answers.clone(), SolverConfig::default()).unwrap();
        let solution = word("skate");
        session.recommend(&NoProgress).unwrap();

        let (first, second) = (word("crane"), word("slate"));
        let first_observed = Pattern::calculate(&first, &solution);
        let second_observed = Pattern::calculate(&second, &solution);
        session.apply_feedback(first, first_observed).unwrap();
        session.apply_feedback(second, second_observed).unwrap();

        let expected = filter_pool(
            &filter_pool(&CandidatePool::new(answers), &first, first_observed),
            &second,
            second_observed,
        );
        assert_eq!(session.pool(), &expected);
        assert!(session.pool().contains(&solution));
        assert_eq!(session.round(), 2);
    }

    #[test]
    fn scan_limit_restricts_guesses() {
        let answers = words(&["crane", "trace", "slate", "crate"]);
        let config = SolverConfig::default().with_scan_limit(2);
        let mut session = Session::new(answers.clone(), answers, config).unwrap();

        let recommendation = session.recommend(&NoProgress).unwrap();
        let mut ranked: Vec<Word> = recommendation.ranking.iter().map(|s| s.word).collect();
        ranked.sort();
        assert_eq!(ranked, words(&["crane", "trace"]));
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::AwaitingFeedback.to_string(), "awaiting feedback");
        assert!(Phase::Exhausted.is_terminal());
        assert!(!Phase::Narrowed.is_terminal());
    }
}
