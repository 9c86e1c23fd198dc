//! Word solving command
//!
//! Plays a session against a known target and records every round.

use crate::core::{Pattern, Word};
use crate::error::SessionError;
use crate::solver::{Phase, ProgressObserver, Session};
use anyhow::{Result, anyhow};
use log::warn;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Stop a simulation that stops making progress
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 12,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
}

/// Solve a specific word, starting the session over from the full answer list
///
/// Once the pool is down to one word that word is played as the final guess.
///
/// # Errors
///
/// Returns an error if the target word is invalid or the session cannot
/// produce a guess.
pub fn solve_word(
    config: &SolveConfig,
    session: &mut Session,
    progress: &dyn ProgressObserver,
) -> Result<SolveResult> {
    let target = Word::new(&config.target)?;
    if !session.answers().contains(&target) {
        warn!("{target} is not in the answer list, the session will likely be exhausted");
    }

    session.reset();
    let mut guesses: Vec<GuessStep> = Vec::new();

    while guesses.len() < config.max_guesses {
        let candidates_before = session.pool().len();

        let best = match session.recommend(progress) {
            Ok(recommendation) => *recommendation
                .best()
                .ok_or_else(|| anyhow!("no guess available"))?,
            Err(SessionError::Finished(Phase::Solved)) => {
                let Some(&answer) = session.solution() else {
                    break;
                };
                let pattern = Pattern::calculate(&answer, &target);
                guesses.push(GuessStep {
                    word: answer,
                    pattern,
                    candidates_before,
                    candidates_after: candidates_before,
                    entropy: 0.0,
                });
                break;
            }
            Err(SessionError::Finished(_)) => break,
            Err(err) => return Err(err.into()),
        };

        let pattern = Pattern::calculate(&best.word, &target);
        session.apply_feedback(best.word, pattern)?;

        guesses.push(GuessStep {
            word: best.word,
            pattern,
            candidates_before,
            candidates_after: session.pool().len(),
            entropy: best.entropy,
        });

        if pattern.is_perfect() {
            break;
        }
    }

    let success = guesses.last().is_some_and(|step| step.pattern.is_perfect());

    Ok(SolveResult {
        success,
        guesses,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{NoProgress, SolverConfig};
    use crate::wordlists::words_from_lines;

    const ANSWERS: &[&str] = &[
        "crane", "trace", "slate", "crate", "grate", "irate", "plate", "state", "skate", "spate",
        "least", "steal", "tales", "stale", "slant", "plant", "giant", "chant", "shard", "ultra",
    ];

    fn session() -> Session {
        let answers = words_from_lines(ANSWERS.iter().copied());
        Session::new(answers.clone(), answers, SolverConfig::default()).unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let mut session = session();
        let config = SolveConfig::new("skate".to_string());

        let result = solve_word(&config, &mut session, &NoProgress).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().word.to_string(), "skate");
    }

    #[test]
    fn solve_every_answer() {
        let mut session = session();
        for &target in ANSWERS {
            let config = SolveConfig::new(target.to_string());
            let result = solve_word(&config, &mut session, &NoProgress).unwrap();
            assert!(result.success, "{target}");
        }
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let mut session = session();
        let config = SolveConfig::new("chant".to_string());

        let result = solve_word(&config, &mut session, &NoProgress).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let mut session = session();
        let config = SolveConfig::new("zz".to_string());

        assert!(solve_word(&config, &mut session, &NoProgress).is_err());
    }

    #[test]
    fn solve_unknown_target_fails_cleanly() {
        let mut session = session();
        let config = SolveConfig::new("zzzzz".to_string());

        let result = solve_word(&config, &mut session, &NoProgress).unwrap();

        assert!(!result.success);
        assert_eq!(session.phase(), Phase::Exhausted);
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let mut session = session();
        let mut config = SolveConfig::new("spate".to_string());
        config.max_guesses = 1;

        let result = solve_word(&config, &mut session, &NoProgress).unwrap();

        assert_eq!(result.guesses.len(), 1);
    }
}
