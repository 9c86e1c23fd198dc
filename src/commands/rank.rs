//! Ranking command
//!
//! Replays observations made outside the advisor, then ranks the next guess.

use crate::core::{Pattern, Word};
use crate::error::InputError;
use crate::solver::{ProgressObserver, Recommendation, Session};
use anyhow::Result;
use log::warn;

/// Parse an observation of the form `GUESS=FEEDBACK`, e.g. `crane=AACAC`
///
/// # Errors
/// `InvalidObservation` without a `=`, otherwise the error of the word or
/// feedback half.
///
/// # Examples
/// ```
/// use wordle_advisor::commands::parse_observation;
///
/// let (guess, pattern) = parse_observation("crane=GY-G-").unwrap();
/// assert_eq!(guess.to_string(), "crane");
/// assert_eq!(pattern.to_string(), "CPACA");
/// ```
pub fn parse_observation(text: &str) -> Result<(Word, Pattern), InputError> {
    let (word, feedback) = text
        .split_once('=')
        .ok_or_else(|| InputError::InvalidObservation(text.to_string()))?;

    Ok((Word::new(word)?, Pattern::parse(feedback)?))
}

/// Apply `observations` in order, then rank guesses for the resulting pool
///
/// Returns `None` when the observations already end the session; the caller
/// reports the outcome from the session itself.
///
/// # Errors
///
/// Returns an error if the session cannot produce a recommendation.
pub fn run_rank(
    session: &mut Session,
    observations: &[(Word, Pattern)],
    progress: &dyn ProgressObserver,
) -> Result<Option<Recommendation>> {
    for &(guess, pattern) in observations {
        if session.phase().is_terminal() {
            warn!("session is {}, ignoring {guess}={pattern}", session.phase());
            continue;
        }
        session.apply_feedback(guess, pattern)?;
    }

    if session.phase().is_terminal() {
        return Ok(None);
    }

    Ok(Some(session.recommend(progress)?.clone()))
}
