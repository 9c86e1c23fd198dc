//! Wordle word representation
//!
//! A Word stores exactly [`WORD_LEN`] lowercase ASCII letters as bytes.

use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word of a run
pub const WORD_LEN: usize = 5;

/// A validated, case-normalized 5-letter word
///
/// Ordering is lexicographic over the letters, which gives rankings a
/// canonical tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `InputError` if:
    /// - Length is not exactly 5
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.to_string(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, InputError> {
        let text = text.trim();
        let found = text.chars().count();
        if found != WORD_LEN {
            return Err(InputError::InvalidWordLength {
                expected: WORD_LEN,
                found,
            });
        }

        let mut letters = [0u8; WORD_LEN];
        for (position, (slot, character)) in letters.iter_mut().zip(text.chars()).enumerate() {
            if !character.is_ascii_alphabetic() {
                return Err(InputError::InvalidCharacter {
                    character,
                    position,
                });
            }
            *slot = character.to_ascii_lowercase() as u8;
        }

        Ok(Self(letters))
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Per-letter occurrence counts indexed by `letter - b'a'`
    #[inline]
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.0 {
            counts[usize::from(ch - b'a')] += 1;
        }
        counts
    }

    /// Uppercase rendering for display
    #[must_use]
    pub fn to_uppercase(&self) -> String {
        self.to_string().to_ascii_uppercase()
    }
}

impl FromStr for Word {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.0 {
            write!(f, "{}", char::from(ch))?;
        }
        Ok(())
    }
}
