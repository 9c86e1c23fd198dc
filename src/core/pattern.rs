//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LEN, Word};
use crate::error::InputError;
use std::fmt;

/// Number of distinct patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts C/G/🟩 for correct, P/Y/🟨 for present and A/-/_/⬜/⬛ for absent.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'C' | 'c' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            'P' | 'p' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            'A' | 'a' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// The C/P/A letter for this classification
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'A',
            Self::Present => 'P',
            Self::Correct => 'C',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Build a pattern from per-position classifications
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; WORD_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for mark in feedback {
            pattern += mark.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Decode the per-position classifications
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LEN] {
        let mut result = [Feedback::Absent; WORD_LEN];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available letters
    /// 2. Second pass: mark present-but-misplaced letters from what remains
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C R N absent, A E correct
    /// assert_eq!(pattern.to_string(), "AACAC");
    /// assert_eq!(pattern.feedback()[2], Feedback::Correct);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [0u8; WORD_LEN];
        let mut available = answer.letter_counts();
        let guess = guess.chars();
        let answer = answer.chars();

        for (i, digit) in result.iter_mut().enumerate() {
            if guess[i] == answer[i] {
                *digit = 2;
                available[usize::from(guess[i] - b'a')] -= 1;
            }
        }

        for (i, digit) in result.iter_mut().enumerate() {
            if *digit == 0 {
                let count = &mut available[usize::from(guess[i] - b'a')];
                if *count > 0 {
                    *digit = 1;
                    *count -= 1;
                }
            }
        }

        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for &digit in &result {
            pattern += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Self(pattern)
    }

    /// Parse a pattern from a string like "CPAAP", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Whitespace is ignored, so "C P A A P" is accepted as well.
    ///
    /// # Errors
    /// Returns `InputError::InvalidWordLength` when the symbol count is not 5 and
    /// `InputError::InvalidFeedbackSymbol` for anything outside the accepted set.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p1 = Pattern::parse("CPACP").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = Pattern::parse("g y - g y").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    pub fn parse(s: &str) -> Result<Self, InputError> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != WORD_LEN {
            return Err(InputError::InvalidWordLength {
                expected: WORD_LEN,
                found: symbols.len(),
            });
        }

        let mut feedback = [Feedback::Absent; WORD_LEN];
        for (position, (slot, &symbol)) in feedback.iter_mut().zip(&symbols).enumerate() {
            *slot = Feedback::from_symbol(symbol)
                .ok_or(InputError::InvalidFeedbackSymbol { symbol, position })?;
        }

        Ok(Self::from_feedback(feedback))
    }

    /// Convert pattern to emoji string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨" representing the pattern.
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback()
            .iter()
            .map(|f| match f {
                Feedback::Correct => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.feedback() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}
