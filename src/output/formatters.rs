//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Render a guess with each letter colored by its feedback
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.to_uppercase()
        .chars()
        .zip(pattern.feedback())
        .map(|(letter, mark)| {
            let tile = format!(" {letter} ");
            let tile: ColoredString = match mark {
                Feedback::Correct => tile.black().on_green(),
                Feedback::Present => tile.black().on_yellow(),
                Feedback::Absent => tile.white().on_bright_black(),
            };
            tile.to_string()
        })
        .collect()
}

/// Numbered, colored lines for a guess history
#[must_use]
pub fn history_lines(history: &[(Word, Pattern)]) -> Vec<String> {
    history
        .iter()
        .enumerate()
        .map(|(i, (word, pattern))| {
            format!(
                "{}. {} {}",
                (i + 1).to_string().bright_black(),
                colored_guess(word, *pattern),
                pattern.to_emoji()
            )
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the pool's maximum, log2(pool size)
#[must_use]
pub fn entropy_bar(entropy: f64, pool_size: usize, width: usize) -> String {
    let max_entropy = (pool_size.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Join words for display, uppercased
#[must_use]
pub fn word_list<'a>(words: impl IntoIterator<Item = &'a Word>) -> String {
    words
        .into_iter()
        .map(Word::to_uppercase)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn entropy_bar_scales_to_pool() {
        // 3 candidates: log2(3) is the maximum
        assert_eq!(entropy_bar(3f64.log2(), 3, 4), "████");
        assert_eq!(entropy_bar(0.0, 1, 4), "░░░░");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let rendered = colored_guess(&word, Pattern::PERFECT);
        assert_eq!(rendered, " C  R  A  N  E ");
    }

    #[test]
    fn history_lines_are_numbered() {
        colored::control::set_override(false);
        let history = [
            (Word::new("crane").unwrap(), Pattern::parse("AACAC").unwrap()),
            (Word::new("slate").unwrap(), Pattern::PERFECT),
        ];

        let lines = history_lines(&history);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. "));
        assert!(lines[1].starts_with("2. "));
        assert!(lines[1].ends_with("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn word_list_joins_uppercase() {
        let words = [Word::new("crane").unwrap(), Word::new("slate").unwrap()];
        assert_eq!(word_list(&words), "CRANE, SLATE");
    }
}
