//! Word list loading utilities
//!
//! Lines are trimmed and case-normalized. Blank lines are ignored and anything
//! that is not a 5-letter word is skipped with a warning.

use crate::core::Word;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no valid 5-letter words found in '{}'", path.display())]
    NoValidWords { path: PathBuf },
}

/// Load words from a file
///
/// Returns the valid words in file order with duplicates removed.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::NoValidWords` if it contains no usable word.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(content.lines());
    if words.is_empty() {
        return Err(LoadError::NoValidWords {
            path: path.to_path_buf(),
        });
    }

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert lines of text to a de-duplicated Word vector
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::words_from_lines;
///
/// let words = words_from_lines(["CRANE", "slate", "", "toolong", "crane"]);
/// assert_eq!(words.len(), 2);
/// ```
pub fn words_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;

    let words = lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    skipped += 1;
                    warn!("skipping line {}: '{trimmed}' ({err})", index + 1);
                    None
                }
            }
        })
        .filter(|word| seen.insert(*word))
        .collect();

    if skipped > 0 {
        debug!("{skipped} malformed lines skipped");
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordle_advisor_{}_{name}", std::process::id()))
    }

    #[test]
    fn words_from_lines_converts_valid_words() {
        let words = words_from_lines(["crane", "SLATE", "  irate  "]);

        let text: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_lines_skips_invalid() {
        let words = words_from_lines(["crane", "toolong", "abc", "sl4te", "", "slate"]);

        let text: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["crane", "slate"]);
    }

    #[test]
    fn words_from_lines_keeps_first_occurrence() {
        let words = words_from_lines(["slate", "crane", "SLATE"]);

        let text: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["slate", "crane"]);
    }

    #[test]
    fn words_from_lines_empty() {
        assert!(words_from_lines(std::iter::empty()).is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_path("valid.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "crane\nTRACE\n\nslate\nnope").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
    }

    #[test]
    fn load_from_file_without_words_fails() {
        let path = temp_path("empty.txt");
        fs::write(&path, "abc\n\ntoolong\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(LoadError::NoValidWords { .. })));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file(temp_path("does_not_exist.txt"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
