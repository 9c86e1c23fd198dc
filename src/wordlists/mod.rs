//! Word lists for Wordle solving
//!
//! Answer and guess lists are plain text files, one word per line.

pub mod loader;

pub use loader::{LoadError, load_from_file, words_from_lines};
