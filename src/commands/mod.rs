//! Command implementations

pub mod analyze;
pub mod play;
pub mod rank;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use play::{PlayCommand, parse_play_command, run_play};
pub use rank::{parse_observation, run_rank};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
