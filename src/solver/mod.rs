//! Wordle solving engine
//!
//! Entropy ranking, pool filtering and the round-by-round session state.

mod config;
pub mod entropy;
mod filter;
mod pool;
pub mod progress;
mod session;

pub use config::{DEFAULT_TIE_TOLERANCE, SolverConfig};
pub use entropy::{GuessScore, PatternTable, Ranking, rank_guesses};
pub use filter::{filter_pool, filter_with_row};
pub use pool::CandidatePool;
pub use progress::{NoProgress, ProgressObserver};
pub use session::{Phase, Recommendation, Session};
