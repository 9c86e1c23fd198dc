//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
mod progress;

pub use display::{
    print_analysis_result, print_history, print_outcome, print_recommendation, print_solve_result,
    print_status,
};
pub use progress::ScanProgress;
