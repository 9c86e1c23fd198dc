//! Progress reporting for long ranking scans
//!
//! The ranker calls these hooks from worker threads. Implementations must be
//! cheap and must not influence the result.

/// Observer notified while guesses are scored
pub trait ProgressObserver: Sync {
    /// A scan over `total` guesses is starting
    fn start(&self, _total: usize) {}

    /// `count` more guesses have been scored
    fn advance(&self, _count: usize) {}

    /// The scan is complete
    fn finish(&self) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}
