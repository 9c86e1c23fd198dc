//! indicatif progress bar for ranking scans

use crate::solver::ProgressObserver;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar shown on stderr while guesses are scored
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::hidden();
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} guesses ({percent}%)")
        {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        Self { bar }
    }
}

impl Default for ScanProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ScanProgress {
    fn start(&self, total: usize) {
        self.bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.bar.reset();
        self.bar.set_length(total as u64);
    }

    fn advance(&self, count: usize) {
        self.bar.inc(count as u64);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
