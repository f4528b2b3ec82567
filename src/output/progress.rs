use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for batch conversions.
///
/// Hidden under `--quiet` or when stderr is not a TTY.
#[derive(Clone)]
pub struct ConvertProgress {
    progress_bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl ConvertProgress {
    /// Creates a progress bar for `total` artifacts, drawn on stderr.
    ///
    /// # Panics
    ///
    /// Panics if the progress bar template is invalid. The template is a constant.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self {
            progress_bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} Converting [{bar:40.cyan/blue}] {pos}/{len} artifacts ({percent}%)",
                )
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Count one finished artifact. Safe to call from rayon workers.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    /// Run `f` with the bar cleared so printed lines are not drawn over.
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.progress_bar.suspend(f)
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
