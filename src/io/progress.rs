//! Row progress reporting for board generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Rows: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display advancing once per completed board row
///
/// Generation pauses naturally at row boundaries, so the bar position always
/// reflects a valid partially filled board.
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// Create a tracker for a board of `total_rows` rows
    pub fn new(total_rows: u64) -> Self {
        let bar = ProgressBar::new(total_rows);
        bar.set_style(ROW_STYLE.clone());
        Self { bar }
    }

    /// Record one completed row
    pub fn row_completed(&self) {
        self.bar.inc(1);
    }

    /// Finish the display with a closing message
    pub fn finish(&self, message: &'static str) {
        self.bar.finish_with_message(message);
    }
}
