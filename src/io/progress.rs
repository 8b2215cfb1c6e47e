//! Batch progress display for room processing

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Rooms: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks a batch of room files on a single progress bar
///
/// Every finished file is reported on its own line above the bar.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Set the number of files in the batch
    pub fn initialize(&self, file_count: usize) {
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
    }

    /// Show the file currently being processed
    pub fn start_file(&self, path: &Path) {
        self.bar.set_message(display_name(path));
    }

    /// Report a finished room and advance the bar
    pub fn complete_file(&self, path: &Path, wall_count: usize) {
        self.bar
            .println(format!("Processed {} ({wall_count} walls)", display_name(path)));
        self.bar.inc(1);
    }

    /// Report a room that failed and was skipped
    pub fn skip_file(&self, path: &Path) {
        self.bar.println(format!("Skipped {}", display_name(path)));
        self.bar.inc(1);
    }

    /// Clear the bar and print the batch summary
    pub fn finish(&self, world_path: &Path) {
        self.bar.println(format!(
            "All rooms processed and {} created",
            world_path.display()
        ));
        self.bar.finish_and_clear();
    }
}
