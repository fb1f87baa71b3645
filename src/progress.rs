//! Progress bar display for archive operations

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for archiving and extracting snapshot files
pub struct ArchiveProgress {
    pb: ProgressBar,
}

impl ArchiveProgress {
    /// Create a new progress display with total file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);

        Self { pb }
    }

    /// Update to show the file currently being processed
    pub fn update_file(&self, file_path: &str) {
        // Truncate long paths for display
        let display_path = if file_path.len() > 50 {
            format!("...{}", &file_path[file_path.len() - 47..])
        } else {
            file_path.to_string()
        };
        self.pb.set_message(display_path);
        self.pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}
