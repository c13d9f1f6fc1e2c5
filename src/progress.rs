//! Progress bar and per-file report lines for batch runs

use console::Style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress display for a batch of documents
pub struct ProgressDisplay {
    bar: ProgressBar,
}

impl ProgressDisplay {
    /// Create a progress display over `total_files` documents
    pub fn new(total_files: u64) -> Self {
        let bar = ProgressBar::new(total_files);
        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}") {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }

    /// Display that never draws a bar; report lines are still printed
    pub fn hidden() -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Show the file being processed
    pub fn start_file(&self, display_path: &str) {
        // Truncate long paths for display
        let shown = if display_path.chars().count() > 50 {
            let tail: String = display_path
                .chars()
                .rev()
                .take(47)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{tail}")
        } else {
            display_path.to_string()
        };
        self.bar.set_message(shown);
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn report_updated(&self, display_path: &str, date: &str) {
        self.bar.suspend(|| {
            println!(
                "{} {} -> {}",
                Style::new().green().bold().apply_to("updated:"),
                display_path,
                date
            );
        });
    }

    pub fn report_would_update(&self, display_path: &str, date: &str) {
        self.bar.suspend(|| {
            println!(
                "{} {} -> {}",
                Style::new().cyan().bold().apply_to("would update:"),
                display_path,
                date
            );
        });
    }

    pub fn report_failure(&self, display_path: &str, error: &str) {
        self.bar.suspend(|| {
            eprintln!(
                "{} {}: {}",
                Style::new().red().bold().apply_to("error:"),
                display_path,
                error
            );
        });
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
