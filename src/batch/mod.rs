//! Batch update of frontmatter dates
//!
//! Walks the corpus subdirectory of the document root, resolves a timestamp
//! for each Markdown file, merges it into the frontmatter and writes changed
//! files back. A failure on one file is reported and counted; it never stops
//! the batch.

mod discovery;

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use console::Style;

pub use discovery::discover_markdown;

use crate::error::{
    Result,
    fs::{from_read_error, write_failed},
};
use crate::frontmatter::update_date;
use crate::path_utils::display_relative;
use crate::progress::ProgressDisplay;
use crate::timestamp::TimestampResolver;

/// A file that could not be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Tallies for one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub updated: usize,
    pub skipped: usize,
    pub failures: Vec<FileFailure>,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
enum FileOutcome {
    Updated(String),
    Unchanged,
}

/// Runs one batch over a document root
pub struct BatchProcessor {
    resolver: TimestampResolver,
    corpus_dir: String,
    dry_run: bool,
    show_progress: bool,
}

impl BatchProcessor {
    pub fn new(resolver: TimestampResolver, corpus_dir: impl Into<String>) -> Self {
        Self {
            resolver,
            corpus_dir: corpus_dir.into(),
            dry_run: false,
            show_progress: true,
        }
    }

    /// Report changes without writing them
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Draw a progress bar while processing (only on a terminal)
    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Update every Markdown file under `docs_root/<corpus_dir>`.
    ///
    /// Files whose bare name is in `exclude` are counted as skipped.
    pub fn run(&mut self, docs_root: &Path, exclude: &HashSet<String>) -> BatchSummary {
        let corpus_root = docs_root.join(&self.corpus_dir);
        if !corpus_root.is_dir() {
            eprintln!(
                "{} {} directory does not exist: {}",
                Style::new().bold().yellow().apply_to("Warning:"),
                self.corpus_dir,
                corpus_root.display()
            );
            return BatchSummary::default();
        }

        let files = discover_markdown(&corpus_root);
        log::debug!("{} markdown files under {}", files.len(), corpus_root.display());

        let progress = if self.show_progress {
            ProgressDisplay::new(files.len() as u64)
        } else {
            ProgressDisplay::hidden()
        };

        let mut summary = BatchSummary::default();
        for path in files {
            let shown = display_relative(&path, docs_root);
            progress.start_file(&shown);

            if is_excluded(&path, exclude) {
                log::debug!("{shown}: excluded");
                summary.skipped += 1;
                progress.inc();
                continue;
            }

            match self.process_file(&path) {
                Ok(FileOutcome::Updated(date)) => {
                    if self.dry_run {
                        progress.report_would_update(&shown, &date);
                    } else {
                        progress.report_updated(&shown, &date);
                    }
                    summary.updated += 1;
                }
                Ok(FileOutcome::Unchanged) => summary.skipped += 1,
                Err(e) => {
                    progress.report_failure(&path.display().to_string(), &e.to_string());
                    summary.failures.push(FileFailure {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                }
            }
            progress.inc();
        }
        progress.finish();

        summary
    }

    fn process_file(&mut self, path: &Path) -> Result<FileOutcome> {
        let content = std::fs::read_to_string(path).map_err(|e| from_read_error(path, &e))?;
        let date = self.resolver.resolve(path)?.render();

        let (updated, changed) = update_date(&content, &date);
        if !changed {
            return Ok(FileOutcome::Unchanged);
        }

        if !self.dry_run {
            write_in_place(path, &updated)?;
        }
        Ok(FileOutcome::Updated(date))
    }
}

fn is_excluded(path: &Path, exclude: &HashSet<String>) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| exclude.contains(name))
}

/// Overwrite `path` in place.
///
/// The file is truncated and rewritten rather than replaced, so its birth
/// time (the local fallback timestamp) survives the update.
fn write_in_place(path: &Path, content: &str) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| write_failed(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| write_failed(path, e))?;
    file.flush().map_err(|e| write_failed(path, e))?;
    Ok(())
}
