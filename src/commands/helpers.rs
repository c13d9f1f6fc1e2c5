//! Command helper utilities

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use console::{Style, Term};

use crate::batch::{BatchProcessor, BatchSummary};
use crate::cli::UpdateOptions;
use crate::config::{DocsLayout, RemoteConfig};
use crate::error::Result;
use crate::timestamp::{GitHubCommits, RemoteStrategy, TimestampResolver};

/// Build the resolver for one run: remote first unless disabled
pub fn build_resolver(options: &UpdateOptions, project_root: &Path) -> Result<TimestampResolver> {
    if options.local_only {
        log::debug!("remote lookups disabled, using local file times");
        return Ok(TimestampResolver::local_only());
    }

    let config = RemoteConfig::resolve(options, project_root);
    log::debug!(
        "commit history from {}/{}@{}",
        config.owner,
        config.repo,
        config.branch
    );
    let source = GitHubCommits::new(config)?;
    Ok(TimestampResolver::with_remote(RemoteStrategy::new(
        Box::new(source),
        project_root.to_path_buf(),
    )))
}

/// Run one full update over the project's corpus and print the summary
pub fn run_update(options: &UpdateOptions, project_root: PathBuf) -> Result<BatchSummary> {
    let layout = DocsLayout::new(project_root, &options.docs_dir, &options.subdir);
    println!(
        "{} {}",
        Style::new().bold().apply_to("Scanning:"),
        layout.corpus_root().display()
    );

    let resolver = build_resolver(options, &layout.project_root)?;
    let exclude: HashSet<String> = options.exclude.iter().cloned().collect();

    let summary = BatchProcessor::new(resolver, layout.corpus_dir.clone())
        .dry_run(options.dry_run)
        .show_progress(Term::stderr().is_term())
        .run(&layout.docs_root, &exclude);

    print_summary(&summary, options.dry_run);
    Ok(summary)
}

fn print_summary(summary: &BatchSummary, dry_run: bool) {
    let verb = if dry_run { "would update" } else { "updated" };
    let mut line = format!("{} {verb}, {} skipped", summary.updated, summary.skipped);
    if summary.failed() > 0 {
        line.push_str(&format!(", {} failed", summary.failed()));
    }
    println!();
    println!("{} {line}", Style::new().bold().green().apply_to("Done:"));

    if !summary.failures.is_empty() {
        println!("{}", Style::new().bold().red().apply_to("Failed files:"));
        for failure in &summary.failures {
            println!("  {}: {}", failure.path.display(), failure.error);
        }
    }
}
