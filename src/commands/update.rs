//! Update command implementation
//!
//! Stamps every Markdown file under the corpus directory. Per-file failures
//! are reported in the output but do not make the command fail.

use std::path::PathBuf;

use crate::cli::UpdateArgs;
use crate::commands::helpers::run_update;
use crate::config::resolve_project_root;
use crate::error::Result;

/// Run update command
pub fn run(root: Option<PathBuf>, args: &UpdateArgs) -> Result<()> {
    let project_root = resolve_project_root(root)?;
    run_update(&args.options, project_root)?;
    Ok(())
}
