//! Serve command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::ServeArgs;
use crate::commands::helpers::run_update;
use crate::config::resolve_project_root;
use crate::error::Result;
use crate::server::ServerLauncher;

/// Run serve command
pub fn run(root: Option<PathBuf>, args: ServeArgs) -> Result<()> {
    let project_root = resolve_project_root(root)?;

    if args.skip_update {
        log::debug!("skipping date update");
    } else {
        run_update(&args.options, project_root.clone())?;
        println!();
    }

    let launcher = ServerLauncher::new(project_root, args.mkdocs).with_args(args.mkdocs_args);
    println!(
        "{} {} serve",
        Style::new().bold().apply_to("Starting:"),
        launcher.program().display()
    );
    launcher.launch()
}
