//! docdate - frontmatter date stamper
//!
//! Sets the `date:` field of the Markdown posts in an MkDocs site to the time
//! of each file's latest GitHub commit, falling back to local file times, and
//! optionally starts the MkDocs preview server afterwards.

use clap::Parser;
use console::Style;
use miette::Diagnostic;

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod frontmatter;
mod path_utils;
mod progress;
mod server;
mod timestamp;

use cli::{Cli, Commands};
use error::DocdateError;

/// Initialize the `log` facade; `RUST_LOG` overrides the default filter
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "docdate=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn report(err: &DocdateError) {
    eprintln!("{} {err}", Style::new().red().bold().apply_to("Error:"));
    if let Some(help) = err.help() {
        eprintln!("  {} {help}", Style::new().cyan().apply_to("help:"));
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Update(args) => commands::update::run(cli.root, &args),
        Commands::Serve(args) => commands::serve::run(cli.root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}
