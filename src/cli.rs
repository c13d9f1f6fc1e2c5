//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{
    DEFAULT_API_ROOT, DEFAULT_BRANCH, DEFAULT_CORPUS_DIR, DEFAULT_DOCS_DIR, DEFAULT_TIMEOUT_SECS,
};

/// docdate - stamp Markdown frontmatter dates from commit history
#[derive(Parser, Debug)]
#[command(
    name = "docdate",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Stamp Markdown frontmatter dates from GitHub commit history",
    long_about = "docdate sets the `date:` field in the frontmatter of every Markdown file \
                  under docs/blogs to the time of the file's latest commit on GitHub, \
                  falling back to the local file creation time when the API cannot answer.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  docdate update\n    \
                  docdate update --local-only --exclude index.md\n    \
                  docdate serve\n    \
                  docdate serve --skip-update -- --dev-addr 127.0.0.1:8001"
)]
pub struct Cli {
    /// Project root (defaults to the enclosing git work tree, else the current directory)
    #[arg(long, short = 'r', global = true)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Update frontmatter dates
    Update(UpdateArgs),

    /// Update dates, then run the MkDocs preview server
    Serve(ServeArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command that runs an update
#[derive(Args, Debug, Clone)]
pub struct UpdateOptions {
    /// Document root, relative to the project root
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DOCS_DIR)]
    pub docs_dir: PathBuf,

    /// Subdirectory of the document root whose files are updated
    #[arg(long, value_name = "NAME", default_value = DEFAULT_CORPUS_DIR)]
    pub subdir: String,

    /// File name to leave untouched (repeatable, e.g. --exclude index.md)
    #[arg(long, value_name = "FILENAME")]
    pub exclude: Vec<String>,

    /// Use local file times only; never query GitHub
    #[arg(long)]
    pub local_only: bool,

    /// Show what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Repository owner (defaults to the owner of the `origin` remote)
    #[arg(long, env = "GITHUB_OWNER")]
    pub owner: Option<String>,

    /// Repository name (defaults to the name of the `origin` remote)
    #[arg(long, env = "GITHUB_REPO")]
    pub repo: Option<String>,

    /// Branch whose history is queried
    #[arg(long, env = "GITHUB_BRANCH", default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// API token sent as a bearer credential
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API root URL
    #[arg(long, env = "GITHUB_API_ROOT", default_value = DEFAULT_API_ROOT)]
    pub api_root: String,

    /// Seconds to wait for each commit history request
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update every post under docs/blogs:\n    docdate update\n\n\
                  Skip index pages:\n    docdate update --exclude index.md\n\n\
                  Offline run using file creation times:\n    docdate update --local-only\n\n\
                  Preview changes:\n    docdate update --dry-run")]
pub struct UpdateArgs {
    #[command(flatten)]
    pub options: UpdateOptions,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update dates and serve:\n    docdate serve\n\n\
                  Serve without touching files:\n    docdate serve --skip-update\n\n\
                  Pass options to mkdocs:\n    docdate serve -- --dev-addr 127.0.0.1:8001")]
pub struct ServeArgs {
    /// Start the server without updating dates first
    #[arg(long)]
    pub skip_update: bool,

    /// Path to the mkdocs executable (defaults to .venv, then PATH)
    #[arg(long, value_name = "PATH")]
    pub mkdocs: Option<PathBuf>,

    #[command(flatten)]
    pub options: UpdateOptions,

    /// Extra arguments passed to `mkdocs serve`
    #[arg(last = true, value_name = "MKDOCS_ARGS")]
    pub mkdocs_args: Vec<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    docdate completions --shell bash > ~/.bash_completion.d/docdate\n\n\
                  Generate zsh completions:\n    docdate completions --shell zsh > ~/.zfunc/_docdate")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
