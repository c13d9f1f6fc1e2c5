//! Version command implementation

use crate::config::{DEFAULT_API_ROOT, DEFAULT_BRANCH, DEFAULT_CORPUS_DIR, DEFAULT_DOCS_DIR};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("docdate {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Defaults:");
    println!("  Corpus: {DEFAULT_DOCS_DIR}/{DEFAULT_CORPUS_DIR}");
    println!("  API: {DEFAULT_API_ROOT} (branch {DEFAULT_BRANCH})");

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
