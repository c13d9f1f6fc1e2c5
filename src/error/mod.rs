//! Error types and handling for docdate
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`remote`]: Commit history API and server launcher errors

pub mod fs;
pub mod remote;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for docdate operations
#[derive(Error, Diagnostic, Debug)]
pub enum DocdateError {
    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(docdate::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(docdate::fs::write_failed),
        help("Check that the file is writable and the disk is not full")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("File is not valid UTF-8: {path}")]
    #[diagnostic(
        code(docdate::fs::invalid_utf8),
        help("Only UTF-8 encoded Markdown files can be updated")
    )]
    InvalidUtf8 { path: String },

    #[error("No usable timestamp for: {path}: {reason}")]
    #[diagnostic(code(docdate::fs::timestamp_unavailable))]
    TimestampUnavailable { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(docdate::fs::io_error))]
    IoError { message: String },

    // Remote errors
    #[error("Failed to build HTTP client: {reason}")]
    #[diagnostic(code(docdate::remote::client_failed))]
    HttpClientFailed { reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(docdate::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Server errors
    #[error("Failed to launch preview server '{program}': {reason}")]
    #[diagnostic(
        code(docdate::server::launch_failed),
        help("Install MkDocs (pip install mkdocs) or pass --mkdocs <path>")
    )]
    ServerLaunchFailed { program: String, reason: String },

    #[error("Preview server exited with status {status}")]
    #[diagnostic(code(docdate::server::exit_status))]
    ServerExited { status: String },
}

impl From<std::io::Error> for DocdateError {
    fn from(err: std::io::Error) -> Self {
        DocdateError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DocdateError>;
