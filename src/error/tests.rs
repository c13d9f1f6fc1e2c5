//! Error type tests
//!
//! Tests for `DocdateError` and its conversions.

#![allow(clippy::expect_used)]

use std::path::Path;

use miette::Diagnostic;

use super::DocdateError;
use super::fs::{from_read_error, io_error, read_failed, timestamp_unavailable, write_failed};
use super::remote::{client_failed, launch_failed};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

test_error_contains!(
    test_read_failed_message,
    read_failed(Path::new("docs/blogs/a.md"), "permission denied"),
    "Failed to read file",
    "docs/blogs/a.md",
    "permission denied"
);

test_error_contains!(
    test_write_failed_message,
    write_failed(Path::new("docs/blogs/b.md"), "disk full"),
    "Failed to write file",
    "docs/blogs/b.md",
);

test_error_contains!(
    test_timestamp_unavailable_message,
    timestamp_unavailable(Path::new("gone.md"), "No such file"),
    "No usable timestamp",
    "gone.md"
);

test_error_contains!(
    test_client_failed_message,
    client_failed("tls backend missing"),
    "HTTP client",
    "tls backend missing"
);

test_error_contains!(
    test_launch_failed_message,
    launch_failed(
        "mkdocs",
        &std::io::Error::new(std::io::ErrorKind::NotFound, "not found")
    ),
    "mkdocs",
    "not found"
);

#[test]
fn test_error_code() {
    let err = io_error("boom");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("docdate::fs::io_error".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: DocdateError = io_err.into();
    assert!(matches!(err, DocdateError::IoError { .. }));
}

#[test]
fn test_invalid_data_maps_to_invalid_utf8() {
    let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
    let err = from_read_error(Path::new("latin1.md"), &io_err);
    assert!(matches!(err, DocdateError::InvalidUtf8 { ref path } if path == "latin1.md"));
}

#[test]
fn test_other_read_error_keeps_reason() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = from_read_error(Path::new("locked.md"), &io_err);
    assert!(matches!(err, DocdateError::FileReadFailed { .. }));
    assert!(err.to_string().contains("denied"));
}

#[test]
fn test_server_launch_has_help() {
    let err = launch_failed(
        "mkdocs",
        &std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    );
    let help = err.help().map(|h| h.to_string()).expect("help text");
    assert!(help.contains("--mkdocs"));
}
