//! Commit history API and preview server errors

use std::process::ExitStatus;

use super::DocdateError;

/// Creates an HTTP client construction error
pub fn client_failed(reason: impl std::fmt::Display) -> DocdateError {
    DocdateError::HttpClientFailed {
        reason: reason.to_string(),
    }
}

/// Creates a server spawn error
pub fn launch_failed(program: &str, err: &std::io::Error) -> DocdateError {
    DocdateError::ServerLaunchFailed {
        program: program.to_string(),
        reason: err.to_string(),
    }
}

/// Creates an error for a server that exited unsuccessfully
pub fn server_exited(status: ExitStatus) -> DocdateError {
    let status = status
        .code()
        .map_or_else(|| "unknown (terminated by signal)".to_string(), |c| c.to_string());
    DocdateError::ServerExited { status }
}
