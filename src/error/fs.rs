//! File system errors

use std::path::Path;

use super::DocdateError;

/// Creates a read failure for `path`
pub fn read_failed(path: &Path, err: impl std::fmt::Display) -> DocdateError {
    DocdateError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a write failure for `path`
pub fn write_failed(path: &Path, err: impl std::fmt::Display) -> DocdateError {
    DocdateError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Maps a read error, singling out non-UTF-8 content
pub fn from_read_error(path: &Path, err: &std::io::Error) -> DocdateError {
    if err.kind() == std::io::ErrorKind::InvalidData {
        DocdateError::InvalidUtf8 {
            path: path.display().to_string(),
        }
    } else {
        read_failed(path, err)
    }
}

/// Creates a metadata failure for `path`
pub fn timestamp_unavailable(path: &Path, err: impl std::fmt::Display) -> DocdateError {
    DocdateError::TimestampUnavailable {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> DocdateError {
    DocdateError::IoError {
        message: message.into(),
    }
}
