//! Local filesystem timestamps

use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use super::{TimestampRecord, TimestampSource, TimestampStrategy};
use crate::error::{Result, fs::timestamp_unavailable};

/// Falls back to file metadata; always answers or fails
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStrategy;

impl TimestampStrategy for LocalStrategy {
    fn name(&self) -> &'static str {
        "local metadata"
    }

    fn resolve(&mut self, path: &Path) -> Result<Option<TimestampRecord>> {
        let metadata = std::fs::metadata(path).map_err(|e| timestamp_unavailable(path, e))?;
        let time = file_time(&metadata).map_err(|e| timestamp_unavailable(path, e))?;
        Ok(Some(TimestampRecord::new(
            DateTime::<Utc>::from(time),
            TimestampSource::LocalCtime,
        )))
    }
}

/// Birth time when the platform records it, else the closest analogue
pub fn file_time(metadata: &Metadata) -> std::io::Result<SystemTime> {
    match metadata.created() {
        Ok(created) => Ok(created),
        Err(_) => change_time(metadata),
    }
}

#[cfg(unix)]
fn change_time(metadata: &Metadata) -> std::io::Result<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::{Duration, UNIX_EPOCH};

    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    let time = match u64::try_from(metadata.ctime()) {
        Ok(secs) => UNIX_EPOCH + Duration::new(secs, nanos),
        Err(_) => UNIX_EPOCH - Duration::from_secs(metadata.ctime().unsigned_abs()),
    };
    Ok(time)
}

#[cfg(not(unix))]
fn change_time(metadata: &Metadata) -> std::io::Result<SystemTime> {
    metadata.modified()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_existing_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("post.md");
        std::fs::write(&file, "# Post").unwrap();

        let record = LocalStrategy.resolve(&file).unwrap().unwrap();
        assert_eq!(record.source, TimestampSource::LocalCtime);

        let expected = file_time(&std::fs::metadata(&file).unwrap()).unwrap();
        assert_eq!(record.instant, DateTime::<Utc>::from(expected));
    }

    #[test]
    fn test_recent_file_is_recent() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("post.md");
        std::fs::write(&file, "# Post").unwrap();

        let record = LocalStrategy.resolve(&file).unwrap().unwrap();
        let age = Utc::now() - record.instant;
        assert!(age.num_minutes().abs() < 60, "unexpected age {age}");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = LocalStrategy.resolve(&temp.path().join("gone.md"));
        assert!(result.is_err());
    }

    #[test]
    fn test_rendered_format() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("post.md");
        std::fs::write(&file, "").unwrap();

        let rendered = LocalStrategy.resolve(&file).unwrap().unwrap().render();
        assert_eq!(rendered.len(), "2024-01-01 10:00".len());
        assert_eq!(&rendered[4..5], "-");
        assert_eq!(&rendered[10..11], " ");
        assert_eq!(&rendered[13..14], ":");
    }
}
