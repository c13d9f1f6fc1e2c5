//! Common test utilities for docdate integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway MkDocs project for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new, empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a post under `docs/blogs`
    #[allow(dead_code)]
    pub fn write_post(&self, name: &str, content: &str) {
        self.write_file(&format!("docs/blogs/{name}"), content);
    }

    /// Read a post under `docs/blogs`
    #[allow(dead_code)]
    pub fn read_post(&self, name: &str) -> String {
        self.read_file(&format!("docs/blogs/{name}"))
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The docdate binary with developer `GITHUB_*` settings cleared
#[allow(deprecated)]
pub fn docdate_cmd() -> Command {
    let mut cmd = Command::cargo_bin("docdate").unwrap();
    for var in [
        "GITHUB_OWNER",
        "GITHUB_REPO",
        "GITHUB_BRANCH",
        "GITHUB_TOKEN",
        "GITHUB_API_ROOT",
    ] {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

/// The `date:` value of the frontmatter in `content`, if any
#[allow(dead_code)]
pub fn date_value(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("date:"))
        .map(|value| value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("docs/blogs/a.md", "hello");
        assert!(workspace.file_exists("docs/blogs/a.md"));
        assert_eq!(workspace.read_post("a.md"), "hello");
    }

    #[test]
    fn test_date_value() {
        assert_eq!(
            date_value("---\ntitle: T\ndate: 2024-01-01 00:00\n---\n"),
            Some("2024-01-01 00:00".to_string())
        );
        assert_eq!(date_value("# no frontmatter\n"), None);
    }
}
