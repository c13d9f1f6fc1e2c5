//! Serve command tests with stand-in mkdocs executables

mod common;

use common::{TestWorkspace, date_value, docdate_cmd};
use predicates::prelude::*;

#[test]
fn test_serve_missing_mkdocs_fails() {
    let workspace = TestWorkspace::new();

    docdate_cmd()
        .arg("--root")
        .arg(&workspace.path)
        .args(["serve", "--skip-update", "--mkdocs"])
        .arg(workspace.path.join("no-such-mkdocs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch preview server"))
        .stderr(predicate::str::contains("--mkdocs"));
}

#[test]
fn test_serve_skip_update_leaves_posts_alone() {
    let workspace = TestWorkspace::new();
    workspace.write_post("post.md", "# Post\n");

    docdate_cmd()
        .arg("--root")
        .arg(&workspace.path)
        .args(["serve", "--skip-update", "--mkdocs"])
        .arg(workspace.path.join("no-such-mkdocs"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Scanning:").not());

    assert_eq!(workspace.read_post("post.md"), "# Post\n");
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Install an executable shell script at `path` inside the project
    fn install_script(workspace: &TestWorkspace, path: &str, body: &str) {
        workspace.write_file(path, &format!("#!/bin/sh\n{body}\n"));
        let full = workspace.path.join(path);
        let mut perms = std::fs::metadata(&full).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&full, perms).unwrap();
    }

    #[test]
    fn test_serve_updates_then_launches() {
        let workspace = TestWorkspace::new();
        workspace.write_post("post.md", "# Post\n");

        docdate_cmd()
            .arg("--root")
            .arg(&workspace.path)
            .args(["serve", "--local-only", "--mkdocs", "true"])
            .assert()
            .success()
            .stdout(predicate::str::contains("updated: blogs/post.md"))
            .stdout(predicate::str::contains("Starting: true serve"));

        assert!(date_value(&workspace.read_post("post.md")).is_some());
    }

    #[test]
    fn test_serve_reports_server_exit_status() {
        let workspace = TestWorkspace::new();

        docdate_cmd()
            .arg("--root")
            .arg(&workspace.path)
            .args(["serve", "--skip-update", "--mkdocs", "false"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Preview server exited"));
    }

    #[test]
    fn test_serve_prefers_virtualenv_mkdocs() {
        let workspace = TestWorkspace::new();
        install_script(
            &workspace,
            ".venv/bin/mkdocs",
            "echo \"$@\" > served.txt",
        );

        docdate_cmd()
            .arg("--root")
            .arg(&workspace.path)
            .args(["serve", "--skip-update", "--", "--dev-addr", "127.0.0.1:8001"])
            .assert()
            .success()
            .stdout(predicate::str::contains(".venv/bin/mkdocs serve"));

        assert_eq!(
            workspace.read_file("served.txt"),
            "serve --dev-addr 127.0.0.1:8001\n"
        );
    }
}
