//! MkDocs preview server launcher

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{
    Result,
    remote::{launch_failed, server_exited},
};

/// Virtualenv locations checked for an `mkdocs` executable, in order
const VENV_CANDIDATES: &[&str] = &[".venv/Scripts/mkdocs.exe", ".venv/bin/mkdocs"];

/// Program used when no virtualenv copy exists
const DEFAULT_PROGRAM: &str = "mkdocs";

/// Runs `<mkdocs> serve` in the project root
#[derive(Debug, Clone)]
pub struct ServerLauncher {
    program: PathBuf,
    project_root: PathBuf,
    extra_args: Vec<OsString>,
}

impl ServerLauncher {
    pub fn new(project_root: PathBuf, program: Option<PathBuf>) -> Self {
        let program = program.unwrap_or_else(|| locate_mkdocs(&project_root));
        Self {
            program,
            project_root,
            extra_args: Vec::new(),
        }
    }

    /// Arguments appended after `serve`
    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<OsString>>) -> Self {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("serve")
            .args(&self.extra_args)
            .current_dir(&self.project_root);
        cmd
    }

    /// Run the server in the foreground until it exits
    pub fn launch(&self) -> Result<()> {
        log::debug!(
            "launching {} serve in {}",
            self.program.display(),
            self.project_root.display()
        );
        let status = self
            .command()
            .status()
            .map_err(|e| launch_failed(&self.program.display().to_string(), &e))?;

        if status.success() {
            Ok(())
        } else {
            Err(server_exited(status))
        }
    }
}

/// The project's virtualenv `mkdocs` if present, else `mkdocs` from `PATH`
pub fn locate_mkdocs(project_root: &Path) -> PathBuf {
    VENV_CANDIDATES
        .iter()
        .map(|candidate| project_root.join(candidate))
        .find(|path| path.is_file())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM))
}
