//! `git` command-line client.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use tracing::{debug, instrument};
use workit_core::application::ports::{CloneOutcome, CommandFailure, VersionControl};

use crate::process::{BoundedExit, render_command, run_until};

/// Clones templates by shelling out to `git`.
#[derive(Debug, Clone)]
pub struct GitClient {
    program: PathBuf,
}

impl GitClient {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific executable instead of `git` from the search path.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn clone_command(&self, source: &str, reference: &str, destination: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["clone", "--depth", "1", "--progress", "-b", reference, source])
            .arg(destination)
            .env("GIT_PROGRESS", "true");
        cmd
    }
}

impl Default for GitClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitClient {
    fn tool_name(&self) -> String {
        self.program.display().to_string()
    }

    fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    #[instrument(skip(self, deadline), fields(destination = %destination.display()))]
    fn shallow_clone(
        &self,
        source: &str,
        reference: &str,
        destination: &Path,
        deadline: Instant,
    ) -> CloneOutcome {
        let mut cmd = self.clone_command(source, reference, destination);
        let rendered = render_command(&cmd);
        debug!(command = %rendered, "Cloning template");

        match run_until(&mut cmd, deadline) {
            BoundedExit::Success => CloneOutcome::Cloned,
            BoundedExit::DeadlineExceeded => CloneOutcome::DeadlineExceeded,
            BoundedExit::Failed(e) => CloneOutcome::Failed(CommandFailure::new(rendered, e.to_string())),
        }
    }
}
