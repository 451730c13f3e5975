//! `go` module tooling.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::instrument;
use workit_core::application::ports::{CommandFailure, DependencyManager};

use crate::process::run_streamed;

/// Edits and tidies Go modules by shelling out to `go`.
#[derive(Debug, Clone)]
pub struct GoModules {
    program: PathBuf,
}

impl GoModules {
    pub fn new() -> Self {
        Self::with_program("go")
    }

    /// Use a specific executable instead of `go` from the search path.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, root: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(root);
        cmd
    }
}

impl Default for GoModules {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyManager for GoModules {
    #[instrument(skip(self), fields(root = %root.display()))]
    fn set_module_identity(&self, root: &Path, identity: &str) -> Result<(), CommandFailure> {
        run_streamed(self.command(root).args(["mod", "edit", "-module", identity]))
    }

    #[instrument(skip(self), fields(root = %root.display()))]
    fn resolve(&self, root: &Path) -> Result<(), CommandFailure> {
        run_streamed(self.command(root).args(["mod", "tidy"]))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn missing_go_reports_the_command() {
        let tmp = tempfile::tempdir().unwrap();
        let go = GoModules::with_program("/nonexistent/bin/go");
        let err = go.set_module_identity(tmp.path(), "demo").unwrap_err();
        assert_eq!(err.command, "/nonexistent/bin/go mod edit -module demo");
    }
}
