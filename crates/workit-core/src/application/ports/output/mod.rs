//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `workit-adapters` crate provides implementations. None of them expose
//! command-line syntax to the pipeline: a failing tool reports the command it
//! ran inside [`CommandFailure`], which the pipeline only echoes.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::WorkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `workit_adapters::filesystem::LocalFilesystem` (production)
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> WorkitResult<()>;

    /// Every regular file under `root`, recursively, in sorted order.
    fn list_files(&self, root: &Path) -> WorkitResult<Vec<PathBuf>>;

    /// Read a file's full content.
    fn read_to_string(&self, path: &Path) -> WorkitResult<String>;

    /// Replace a file's content in place.
    fn write_file(&self, path: &Path, content: &str) -> WorkitResult<()>;
}

/// A tool invocation that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    /// The command line, exactly as it could be re-run by hand.
    pub command: String,
    /// Exit status or spawn error.
    pub reason: String,
}

impl CommandFailure {
    pub fn new(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`: {}", self.command, self.reason)
    }
}

/// How a bounded clone ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneOutcome {
    Cloned,
    /// The deadline passed; the child was killed.
    DeadlineExceeded,
    Failed(CommandFailure),
}

/// Port for the version-control client.
///
/// Implemented by `workit_adapters::vcs::GitClient`.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Name of the executable, for diagnostics.
    fn tool_name(&self) -> String;

    /// Whether the client can be found on the execution path.
    fn is_available(&self) -> bool;

    /// Shallow, single-branch clone of `reference` from `source` into
    /// `destination`, cancelled once `deadline` passes. Progress output is
    /// passed straight through to the operator.
    fn shallow_clone(
        &self,
        source: &str,
        reference: &str,
        destination: &Path,
        deadline: Instant,
    ) -> CloneOutcome;
}

/// Port for the module/dependency manager.
///
/// Implemented by `workit_adapters::deps::GoModules`.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyManager: Send + Sync {
    /// Set the module identity declared in the manifest under `root`.
    fn set_module_identity(&self, root: &Path, identity: &str) -> Result<(), CommandFailure>;

    /// Fetch and reconcile dependencies for the project at `root`.
    fn resolve(&self, root: &Path) -> Result<(), CommandFailure>;
}

/// Operator-visible pipeline progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldEvent<'a> {
    FetchStarted { source: &'a str, reference: &'a str },
    Fetched { path: &'a Path },
    MetadataPurged { path: &'a Path },
    ModuleDeclared { identity: &'a str },
    FileRewritten { path: &'a Path, occurrences: usize },
    ResolvingDependencies { root: &'a Path },
}

/// Port for progress reporting.
///
/// Implemented by the CLI's `OutputManager`. Observers must not fail the
/// pipeline, so `notify` has no error channel.
pub trait ProgressObserver {
    fn notify(&self, event: ScaffoldEvent<'_>);
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn notify(&self, _event: ScaffoldEvent<'_>) {}
}
