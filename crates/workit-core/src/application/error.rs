//! Application layer errors.
//!
//! One variant per pipeline step failure. Every one of them is terminal:
//! nothing in the pipeline retries, and nothing already written to disk is
//! rolled back.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the scaffold pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Target directory is present and overwrite was not requested.
    #[error("Directory already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    /// The fetch tool is not on the execution path.
    #[error("'{tool}' command not found, please install {tool} first")]
    ToolingUnavailable { tool: String },

    /// The clone did not finish within its bound.
    #[error("Template fetch timed out after {}s while cloning {url}", timeout.as_secs())]
    Timeout { url: String, timeout: Duration },

    /// The clone exited non-zero for a reason other than the timeout.
    #[error("Template fetch failed: {reason}")]
    FetchFailed { command: String, reason: String },

    /// Version-control metadata could not be removed after the clone.
    #[error("Failed to remove version-control metadata at {}: {reason}", path.display())]
    MetadataCleanupFailed { path: PathBuf, reason: String },

    /// The module identity declaration could not be edited.
    #[error("Failed to update module declaration: {reason}")]
    ModuleDeclarationEditFailed { command: String, reason: String },

    /// A source file could not be read or written during the rewrite.
    #[error("Failed to rewrite imports in {}: {reason}", path.display())]
    ImportRewriteFailed { path: PathBuf, reason: String },

    /// The dependency manager's resolve step exited non-zero.
    #[error("Dependency resolution failed: {reason}")]
    DependencyResolutionFailed { command: String, reason: String },

    /// Filesystem operation failed (raised by `Filesystem` adapters).
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
            ],
            Self::ToolingUnavailable { tool } => vec![
                format!("Install {} and make sure it is on your PATH", tool),
                format!("Check with: {} --version", tool),
            ],
            Self::Timeout { url, .. } => vec![
                format!("1. Check that {} is reachable", url),
                "2. Check that your network connection is working".into(),
                "Re-run the command once the network is available".into(),
            ],
            Self::FetchFailed { command, .. } => vec![
                "Try the clone manually to see the underlying cause:".into(),
                format!("  {}", command),
            ],
            Self::MetadataCleanupFailed { path, .. } => vec![
                format!("Remove {} by hand and check its permissions", path.display()),
                "Re-run with --force to start from a fresh clone".into(),
            ],
            Self::ModuleDeclarationEditFailed { command, .. } => vec![
                "Check that go.mod exists in the template".into(),
                format!("Run manually inside the project: {}", command),
            ],
            Self::ImportRewriteFailed { path, .. } => vec![
                format!("Check permissions on {}", path.display()),
                "Files processed before this one were already rewritten".into(),
                "Re-run with --force to start from a fresh clone".into(),
            ],
            Self::DependencyResolutionFailed { command, .. } => vec![
                "The project directory was left in place for inspection".into(),
                format!("Run manually inside the project: {}", command),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::ToolingUnavailable { .. } => ErrorCategory::NotFound,
            Self::Timeout { .. }
            | Self::FetchFailed { .. }
            | Self::MetadataCleanupFailed { .. }
            | Self::ModuleDeclarationEditFailed { .. }
            | Self::ImportRewriteFailed { .. }
            | Self::DependencyResolutionFailed { .. }
            | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }

    /// Short machine-readable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists { .. } => "already_exists",
            Self::ToolingUnavailable { .. } => "tooling_unavailable",
            Self::Timeout { .. } => "timeout",
            Self::FetchFailed { .. } => "fetch_failed",
            Self::MetadataCleanupFailed { .. } => "metadata_cleanup_failed",
            Self::ModuleDeclarationEditFailed { .. } => "module_declaration_edit_failed",
            Self::ImportRewriteFailed { .. } => "import_rewrite_failed",
            Self::DependencyResolutionFailed { .. } => "dependency_resolution_failed",
            Self::FilesystemError { .. } => "filesystem_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_cites_source_and_connectivity() {
        let err = ApplicationError::Timeout {
            url: "git@example.com:t.git".into(),
            timeout: Duration::from_secs(120),
        };
        assert!(err.to_string().contains("120s"));
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("git@example.com:t.git")));
        assert!(suggestions.iter().any(|s| s.contains("network")));
    }

    #[test]
    fn fetch_failed_echoes_command() {
        let err = ApplicationError::FetchFailed {
            command: "git clone --depth 1 --progress -b main url demo".into(),
            reason: "exit status: 128".into(),
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("git clone --depth 1"))
        );
    }

    #[test]
    fn already_exists_suggests_force() {
        let err = ApplicationError::AlreadyExists {
            path: PathBuf::from("demo"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn kinds_are_distinct() {
        let errors = [
            ApplicationError::AlreadyExists { path: "a".into() },
            ApplicationError::ToolingUnavailable { tool: "git".into() },
            ApplicationError::Timeout {
                url: "u".into(),
                timeout: Duration::from_secs(1),
            },
            ApplicationError::FetchFailed {
                command: "c".into(),
                reason: "r".into(),
            },
            ApplicationError::MetadataCleanupFailed {
                path: "a".into(),
                reason: "r".into(),
            },
            ApplicationError::ModuleDeclarationEditFailed {
                command: "c".into(),
                reason: "r".into(),
            },
            ApplicationError::ImportRewriteFailed {
                path: "a".into(),
                reason: "r".into(),
            },
            ApplicationError::DependencyResolutionFailed {
                command: "c".into(),
                reason: "r".into(),
            },
        ];
        let mut kinds: Vec<_> = errors.iter().map(ApplicationError::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }
}
