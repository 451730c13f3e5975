//! Identity Rewriter - second pipeline stage.
//!
//! Steps run strictly in order and each depends on the previous one:
//! 1. Purge version-control metadata
//! 2. Rewrite the module declaration
//! 3. Rewrite every reference to the old identity in source files
//! 4. Resolve dependencies
//!
//! Step 3 is best-effort, not transactional: a read or write failure stops
//! the walk, and files already rewritten stay rewritten.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{DependencyManager, Filesystem, ProgressObserver, ScaffoldEvent},
    },
    domain::{IdentityRewrite, Substitution},
    error::WorkitResult,
};

/// What a completed rewrite changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Files written back, in visit order.
    pub rewritten_files: Vec<PathBuf>,
    /// Occurrences replaced across all files.
    pub occurrences: usize,
}

/// Rewrites a fetched template into a self-contained project.
pub struct IdentityRewriter {
    dependencies: Box<dyn DependencyManager>,
    filesystem: Box<dyn Filesystem>,
}

impl IdentityRewriter {
    pub fn new(dependencies: Box<dyn DependencyManager>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            dependencies,
            filesystem,
        }
    }

    /// Run all four steps.
    #[instrument(skip_all, fields(rewrite = %rewrite))]
    pub fn rewrite(
        &self,
        rewrite: &IdentityRewrite,
        observer: &dyn ProgressObserver,
    ) -> WorkitResult<RewriteSummary> {
        self.purge_metadata(rewrite, observer)?;
        self.declare_module(rewrite, observer)?;
        let summary = self.rewrite_references(rewrite, observer)?;
        self.resolve_dependencies(rewrite, observer)?;

        info!(
            files = summary.rewritten_files.len(),
            occurrences = summary.occurrences,
            "Identity rewrite completed"
        );
        Ok(summary)
    }

    /// Remove the clone's metadata directory. Absent metadata is fine.
    pub fn purge_metadata(
        &self,
        rewrite: &IdentityRewrite,
        observer: &dyn ProgressObserver,
    ) -> WorkitResult<()> {
        let metadata = rewrite.metadata_dir();
        if self.filesystem.exists(&metadata) {
            self.filesystem.remove_dir_all(&metadata).map_err(|e| {
                ApplicationError::MetadataCleanupFailed {
                    path: metadata.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        debug!(path = %metadata.display(), "Metadata purged");
        observer.notify(ScaffoldEvent::MetadataPurged { path: &metadata });
        Ok(())
    }

    /// Point the module manifest at the new identity.
    pub fn declare_module(
        &self,
        rewrite: &IdentityRewrite,
        observer: &dyn ProgressObserver,
    ) -> WorkitResult<()> {
        self.dependencies
            .set_module_identity(rewrite.root_dir(), rewrite.new_identity())
            .map_err(|failure| ApplicationError::ModuleDeclarationEditFailed {
                command: failure.command,
                reason: failure.reason,
            })?;
        observer.notify(ScaffoldEvent::ModuleDeclared {
            identity: rewrite.new_identity(),
        });
        Ok(())
    }

    /// Substitute the old identity in every source file that contains it.
    ///
    /// Files without a match are read but never written.
    pub fn rewrite_references(
        &self,
        rewrite: &IdentityRewrite,
        observer: &dyn ProgressObserver,
    ) -> WorkitResult<RewriteSummary> {
        let root = rewrite.source_root();
        let files = self.filesystem.list_files(root).map_err(|e| {
            ApplicationError::ImportRewriteFailed {
                path: root.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let mut summary = RewriteSummary::default();
        for path in files
            .into_iter()
            .filter(|p| IdentityRewrite::is_source_file(p))
        {
            let content = self.filesystem.read_to_string(&path).map_err(|e| {
                ApplicationError::ImportRewriteFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?;

            let Substitution::Rewritten {
                content,
                occurrences,
            } = rewrite.apply(&content)
            else {
                continue;
            };

            self.filesystem.write_file(&path, &content).map_err(|e| {
                ApplicationError::ImportRewriteFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?;

            debug!(path = %path.display(), occurrences, "Imports rewritten");
            observer.notify(ScaffoldEvent::FileRewritten {
                path: &path,
                occurrences,
            });
            summary.occurrences += occurrences;
            summary.rewritten_files.push(path);
        }

        Ok(summary)
    }

    /// Fetch and reconcile dependencies for the rewritten project.
    pub fn resolve_dependencies(
        &self,
        rewrite: &IdentityRewrite,
        observer: &dyn ProgressObserver,
    ) -> WorkitResult<()> {
        observer.notify(ScaffoldEvent::ResolvingDependencies {
            root: rewrite.root_dir(),
        });
        self.dependencies
            .resolve(rewrite.root_dir())
            .map_err(|failure| ApplicationError::DependencyResolutionFailed {
                command: failure.command,
                reason: failure.reason,
            })?;
        Ok(())
    }
}
