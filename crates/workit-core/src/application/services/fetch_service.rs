//! Template Fetcher - first pipeline stage.
//!
//! Guards the target directory, checks that the clone tool exists, then runs
//! a deadline-bounded shallow clone through the [`VersionControl`] port.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CloneOutcome, Filesystem, ProgressObserver, ScaffoldEvent, VersionControl},
    },
    domain::ScaffoldRequest,
    error::WorkitResult,
};

/// Obtains a template snapshot for a [`ScaffoldRequest`].
pub struct TemplateFetcher {
    vcs: Box<dyn VersionControl>,
    filesystem: Box<dyn Filesystem>,
}

impl TemplateFetcher {
    pub fn new(vcs: Box<dyn VersionControl>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { vcs, filesystem }
    }

    /// Clone the template into the request's target directory.
    ///
    /// Returns the directory on success. The clone still contains its
    /// version-control metadata; removing it is the rewriter's job.
    #[instrument(
        skip_all,
        fields(
            project = %request.project_name(),
            source = %request.template_source(),
            reference = %request.template_ref()
        )
    )]
    pub fn fetch(
        &self,
        request: &ScaffoldRequest,
        observer: &dyn ProgressObserver,
    ) -> WorkitResult<PathBuf> {
        let target = request.target_dir();

        if self.filesystem.exists(&target) {
            if !request.overwrite() {
                return Err(ApplicationError::AlreadyExists { path: target }.into());
            }
            // Best effort: an incomplete removal makes the clone fail on its own.
            match self.filesystem.remove_dir_all(&target) {
                Ok(()) => debug!(path = %target.display(), "Removed existing directory"),
                Err(e) => warn!(error = %e, path = %target.display(), "Could not remove existing directory"),
            }
        }

        if !self.vcs.is_available() {
            return Err(ApplicationError::ToolingUnavailable {
                tool: self.vcs.tool_name(),
            }
            .into());
        }

        observer.notify(ScaffoldEvent::FetchStarted {
            source: request.template_source(),
            reference: request.template_ref(),
        });

        let deadline = Instant::now() + request.fetch_timeout();
        let outcome = self.vcs.shallow_clone(
            request.template_source(),
            request.template_ref(),
            &target,
            deadline,
        );

        match outcome {
            CloneOutcome::Cloned => {
                info!(path = %target.display(), "Template fetched");
                observer.notify(ScaffoldEvent::Fetched { path: &target });
                Ok(target)
            }
            CloneOutcome::DeadlineExceeded => {
                warn!(timeout_secs = request.fetch_timeout().as_secs(), "Template fetch timed out");
                Err(ApplicationError::Timeout {
                    url: request.template_source().to_owned(),
                    timeout: request.fetch_timeout(),
                }
                .into())
            }
            CloneOutcome::Failed(failure) => {
                debug!(command = %failure.command, "Clone command failed");
                Err(ApplicationError::FetchFailed {
                    command: failure.command,
                    reason: failure.reason,
                }
                .into())
            }
        }
    }
}
