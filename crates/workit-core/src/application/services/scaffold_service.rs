//! Scaffold Service - main application orchestrator.
//!
//! This service runs the whole pipeline for one request:
//! 1. Fetch the template (`TemplateFetcher`)
//! 2. Rewrite its identity (`IdentityRewriter`)
//! 3. Build the success report
//!
//! Any step failure aborts the remaining steps. There is no rollback; the
//! target directory is left as the failing step found it.

use tracing::{info, instrument};

use crate::{
    application::{
        ports::ProgressObserver,
        services::{IdentityRewriter, TemplateFetcher},
    },
    domain::{NextSteps, ScaffoldReport, ScaffoldRequest},
    error::WorkitResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    fetcher: TemplateFetcher,
    rewriter: IdentityRewriter,
}

impl ScaffoldService {
    /// Create a new scaffold service from its two stages.
    pub fn new(fetcher: TemplateFetcher, rewriter: IdentityRewriter) -> Self {
        Self { fetcher, rewriter }
    }

    /// Create a project from a template.
    #[instrument(skip_all, fields(request = %request))]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        observer: &dyn ProgressObserver,
    ) -> WorkitResult<ScaffoldReport> {
        info!(policy = %request.identity_policy(), "Scaffolding project");

        let project_path = self.fetcher.fetch(request, observer)?;

        let rewrite = request.identity_rewrite();
        let summary = self.rewriter.rewrite(&rewrite, observer)?;

        info!(path = %project_path.display(), "Scaffold completed successfully");
        Ok(ScaffoldReport {
            project_name: request.project_name().to_owned(),
            project_path,
            old_identity: rewrite.old_identity().to_owned(),
            new_identity: rewrite.new_identity().to_owned(),
            rewritten_files: summary.rewritten_files,
            next_steps: NextSteps::for_project(request.project_name()),
        })
    }
}
