//! Implementation of the `workit new` command.
//!
//! Responsibility: merge CLI arguments over configuration into a
//! `ScaffoldRequest`, wire the adapters into the core scaffold service, and
//! display results.

use std::time::Duration;

use tracing::{info, instrument};

use workit_adapters::{GitClient, GoModules, LocalFilesystem};
use workit_core::{
    application::{IdentityRewriter, ScaffoldService, TemplateFetcher},
    domain::ScaffoldRequest,
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `workit new` command.
///
/// 1. Build and validate the request (flags over config)
/// 2. Announce the project and template
/// 3. Fetch and rewrite via `ScaffoldService`
/// 4. Print the report
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(args, &config)?;

    if output.shows_progress() {
        output.header(&format!("Creating project: {}", request.project_name()))?;
        output.print(&format!(
            "Template: {} ({})",
            request.template_source(),
            request.template_ref()
        ))?;
    }

    let service = ScaffoldService::new(
        TemplateFetcher::new(Box::new(GitClient::new()), Box::new(LocalFilesystem::new())),
        IdentityRewriter::new(Box::new(GoModules::new()), Box::new(LocalFilesystem::new())),
    );

    let report = service.scaffold(&request, &output)?;
    info!(
        path = %report.project_path.display(),
        rewritten = report.rewritten_files.len(),
        "Project created"
    );

    output.report(&report)
}

/// Merge flags over configuration. Flags always win.
fn build_request(args: NewArgs, config: &AppConfig) -> CliResult<ScaffoldRequest> {
    let timeout = args
        .timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.template.timeout());

    let mut builder = ScaffoldRequest::builder()
        .project_name(args.name)
        .template_source(args.template.unwrap_or_else(|| config.template.source.clone()))
        .template_ref(args.branch.unwrap_or_else(|| config.template.branch.clone()))
        .overwrite(args.force)
        .fetch_timeout(timeout);
    if let Some(dir) = args.output {
        builder = builder.output_dir(dir);
    }
    Ok(builder.build()?)
}
