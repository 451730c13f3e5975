//! `workit version`: version and build metadata.

use crate::{error::CliResult, output::OutputManager};

/// Set by the release build; `unknown` for local builds.
const BUILD_TIME: Option<&str> = option_env!("WORKIT_BUILD_TIME");
const GIT_COMMIT: Option<&str> = option_env!("WORKIT_GIT_COMMIT");

pub fn execute(output: OutputManager) -> CliResult<()> {
    for line in version_lines() {
        output.print(&line)?;
    }
    Ok(())
}

fn version_lines() -> [String; 3] {
    [
        format!("workit version v{}", workit_core::VERSION),
        format!("Build time: {}", BUILD_TIME.unwrap_or("unknown")),
        format!("Git commit: {}", GIT_COMMIT.unwrap_or("unknown")),
    ]
}
