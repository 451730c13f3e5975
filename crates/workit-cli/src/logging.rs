//! Diagnostics on stderr.
//!
//! The core and adapter crates only emit spans and events; this module
//! installs the one subscriber. stdout stays reserved for command output, so
//! `--output-format json` can be piped. `RUST_LOG` replaces the level derived
//! from `-v`/`-q`.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the requested level.
const WORKSPACE_TARGETS: [&str; 3] = ["workit", "workit_core", "workit_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(workspace_directives(args.log_level())));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .with_ansi(!args.color_disabled() && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `workit=<level>,workit_core=<level>,...`; other crates stay at the
/// `EnvFilter` default of off.
fn workspace_directives(level: LevelFilter) -> String {
    WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
