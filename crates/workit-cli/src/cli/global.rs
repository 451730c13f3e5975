//! Flags shared by every `workit` subcommand.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable that turns colour off when set to any non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Show pipeline steps (-v), the git/go commands run (-vv), or everything (-vvv).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and the final report.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable coloured output. Setting NO_COLOR to any non-empty value does the same.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user config file.
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How to render results.
    #[arg(long = "output-format", global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Whether colour is off, from `--no-color` or the environment.
    pub fn color_disabled(&self) -> bool {
        no_color_requested(self.no_color, std::env::var_os(NO_COLOR_ENV).as_deref())
    }

    /// Tracing level for the workspace crates. `--quiet` beats `-v`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// The `--config` file, if one was given.
    pub fn config_override(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

/// `NO_COLOR` counts only when present and non-empty (<https://no-color.org>).
fn no_color_requested(flag: bool, env: Option<&OsStr>) -> bool {
    flag || env.is_some_and(|value| !value.is_empty())
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Coloured when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    Human,
    Plain,
    /// The scaffold report as JSON on stdout.
    Json,
}
