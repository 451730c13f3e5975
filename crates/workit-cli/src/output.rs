//! Output management and formatting.
//!
//! [`OutputManager`] is also the pipeline's [`ProgressObserver`]: every step
//! event becomes one line on stdout, unless output is quiet or JSON.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use tracing::warn;
use workit_core::{
    application::ports::{ProgressObserver, ScaffoldEvent},
    domain::ScaffoldReport,
};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self::with_color_disabled(args, config, args.color_disabled())
    }

    fn with_color_disabled(args: &GlobalArgs, config: &AppConfig, color_disabled: bool) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: color_disabled
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Final success report, or the serialized report in JSON mode.
    ///
    /// JSON is printed even in quiet mode since it is the command's result.
    pub fn report(&self, report: &ScaffoldReport) -> CliResult<()> {
        if self.resolved_format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(report).map_err(|e| CliError::IoError {
                message: format!("Failed to serialise report: {e}"),
                source: e.into(),
            })?;
            self.term.write_line(&json)?;
            return Ok(());
        }

        self.success(&format!("Project created: {}", report.project_name))?;
        for line in run_instructions(report) {
            self.print(&line)?;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if human progress lines should be written.
    pub fn shows_progress(&self) -> bool {
        !self.quiet && self.resolved_format != OutputFormat::Json
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

impl ProgressObserver for OutputManager {
    fn notify(&self, event: ScaffoldEvent<'_>) {
        if !self.shows_progress() {
            return;
        }
        if let Err(e) = self.info(&describe(event)) {
            warn!(error = %e, "Failed to write progress");
        }
    }
}

/// One progress line per pipeline event.
fn describe(event: ScaffoldEvent<'_>) -> String {
    match event {
        ScaffoldEvent::FetchStarted { .. } => "Cloning template...".into(),
        ScaffoldEvent::Fetched { path } => format!("Template cloned into {}", path.display()),
        ScaffoldEvent::MetadataPurged { path } => format!("Removed {}", path.display()),
        ScaffoldEvent::ModuleDeclared { identity } => format!("Module renamed to {identity}"),
        ScaffoldEvent::FileRewritten { path, .. } => {
            format!("Updated imports in {}", path.display())
        }
        ScaffoldEvent::ResolvingDependencies { .. } => "Resolving dependencies...".into(),
    }
}

/// The "how to run it" block printed after a successful scaffold.
fn run_instructions(report: &ScaffoldReport) -> Vec<String> {
    let mut lines = vec![String::new(), "Run the project:".to_owned()];
    lines.extend(report.next_steps.commands.iter().map(|c| format!("  {c}")));
    lines.extend(report.next_steps.urls.iter().map(|u| format!("  Open {u}")));
    lines
}

// ── tests ─────────────────────────────────────────────────────────────────────
