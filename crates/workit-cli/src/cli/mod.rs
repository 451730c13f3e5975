//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "workit",
    bin_name = "workit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create Go service projects from the workit template",
    long_about = "workit clones a project template and turns it into a \
                  self-contained Go module named after your project.",
    after_help = "EXAMPLES:\n\
        \x20 workit new my-service\n\
        \x20 workit new my-service --branch release --force\n\
        \x20 workit config list\n\
        \x20 workit completions bash > /usr/share/bash-completion/completions/workit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from the template.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 workit new demo\n\
            \x20 workit new demo -b cli-template -t git@github.com:xiaohangshuhub/go-workit.git\n\
            \x20 workit new demo --force --timeout 300"
    )]
    New(NewArgs),

    /// Print version and build information.
    #[command(about = "Show version information")]
    Version,

    /// Manage the workit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 workit config get template.branch\n\
            \x20 workit config list\n\
            \x20 workit config init"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 workit completions bash > ~/.local/share/bash-completion/completions/workit\n\
            \x20 workit completions zsh  > ~/.zfunc/_workit\n\
            \x20 workit completions fish > ~/.config/fish/completions/workit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `workit new`.
///
/// Unset options fall back to the loaded configuration.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name. Becomes both the directory and the Go module path.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Template repository to clone.
    #[arg(
        short = 't',
        long = "template",
        value_name = "URL",
        help = "Template repository URL"
    )]
    pub template: Option<String>,

    /// Template branch or tag.
    #[arg(
        short = 'b',
        long = "branch",
        value_name = "REF",
        help = "Template branch or tag"
    )]
    pub branch: Option<String>,

    /// Overwrite an existing directory (destructive).
    #[arg(short = 'f', long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Clone timeout in seconds.
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "Template clone timeout in seconds"
    )]
    pub timeout: Option<u64>,

    /// Directory to create the project in. Defaults to the working directory.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `workit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `workit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `template.branch`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
    /// Write the built-in defaults to the default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_with_defaults() {
        let cli = Cli::parse_from(["workit", "new", "demo"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name, "demo");
        assert!(args.template.is_none());
        assert!(args.branch.is_none());
        assert!(!args.force);
        assert!(args.timeout.is_none());
    }

    #[test]
    fn parse_new_short_flags() {
        let cli = Cli::parse_from([
            "workit", "new", "demo", "-t", "https://example.com/t.git", "-b", "release", "-f",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.template.as_deref(), Some("https://example.com/t.git"));
        assert_eq!(args.branch.as_deref(), Some("release"));
        assert!(args.force);
    }

    #[test]
    fn parse_new_output_dir() {
        let cli = Cli::parse_from(["workit", "new", "demo", "-o", "/srv/projects"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.output, Some(PathBuf::from("/srv/projects")));
    }

    #[test]
    fn new_requires_a_name() {
        assert!(Cli::try_parse_from(["workit", "new"]).is_err());
    }

    #[test]
    fn timeout_must_be_numeric() {
        assert!(Cli::try_parse_from(["workit", "new", "demo", "--timeout", "soon"]).is_err());
    }

    #[test]
    fn parse_config_init_force() {
        let cli = Cli::parse_from(["workit", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init { force: true })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["workit", "--quiet", "--verbose", "version"]);
        assert!(result.is_err());
    }
}
