//! `workit config`: inspect and initialise configuration.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the global `--config` override; `path` and `init` act on
/// it instead of the default location.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            })?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            output.print(&serialise(&config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::file_path(config_file).display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            let path = AppConfig::file_path(config_file);
            write_defaults(&path, force)?;
            output.success(&format!("Configuration written to {}", path.display()))?;
        }
    }

    Ok(())
}

fn serialise(config: &AppConfig) -> CliResult<String> {
    config.to_toml().map_err(|e| CliError::ConfigError {
        message: e.to_string(),
        source: Some(e.into()),
    })
}

/// Write the built-in defaults to `path`, creating parent directories.
fn write_defaults(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigError {
            message: format!("{} already exists (use --force to overwrite)", path.display()),
            source: None,
        });
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serialise(&AppConfig::default())?)?;
    Ok(())
}
