//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `WORKIT_TEMPLATE__BRANCH=release`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use workit_core::domain::{DEFAULT_FETCH_TIMEOUT, DEFAULT_TEMPLATE_REF, DEFAULT_TEMPLATE_SOURCE};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "WORKIT";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Template settings.
    pub template: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub source: String,
    pub branch: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            template: TemplateConfig {
                source: DEFAULT_TEMPLATE_SOURCE.into(),
                branch: DEFAULT_TEMPLATE_REF.into(),
                timeout_secs: DEFAULT_FETCH_TIMEOUT.as_secs(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl TemplateConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// The default location is always optional. An explicit `config_file`
    /// must exist when `explicit_required` is set.
    pub fn load(config_file: Option<&Path>, explicit_required: bool) -> anyhow::Result<Self> {
        let required = config_file.is_some() && explicit_required;
        Self::load_from(
            &Self::file_path(config_file),
            required,
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default()).context("Failed to encode defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Look up a dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "template.source" => self.template.source.clone(),
            "template.branch" => self.template.branch.clone(),
            "template.timeout_secs" => self.template.timeout_secs.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Render as TOML, as written by `config init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise config")
    }

    /// The file settings are read from: `config_file` if given, else the
    /// default location.
    pub fn file_path(config_file: Option<&Path>) -> PathBuf {
        config_file.map_or_else(Self::config_path, Path::to_path_buf)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.workit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "xiaohangshuhub", "workit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".workit.toml"))
    }
}
