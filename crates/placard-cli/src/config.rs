//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PLACARD_CATALOG__PATH`,
//!    `PLACARD_VALIDATION__REQUIRED` (comma separated), `PLACARD_OUTPUT__FORMAT`, ...
//! 3. Config file: `--config FILE`, or `.placard.toml` in the current
//!    directory over the platform config file
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::ReportFormat;

/// File name used by `placard init --local` and picked up from the CWD.
pub const LOCAL_CONFIG_FILE: &str = ".placard.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where placeholder definitions come from.
    pub catalog: CatalogConfig,
    /// Defaults for `placard check`.
    pub validation: ValidationConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog file or directory. `None` means the built-in catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Keys required when `--require` is not given.
    pub required: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `human` or `json`; anything else fails to load.
    pub format: ReportFormat,
}

impl AppConfig {
    /// Load configuration from files and `PLACARD_*` environment variables.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "using explicit config file");
                builder = builder
                    .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(true));
            }
            None => {
                let global = Self::config_path();
                builder = builder
                    .add_source(File::new(&global.to_string_lossy(), FileFormat::Toml).required(false))
                    .add_source(File::new(LOCAL_CONFIG_FILE, FileFormat::Toml).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("PLACARD")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("validation.required")
                .try_parsing(true),
        );

        builder
            .build()
            .context("failed to read configuration sources")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.placard.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "placard", "placard")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}
