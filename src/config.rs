//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/seatmap/seatmap.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `SEATMAP__*` prefix, e.g. `SEATMAP__THEATER__ROWS=12`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{DomainResult, Theater};

/// Layout of the theater to build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TheaterConfig {
    pub name: String,
    pub rows: usize,
    pub seats_per_row: usize,
    /// 1-based numbers of wheelchair-accessible rows
    pub accessible_rows: Vec<usize>,
}

impl Default for TheaterConfig {
    fn default() -> Self {
        Self {
            name: "Grand".into(),
            rows: 10,
            seats_per_row: 12,
            accessible_rows: vec![1, 10],
        }
    }
}

impl TheaterConfig {
    /// Generate the configured theater with every seat unreserved.
    pub fn build(&self) -> DomainResult<Theater> {
        let accessible: BTreeSet<usize> = self.accessible_rows.iter().copied().collect();
        Theater::generate(&self.name, self.rows, self.seats_per_row, &accessible)
    }
}

/// Unified configuration for seatmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub theater: TheaterConfig,
}

/// Get the XDG config directory for seatmap.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "seatmap").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("seatmap.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), config_file)
    }

    /// Load settings from an explicit set of layers.
    ///
    /// `global` is skipped when missing; `local` is required when given.
    /// Environment variables are applied last in both cases.
    pub fn load_layers(
        global: Option<&Path>,
        local: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let defaults = TheaterConfig::default();
        let accessible: Vec<i64> = defaults
            .accessible_rows
            .iter()
            .map(|&n| n as i64)
            .collect();

        let mut builder = Config::builder()
            .set_default("theater.name", defaults.name)
            .map_err(config_err)?
            .set_default("theater.rows", defaults.rows as i64)
            .map_err(config_err)?
            .set_default("theater.seats_per_row", defaults.seats_per_row as i64)
            .map_err(config_err)?
            .set_default("theater.accessible_rows", accessible)
            .map_err(config_err)?;

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(local_path) = local {
            let local_path = expand_path(local_path);
            if !local_path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", local_path.display()),
                });
            }
            debug!("load: config file {}", local_path.display());
            builder = builder.add_source(File::from(local_path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("SEATMAP")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("theater.accessible_rows")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# seatmap configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/seatmap/seatmap.toml
#   File:   seatmap --config <file>
#   Env:    SEATMAP__THEATER__* environment variables

[theater]
# name = "Grand"
# rows = 10
# seats_per_row = 12

# Wheelchair-accessible rows (1-based)
# accessible_rows = [1, 10]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
