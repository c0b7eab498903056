// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{AdapterConfig, RawAdapterConfig};
use crate::errors::{DockjobError, Result};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "DOCKJOB_CONFIG";

/// Load a configuration file from a given path and return the raw config.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// the semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawAdapterConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawAdapterConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<AdapterConfig> {
    let raw_config = load_from_path(&path)?;
    let config = AdapterConfig::try_from(raw_config)?;
    Ok(config)
}

/// `Dockjob.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Dockjob.toml")
}

/// Find and load the effective configuration.
///
/// - An explicit path (CLI flag, then `DOCKJOB_CONFIG`) must exist.
/// - Otherwise [`default_config_path`] is used if it exists.
/// - Otherwise built-in defaults apply.
pub fn resolve_config(explicit: Option<&Path>) -> Result<AdapterConfig> {
    let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);

    if let Some(path) = explicit.map(Path::to_path_buf).or(from_env) {
        if !path.is_file() {
            return Err(DockjobError::ConfigError(format!(
                "config file {:?} does not exist",
                path
            )));
        }
        debug!(path = ?path, "loading config file");
        return load_and_validate(&path);
    }

    let default_path = default_config_path();
    if default_path.is_file() {
        debug!(path = ?default_path, "loading default config file");
        return load_and_validate(&default_path);
    }

    debug!("no config file found; using built-in defaults");
    Ok(AdapterConfig::default())
}
