// src/config/validate.rs

use crate::config::model::{AdapterConfig, RawAdapterConfig};
use crate::errors::{DockjobError, Result};

impl TryFrom<RawAdapterConfig> for AdapterConfig {
    type Error = crate::errors::DockjobError;

    fn try_from(raw: RawAdapterConfig) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;
        Ok(AdapterConfig::new_unchecked(raw.docker, raw.script))
    }
}

/// Check the semantic invariants that serde defaults cannot express.
pub fn validate_config(cfg: &RawAdapterConfig) -> Result<()> {
    ensure_non_empty("[docker].binary", &cfg.docker.binary)?;
    ensure_non_empty("[docker].helper_image", &cfg.docker.helper_image)?;
    ensure_non_empty("[script].shell", &cfg.script.shell)?;
    validate_fallback_tmp_dir(&cfg.script.fallback_tmp_dir)?;
    Ok(())
}

fn ensure_non_empty(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DockjobError::ConfigError(format!(
            "{key} must not be empty"
        )));
    }
    Ok(())
}

fn validate_fallback_tmp_dir(dir: &str) -> Result<()> {
    // The path is interpreted inside the container, never on the host.
    if !dir.starts_with('/') {
        return Err(DockjobError::ConfigError(format!(
            "[script].fallback_tmp_dir must be an absolute path (got '{dir}')"
        )));
    }
    Ok(())
}
