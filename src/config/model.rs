// src/config/model.rs

use std::time::Duration;

use serde::Deserialize;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [docker]
/// binary = "docker"
/// helper_image = "alpine:3.20"
/// command_timeout_secs = 3600
///
/// [script]
/// shell = "sh"
/// fallback_tmp_dir = "/tmp"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawAdapterConfig {
    #[serde(default)]
    pub docker: DockerSection,

    #[serde(default)]
    pub script: ScriptSection,
}

/// `[docker]` section: how the container platform CLI is invoked.
#[derive(Debug, Clone, Deserialize)]
pub struct DockerSection {
    /// Platform CLI, resolved through `PATH`.
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Image used for the disposable volume-copy container.
    #[serde(default = "default_helper_image")]
    pub helper_image: String,

    /// Upper bound for a single platform command. `0` disables the limit.
    #[serde(default = "default_command_timeout_secs")]
    pub command_timeout_secs: u64,
}

fn default_binary() -> String {
    "docker".to_string()
}

fn default_helper_image() -> String {
    "alpine:3.20".to_string()
}

fn default_command_timeout_secs() -> u64 {
    3600
}

impl Default for DockerSection {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            helper_image: default_helper_image(),
            command_timeout_secs: default_command_timeout_secs(),
        }
    }
}

/// `[script]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptSection {
    /// Non-interactive shell used by the inline strategy (`<shell> -c <script>`).
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Temp directory used when the container does not define `TMPDIR`.
    #[serde(default = "default_fallback_tmp_dir")]
    pub fallback_tmp_dir: String,
}

fn default_shell() -> String {
    "sh".to_string()
}

fn default_fallback_tmp_dir() -> String {
    "/tmp".to_string()
}

impl Default for ScriptSection {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            fallback_tmp_dir: default_fallback_tmp_dir(),
        }
    }
}

/// Validated adapter configuration.
///
/// Only constructed through `TryFrom<RawAdapterConfig>` (or `Default`), so the
/// rest of the crate can rely on the checks in [`crate::config::validate`].
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    docker: DockerSection,
    script: ScriptSection,
}

impl AdapterConfig {
    pub(crate) fn new_unchecked(docker: DockerSection, script: ScriptSection) -> Self {
        Self { docker, script }
    }

    pub fn docker_binary(&self) -> &str {
        &self.docker.binary
    }

    pub fn helper_image(&self) -> &str {
        &self.docker.helper_image
    }

    /// `None` when the limit is disabled.
    pub fn command_timeout(&self) -> Option<Duration> {
        match self.docker.command_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn shell(&self) -> &str {
        &self.script.shell
    }

    pub fn fallback_tmp_dir(&self) -> &str {
        &self.script.fallback_tmp_dir
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self::new_unchecked(DockerSection::default(), ScriptSection::default())
    }
}
