// src/exec/docker.rs

//! Typed wrapper over the container platform CLI.
//!
//! Each method issues exactly one platform command through the configured
//! [`CommandBackend`]. Arguments are always passed as a vector, so container
//! names, paths and script bodies never go through a host shell.

use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::exec::backend::CommandBackend;
use crate::exec::command::{CommandSpec, OutputMode};

/// A named-volume mount for an ephemeral container.
///
/// Rendered as `--mount type=volume,...`, so the platform never reads the
/// source as a host path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeMount {
    pub volume: String,
    pub path: String,
}

impl VolumeMount {
    pub fn new(volume: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            volume: volume.into(),
            path: path.into(),
        }
    }

    fn as_mount_value(&self) -> String {
        format!("type=volume,src={},dst={}", self.volume, self.path)
    }
}

pub struct DockerCli<B> {
    binary: String,
    backend: B,
}

impl<B> DockerCli<B>
where
    B: CommandBackend,
{
    pub fn new(binary: impl Into<String>, backend: B) -> Self {
        Self {
            binary: binary.into(),
            backend,
        }
    }

    fn command(&self, output: OutputMode) -> CommandSpec {
        CommandSpec::new(self.binary.clone(), output)
    }

    /// Names of running containers, in the order the platform lists them.
    pub async fn list_running(&mut self) -> Result<Vec<String>> {
        let spec = self
            .command(OutputMode::Capture)
            .args(["ps", "--format", "{{.Names}}"]);
        let out = self.backend.run(spec).await?;

        let names: Vec<String> = out
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        debug!(count = names.len(), "listed running containers");
        Ok(names)
    }

    /// `docker exec <container> argv...`, returning captured stdout.
    pub async fn exec_capture(&mut self, container: &str, argv: &[&str]) -> Result<String> {
        let spec = self
            .command(OutputMode::Capture)
            .arg("exec")
            .arg(container)
            .args(argv.iter().copied());
        Ok(self.backend.run(spec).await?.stdout)
    }

    /// `docker exec <container> argv...` with output forwarded live.
    pub async fn exec_inherit(&mut self, container: &str, argv: &[&str]) -> Result<()> {
        let spec = self
            .command(OutputMode::Inherit)
            .arg("exec")
            .arg(container)
            .args(argv.iter().copied());
        self.backend.run(spec).await?;
        Ok(())
    }

    /// `docker cp <local> <container>:<remote>`.
    pub async fn copy_into(&mut self, container: &str, local: &Path, remote: &str) -> Result<()> {
        let spec = self
            .command(OutputMode::Capture)
            .arg("cp")
            .arg(local.to_string_lossy())
            .arg(format!("{container}:{remote}"));
        self.backend.run(spec).await?;
        Ok(())
    }

    /// `docker run --rm --mount type=volume,... <image> argv...`.
    ///
    /// `--rm` makes the platform delete the container however it exits.
    pub async fn run_ephemeral(
        &mut self,
        image: &str,
        mounts: &[VolumeMount],
        argv: &[&str],
    ) -> Result<()> {
        let mut spec = self.command(OutputMode::Capture).args(["run", "--rm"]);
        for mount in mounts {
            spec = spec.arg("--mount").arg(mount.as_mount_value());
        }
        let spec = spec.arg(image).args(argv.iter().copied());

        self.backend.run(spec).await?;
        Ok(())
    }
}
