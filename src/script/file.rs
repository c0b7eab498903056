// src/script/file.rs

//! Shebang scripts: copy into the container as a file, then execute it.

use std::io::Write;

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::container::ContainerRef;
use crate::errors::Result;
use crate::exec::{CommandBackend, DockerCli};
use crate::joblog::JobLog;

/// Prefix of every script file we place in a container.
pub const SCRIPT_FILE_PREFIX: &str = "dockjob-";

/// Materialize `script` inside `container` and run it.
///
/// Order: temp dir → `mkdir -p <tmp>/bin` → local temp file → `docker cp` →
/// `chmod +x` → exec. Any failing step aborts the rest. Once the copy has
/// been attempted, the in-container file is removed whatever happened next;
/// the local file is removed on every path (explicitly, or by its drop
/// guard).
pub async fn run_as_file<B>(
    docker: &mut DockerCli<B>,
    container: &ContainerRef,
    script: &str,
    fallback_tmp_dir: &str,
    log: &JobLog,
) -> Result<()>
where
    B: CommandBackend,
{
    let tmp_dir = container_tmp_dir(docker, container, fallback_tmp_dir).await?;
    let bin_dir = bin_dir_of(&tmp_dir);
    docker
        .exec_capture(&container.name, &["mkdir", "-p", bin_dir.as_str()])
        .await?;

    let remote_path = format!("{bin_dir}/{SCRIPT_FILE_PREFIX}{}", Uuid::new_v4().simple());

    let mut local = tempfile::Builder::new()
        .prefix(SCRIPT_FILE_PREFIX)
        .tempfile()?;
    local.write_all(script.as_bytes())?;
    local.flush()?;

    debug!(
        container = %container.name,
        local = ?local.path(),
        remote = %remote_path,
        "script file prepared"
    );
    log.line(format!("Running script file {remote_path}"));

    let outcome = copy_and_execute(docker, container, &local, &remote_path).await;

    if let Err(err) = docker
        .exec_capture(&container.name, &["rm", "-f", remote_path.as_str()])
        .await
    {
        warn!(container = %container.name, remote = %remote_path, error = %err, "failed to remove script file from container");
    }

    let local_path = local.path().to_path_buf();
    if let Err(err) = local.close() {
        warn!(local = ?local_path, error = %err, "failed to remove local script file");
    }

    if outcome.is_ok() {
        info!(container = %container.name, remote = %remote_path, "script file executed");
    }
    outcome
}

async fn copy_and_execute<B>(
    docker: &mut DockerCli<B>,
    container: &ContainerRef,
    local: &NamedTempFile,
    remote_path: &str,
) -> Result<()>
where
    B: CommandBackend,
{
    docker
        .copy_into(&container.name, local.path(), remote_path)
        .await?;
    docker
        .exec_capture(&container.name, &["chmod", "+x", remote_path])
        .await?;
    docker.exec_inherit(&container.name, &[remote_path]).await
}

/// The container's `TMPDIR`, or `fallback` when unset or empty.
async fn container_tmp_dir<B>(
    docker: &mut DockerCli<B>,
    container: &ContainerRef,
    fallback: &str,
) -> Result<String>
where
    B: CommandBackend,
{
    let out = docker
        .exec_capture(&container.name, &["sh", "-c", "printf %s \"$TMPDIR\""])
        .await?;

    let tmp = match out.trim() {
        "" => fallback.to_string(),
        dir => dir.to_string(),
    };
    debug!(container = %container.name, tmp_dir = %tmp, "container temp dir");
    Ok(tmp)
}

fn bin_dir_of(tmp_dir: &str) -> String {
    format!("{}/bin", tmp_dir.trim_end_matches('/'))
}
