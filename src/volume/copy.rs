// src/volume/copy.rs

use tracing::info;

use crate::config::AdapterConfig;
use crate::errors::{DockjobError, Result};
use crate::exec::{CommandBackend, DockerCli, VolumeMount};
use crate::joblog::JobLog;
use crate::protocol::keys;
use crate::volume::spec::VolumeSpec;

/// Shell program run by the helper container. Paths arrive as `$1`/`$2`,
/// never spliced into the program text.
pub const COPY_SCRIPT: &str = r#"mkdir -p "$2" && cp -a "$1" "$2""#;

/// `$0` for the helper shell.
const COPY_ARGV0: &str = "dockjob-copy";

/// Mounts and argv for the helper container.
///
/// The source volume is mounted at the source path and the target volume at
/// the target path, so `cp` works on plain in-container paths.
pub fn copy_invocation(source: &VolumeSpec, target: &VolumeSpec) -> (Vec<VolumeMount>, Vec<String>) {
    let mounts = vec![
        VolumeMount::new(&source.volume, &source.mount_path),
        VolumeMount::new(&target.volume, &target.mount_path),
    ];

    let argv = vec![
        "sh".to_string(),
        "-c".to_string(),
        COPY_SCRIPT.to_string(),
        COPY_ARGV0.to_string(),
        source.copy_from(),
        target.mount_path.clone(),
    ];

    (mounts, argv)
}

/// Copy `copy_source` into `copy_target` via an ephemeral helper container.
///
/// Both specifiers are validated before any platform command runs. The
/// helper is started with `--rm`, so it is gone afterwards whether the copy
/// succeeded or not.
pub async fn copy_between_volumes<B>(
    docker: &mut DockerCli<B>,
    copy_source: &str,
    copy_target: &str,
    config: &AdapterConfig,
    log: &JobLog,
) -> Result<()>
where
    B: CommandBackend,
{
    let source = VolumeSpec::parse(keys::COPY_SOURCE, copy_source)?;
    let target = VolumeSpec::parse(keys::COPY_TARGET, copy_target)?;

    if source.overlaps(&target) {
        return Err(DockjobError::malformed(
            keys::COPY_TARGET,
            format!(
                "path '{}' overlaps copy_source path '{}'; mount points must not nest",
                target.mount_path, source.mount_path
            ),
        ));
    }

    let (mounts, argv) = copy_invocation(&source, &target);
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();

    info!(
        source_volume = %source.volume,
        target_volume = %target.volume,
        wildcard = source.wildcard,
        image = config.helper_image(),
        "copying between volumes"
    );
    log.line(format!("Copying {copy_source} -> {copy_target}"));

    docker
        .run_ephemeral(config.helper_image(), &mounts, &argv)
        .await
}
