// tests/volume_copy.rs

mod common;
use crate::common::{FakeDocker, JobRequestBuilder, init_tracing, job_log, read_log};

use dockjob::config::AdapterConfig;
use dockjob::dispatch::dispatch;
use dockjob::errors::DockjobError;
use dockjob::volume::{COPY_SCRIPT, VolumeSpec};

#[test]
fn wildcard_source_is_parsed_and_stripped() {
    let spec = VolumeSpec::parse("copy_source", "volA:/backup/*").unwrap();
    assert_eq!(spec.volume, "volA");
    assert_eq!(spec.mount_path, "/backup");
    assert!(spec.wildcard);
    assert_eq!(spec.copy_from(), "/backup/.");
}

#[test]
fn plain_spec_copies_the_path_itself() {
    let spec = VolumeSpec::parse("copy_target", "volB:/restore/").unwrap();
    assert_eq!(spec.mount_path, "/restore");
    assert!(!spec.wildcard);
    assert_eq!(spec.copy_from(), "/restore");
}

#[test]
fn root_mount_is_rejected() {
    for raw in ["data:/*", "data:/", "data://"] {
        match VolumeSpec::parse("copy_source", raw) {
            Err(DockjobError::MalformedParameter { param, reason }) => {
                assert_eq!(param, "copy_source");
                assert!(reason.contains("'/'"), "{raw}: {reason}");
            }
            other => panic!("{raw}: expected MalformedParameter, got {other:?}"),
        }
    }
}

#[test]
fn repeated_slashes_are_collapsed() {
    let spec = VolumeSpec::parse("copy_target", "volB://srv//restore/").unwrap();
    assert_eq!(spec.mount_path, "/srv/restore");
}

#[test]
fn malformed_specs_name_the_parameter() {
    for (raw, needle) in [
        ("volA", "expected 'volume:path'"),
        (":/data", "volume name is empty"),
        ("volA:", "path is empty"),
        ("volA:data", "must be absolute"),
        ("/etc:/x", "not a volume name"),
        ("-v:/x", "not a volume name"),
        ("vol A:/x", "not a volume name"),
        ("volA:/y:ro", "must not contain ':'"),
        ("volA:/y,readonly", "must not contain ','"),
        ("volA:/data/../etc", "'..'"),
        ("volA:/data/./x", "'.'"),
    ] {
        match VolumeSpec::parse("copy_source", raw) {
            Err(DockjobError::MalformedParameter { param, reason }) => {
                assert_eq!(param, "copy_source");
                assert!(reason.contains(needle), "{raw}: {reason}");
            }
            other => panic!("{raw}: expected MalformedParameter, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn wildcard_copy_moves_directory_contents() {
    init_tracing();
    let log = job_log();
    let fake = FakeDocker::new();
    let request = JobRequestBuilder::new()
        .copy("volA:/backup/*", "volB:/restore/")
        .log_file(log.path())
        .build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert!(result.is_success(), "{result:?}");
    assert_eq!(result.description, "Copied volA:/backup/* to volB:/restore/.");

    let runs = fake.calls_to("run");
    assert_eq!(runs.len(), 1);
    let expected: Vec<String> = [
        "run",
        "--rm",
        "--mount",
        "type=volume,src=volA,dst=/backup",
        "--mount",
        "type=volume,src=volB,dst=/restore",
        "alpine:3.20",
        "sh",
        "-c",
        COPY_SCRIPT,
        "dockjob-copy",
        "/backup/.",
        "/restore",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(runs[0], expected);
    assert!(!runs[0].iter().any(|a| a == "/backup/*"));
    assert!(read_log(&log).contains("Copying volA:/backup/* -> volB:/restore/"));
}

#[tokio::test]
async fn missing_colon_fails_before_any_platform_command() {
    init_tracing();
    let fake = FakeDocker::new();
    let request = JobRequestBuilder::new().copy("volA", "volB:/restore").build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert!(result.description.contains("copy_source"), "{}", result.description);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn malformed_target_is_named() {
    init_tracing();
    let fake = FakeDocker::new();
    let request = JobRequestBuilder::new().copy("volA:/a", "volB").build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert!(result.description.contains("copy_target"));
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn identical_mount_paths_are_rejected() {
    init_tracing();
    let fake = FakeDocker::new();
    let request = JobRequestBuilder::new().copy("volA:/data/*", "volB:/data").build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert!(result.description.contains("copy_target"));
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn host_path_as_source_volume_never_reaches_the_platform() {
    init_tracing();
    let fake = FakeDocker::new();
    let request = JobRequestBuilder::new().copy("/etc:/x", "volB:/restore").build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert!(result.description.contains("copy_source"), "{}", result.description);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn mount_option_in_target_path_never_reaches_the_platform() {
    init_tracing();
    let fake = FakeDocker::new();
    let request = JobRequestBuilder::new().copy("volA:/a", "volB:/y:ro").build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert!(result.description.contains("copy_target"), "{}", result.description);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn nested_mount_paths_are_rejected_both_ways() {
    init_tracing();
    for (source, target) in [
        ("volA:/data", "volB:/data/restore"),
        ("volA:/data/backup/*", "volB:/data"),
    ] {
        let fake = FakeDocker::new();
        let request = JobRequestBuilder::new().copy(source, target).build();

        let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

        assert_eq!(result.code, 1, "{source} -> {target}");
        assert!(result.description.contains("copy_target"), "{}", result.description);
        assert!(fake.calls().is_empty(), "{source} -> {target}");
    }
}

#[test]
fn sibling_paths_sharing_a_prefix_do_not_overlap() {
    let source = VolumeSpec::parse("copy_source", "volA:/data").unwrap();
    let target = VolumeSpec::parse("copy_target", "volB:/data2").unwrap();
    assert!(!source.overlaps(&target));
}

#[tokio::test]
async fn helper_failure_is_reported_verbatim() {
    init_tracing();
    let fake = FakeDocker::new().fail_on("--rm", "Error: No such volume: volA");
    let request = JobRequestBuilder::new().copy("volA:/a", "volB:/b").build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert!(result.description.contains("No such volume: volA"));
}
