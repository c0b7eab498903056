// tests/dispatch_fake_docker.rs

mod common;
use crate::common::{FakeDocker, JobRequestBuilder, init_tracing, job_log, read_log};

use dockjob::config::AdapterConfig;
use dockjob::dispatch::{JobRoute, dispatch};
use dockjob::errors::DockjobError;

#[tokio::test]
async fn missing_container_prefix_fails_without_platform_calls() {
    init_tracing();
    let fake = FakeDocker::new().with_running(["web-1"]);
    let request = JobRequestBuilder::new().script("echo hi").build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert_eq!(result.description, "Missing parameter: container_prefix");
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn missing_script_fails_without_platform_calls() {
    init_tracing();
    let fake = FakeDocker::new().with_running(["web-1"]);
    let request = JobRequestBuilder::new().container_prefix("web").build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert_eq!(result.description, "Missing parameter: script");
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn unmatched_prefix_reports_prefix_and_never_execs() {
    init_tracing();
    let log = job_log();
    let fake = FakeDocker::new().with_running(["db-1", "cache-1"]);
    let request = JobRequestBuilder::new()
        .container_prefix("web")
        .script("echo hi")
        .log_file(log.path())
        .build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert!(result.description.contains("'web'"), "{}", result.description);
    assert!(fake.calls_to("exec").is_empty());
    assert!(read_log(&log).contains("No container found with prefix 'web'"));
}

#[tokio::test]
async fn prefix_match_is_anchored_at_start_of_name() {
    init_tracing();
    let fake = FakeDocker::new().with_running(["my-web-1"]);
    let request = JobRequestBuilder::new()
        .container_prefix("web")
        .script("true")
        .build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert!(fake.calls_to("exec").is_empty());
}

#[tokio::test]
async fn first_listed_container_wins() {
    init_tracing();
    let log = job_log();
    let fake = FakeDocker::new().with_running(["srv-captain--web.2", "srv-captain--web.1", "db"]);
    let request = JobRequestBuilder::new()
        .container_prefix("srv-captain--web")
        .script("uptime")
        .log_file(log.path())
        .build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert!(result.is_success(), "{result:?}");
    assert_eq!(result.description, "Command executed successfully.");
    assert_eq!(fake.execs_in("srv-captain--web.2").len(), 1);
    assert!(fake.execs_in("srv-captain--web.1").is_empty());
    assert!(
        read_log(&log).contains("Found container: srv-captain--web.2 (prefix 'srv-captain--web')")
    );
}

#[tokio::test]
async fn inline_script_reaches_shell_verbatim_and_creates_no_file() {
    init_tracing();
    let script = r#"echo "home is $HOME" && printf '%s\n' "a\"b""#;
    let fake = FakeDocker::new().with_running(["web-1"]);
    let request = JobRequestBuilder::new()
        .container_prefix("web")
        .script(script)
        .build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert!(result.is_success(), "{result:?}");
    assert_eq!(
        fake.execs_in("web-1"),
        vec![vec!["sh".to_string(), "-c".to_string(), script.to_string()]]
    );
    assert!(fake.calls_to("cp").is_empty());
}

#[tokio::test]
async fn interpreter_hint_does_not_change_inline_execution() {
    init_tracing();
    let fake = FakeDocker::new().with_running(["web-1"]);
    let request = JobRequestBuilder::new()
        .container_prefix("web")
        .script("print('hi')")
        .interpreter("python3")
        .build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert!(result.is_success());
    assert_eq!(fake.execs_in("web-1")[0][0], "sh");
    assert!(fake.calls_to("cp").is_empty());
}

#[tokio::test]
async fn copy_parameters_take_precedence_over_script_parameters() {
    init_tracing();
    let fake = FakeDocker::new().with_running(["web-1"]);
    let request = JobRequestBuilder::new()
        .container_prefix("web")
        .script("echo hi")
        .copy("volA:/a", "volB:/b")
        .build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert!(result.is_success(), "{result:?}");
    assert_eq!(fake.calls_to("run").len(), 1);
    assert!(fake.calls_to("ps").is_empty());
    assert!(fake.calls_to("exec").is_empty());
}

#[tokio::test]
async fn listing_failure_is_reported_verbatim_and_logged() {
    init_tracing();
    let log = job_log();
    let fake = FakeDocker::new().fail_on(
        "ps",
        "Cannot connect to the Docker daemon at unix:///var/run/docker.sock",
    );
    let request = JobRequestBuilder::new()
        .container_prefix("web")
        .script("true")
        .log_file(log.path())
        .build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert!(result.description.contains("Cannot connect to the Docker daemon"));
    assert!(read_log(&log).contains("Error: Command failed: docker ps"));
}

#[tokio::test]
async fn missing_log_file_does_not_affect_outcome() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("never-created.log");
    let fake = FakeDocker::new();
    let request = JobRequestBuilder::new()
        .container_prefix("web")
        .script("true")
        .log_file(&missing)
        .build();

    let result = dispatch(&request, &mut fake.cli(), &AdapterConfig::default()).await;

    assert_eq!(result.code, 1);
    assert!(!missing.exists(), "the job log must never be created by the adapter");
}

#[test]
fn route_requires_both_copy_parameters() {
    let request = JobRequestBuilder::new()
        .param("copy_source", "volA:/a")
        .container_prefix("web")
        .script("true")
        .build();

    let route = JobRoute::from_params(&request.params).unwrap();
    assert!(matches!(route, JobRoute::Script { prefix: "web", .. }));

    let only_source = JobRequestBuilder::new()
        .param("copy_source", "volA:/a")
        .build();
    assert!(matches!(
        JobRoute::from_params(&only_source.params),
        Err(DockjobError::MissingParameter("container_prefix"))
    ));
}
