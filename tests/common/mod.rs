#![allow(dead_code)]

use serde_json::Value;
use tempfile::NamedTempFile;

#[allow(unused_imports)]
pub use dockjob_test_utils::builders::JobRequestBuilder;
#[allow(unused_imports)]
pub use dockjob_test_utils::fake_docker::FakeDocker;
#[allow(unused_imports)]
pub use dockjob_test_utils::{init_tracing, with_timeout};

/// An existing, empty job log file (the adapter never creates one).
pub fn job_log() -> NamedTempFile {
    NamedTempFile::new().expect("create temp job log")
}

pub fn read_log(file: &NamedTempFile) -> String {
    std::fs::read_to_string(file.path()).expect("read job log")
}

/// Parse the result record written to STDOUT.
pub fn parse_result(output: &[u8]) -> Value {
    let text = std::str::from_utf8(output).expect("result is UTF-8");
    assert!(text.ends_with('\n'), "result record must be newline-terminated");
    assert_eq!(text.lines().count(), 1, "exactly one result record expected");
    serde_json::from_str(text.trim_end()).expect("result is JSON")
}
