#![allow(dead_code)]

use std::path::Path;

use dockjob::protocol::{JobParams, JobRequest, keys};

/// Builder for `JobRequest` to simplify test setup.
pub struct JobRequestBuilder {
    request: JobRequest,
}

impl JobRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: JobRequest {
                params: JobParams::default(),
                log_file: None,
            },
        }
    }

    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.request.params.insert(key, value);
        self
    }

    pub fn container_prefix(self, prefix: &str) -> Self {
        self.param(keys::CONTAINER_PREFIX, prefix)
    }

    pub fn script(self, script: &str) -> Self {
        self.param(keys::SCRIPT, script)
    }

    pub fn interpreter(self, interpreter: &str) -> Self {
        self.param(keys::INTERPRETER, interpreter)
    }

    pub fn copy(self, source: &str, target: &str) -> Self {
        self.param(keys::COPY_SOURCE, source)
            .param(keys::COPY_TARGET, target)
    }

    pub fn log_file(mut self, path: &Path) -> Self {
        self.request.log_file = Some(path.to_path_buf());
        self
    }

    pub fn build(self) -> JobRequest {
        self.request
    }

    /// The request as the scheduler would send it: one JSON line.
    pub fn to_json_line(self) -> String {
        let mut line =
            serde_json::to_string(&self.request).expect("JobRequest serializes to JSON");
        line.push('\n');
        line
    }
}

impl Default for JobRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
