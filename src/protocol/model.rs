// src/protocol/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Parameter names the adapter understands.
pub mod keys {
    pub const CONTAINER_PREFIX: &str = "container_prefix";
    pub const SCRIPT: &str = "script";
    pub const INTERPRETER: &str = "interpreter";
    pub const COPY_SOURCE: &str = "copy_source";
    pub const COPY_TARGET: &str = "copy_target";
}

/// A single job as delivered by the scheduler.
///
/// The scheduler sends many more top-level fields (ids, hostnames, timing);
/// everything except `params` and `log_file` is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct JobRequest {
    #[serde(default)]
    pub params: JobParams,

    /// Diagnostic log appended to by the adapter. Never created by us.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

/// Free-form job parameters.
///
/// Values are kept as raw JSON so an unexpected type on an unrelated key
/// cannot make the whole request unparseable.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(transparent)]
pub struct JobParams(BTreeMap<String, serde_json::Value>);

impl JobParams {
    /// String value for `key`. Absent, `null`, non-string and empty values
    /// all read as `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn container_prefix(&self) -> Option<&str> {
        self.get(keys::CONTAINER_PREFIX)
    }

    pub fn script(&self) -> Option<&str> {
        self.get(keys::SCRIPT)
    }

    pub fn interpreter(&self) -> Option<&str> {
        self.get(keys::INTERPRETER)
    }

    pub fn copy_source(&self) -> Option<&str> {
        self.get(keys::COPY_SOURCE)
    }

    pub fn copy_target(&self) -> Option<&str> {
        self.get(keys::COPY_TARGET)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0
            .insert(key.into(), serde_json::Value::String(value.into()));
    }
}

/// Terminal outcome of a job. Exactly one is written per process.
///
/// `complete` is implicit: this adapter never reports partial progress, so
/// every result goes out with `complete = 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
    pub code: i32,
    pub description: String,
}

impl JobResult {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            code: 0,
            description: description.into(),
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            code: 1,
            description: description.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Exact record shape the scheduler expects on STDOUT.
#[derive(Debug, Serialize)]
pub(crate) struct WireResult<'a> {
    pub complete: u8,
    pub code: i32,
    pub description: &'a str,
}

impl<'a> From<&'a JobResult> for WireResult<'a> {
    fn from(result: &'a JobResult) -> Self {
        Self {
            complete: 1,
            code: result.code,
            description: &result.description,
        }
    }
}
