// src/joblog.rs

//! Per-job diagnostic log.
//!
//! The scheduler owns the file: it creates it before spawning us and reads it
//! afterwards. We only ever append lines. A failed append is reported through
//! `tracing` and otherwise ignored; it never changes the job outcome.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct JobLog {
    path: Option<PathBuf>,
}

impl JobLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// A log that drops every line (no `log_file` in the request).
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Append `line` plus a newline.
    pub fn line(&self, line: impl AsRef<str>) {
        let Some(path) = self.path.as_deref() else {
            return;
        };

        if let Err(err) = append_line(path, line.as_ref()) {
            warn!(path = ?path, error = %err, "could not append to job log");
        }
    }
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .with_context(|| format!("opening job log {:?}", path))?;
    writeln!(file, "{line}").with_context(|| format!("writing job log {:?}", path))?;
    Ok(())
}
