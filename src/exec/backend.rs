// src/exec/backend.rs

//! Pluggable command backend abstraction.
//!
//! Job logic talks to a `CommandBackend` instead of spawning processes
//! directly. This makes it easy to swap in a fake platform in tests while
//! keeping the production implementation in [`runner`](super::runner).
//!
//! - `RealCommandBackend` is the default implementation used by `dockjob`.
//!   It runs each command with `run_command` under the configured timeout.
//! - Tests provide their own `CommandBackend` that records argument vectors
//!   and answers with canned output.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::errors::Result;
use crate::exec::command::{CommandOutput, CommandSpec};

use super::runner::run_command;

/// Trait abstracting how external commands are executed.
pub trait CommandBackend: Send {
    /// Run one command to completion.
    ///
    /// Implementations must report a nonzero exit as an error; callers treat
    /// `Ok` as "the command succeeded".
    fn run(
        &mut self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>>;
}

/// Real command backend used in production.
#[derive(Debug, Clone, Default)]
pub struct RealCommandBackend {
    timeout: Option<Duration>,
}

impl RealCommandBackend {
    /// `timeout = None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl CommandBackend for RealCommandBackend {
    fn run(
        &mut self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>> {
        let timeout = self.timeout;
        Box::pin(async move { run_command(&spec, timeout).await })
    }
}
