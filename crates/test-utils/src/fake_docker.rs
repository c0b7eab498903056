use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use dockjob::errors::{DockjobError, Result};
use dockjob::exec::{CommandBackend, CommandOutput, CommandSpec, DockerCli};

/// A script file as it looked when `docker cp` picked it up.
#[derive(Debug, Clone)]
pub struct CopiedFile {
    pub local: PathBuf,
    pub remote: String,
    /// `None` if the local file did not exist at copy time.
    pub contents: Option<String>,
}

#[derive(Debug, Default)]
struct FakeState {
    running: Vec<String>,
    tmp_dir: String,
    failures: Vec<(String, String)>,
    calls: Vec<CommandSpec>,
    copied: Vec<CopiedFile>,
}

/// A fake container platform that:
/// - records every command it is asked to run
/// - answers `ps` with a fixed container list and the `TMPDIR` query with a
///   fixed directory
/// - fails any command whose joined arguments contain a configured needle
/// - succeeds with empty output otherwise.
///
/// Clones share state, so a test can keep one handle and give another to
/// `DockerCli`.
#[derive(Debug, Clone, Default)]
pub struct FakeDocker {
    state: Arc<Mutex<FakeState>>,
}

impl FakeDocker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_running<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state
            .lock()
            .unwrap()
            .running
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Value the container reports for `$TMPDIR` (default: unset).
    pub fn with_tmp_dir(self, dir: &str) -> Self {
        self.state.lock().unwrap().tmp_dir = dir.to_string();
        self
    }

    /// Fail every command whose space-joined args contain `needle`.
    pub fn fail_on(self, needle: &str, message: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failures
            .push((needle.to_string(), message.to_string()));
        self
    }

    /// A `DockerCli` driving a clone of this fake.
    pub fn cli(&self) -> DockerCli<FakeDocker> {
        DockerCli::new("docker", self.clone())
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Argument vectors of all calls whose first argument is `subcommand`.
    pub fn calls_to(&self, subcommand: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|c| c.args.first().map(String::as_str) == Some(subcommand))
            .map(|c| c.args)
            .collect()
    }

    /// `docker exec` calls, as the argv run inside the container.
    pub fn execs_in(&self, container: &str) -> Vec<Vec<String>> {
        self.calls_to("exec")
            .into_iter()
            .filter(|args| args.get(1).map(String::as_str) == Some(container))
            .map(|args| args[2..].to_vec())
            .collect()
    }

    pub fn copied(&self) -> Vec<CopiedFile> {
        self.state.lock().unwrap().copied.clone()
    }
}

impl CommandBackend for FakeDocker {
    fn run(
        &mut self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>> {
        let state = Arc::clone(&self.state);

        Box::pin(async move {
            let mut st = state.lock().unwrap();
            st.calls.push(spec.clone());

            let joined = spec.args.join(" ");
            if let Some((_, message)) = st
                .failures
                .iter()
                .find(|(needle, _)| joined.contains(needle.as_str()))
            {
                return Err(DockjobError::CommandFailed {
                    command: spec.to_string(),
                    message: message.clone(),
                });
            }

            match spec.args.first().map(String::as_str) {
                Some("ps") => Ok(CommandOutput::new(st.running.join("\n"))),
                Some("exec") if joined.contains("TMPDIR") => {
                    Ok(CommandOutput::new(st.tmp_dir.clone()))
                }
                Some("cp") => {
                    let local = PathBuf::from(&spec.args[1]);
                    let remote = spec.args[2]
                        .split_once(':')
                        .map(|(_, path)| path.to_string())
                        .unwrap_or_default();
                    let contents = std::fs::read_to_string(&local).ok();
                    st.copied.push(CopiedFile {
                        local,
                        remote,
                        contents,
                    });
                    Ok(CommandOutput::default())
                }
                _ => Ok(CommandOutput::default()),
            }
        })
    }
}
