// src/dispatch.rs

//! Job dispatcher: one `JobRequest` in, one `JobResult` out.

use tracing::{error, info};

use crate::config::AdapterConfig;
use crate::container::resolve_container;
use crate::errors::{DockjobError, Result};
use crate::exec::{CommandBackend, DockerCli};
use crate::joblog::JobLog;
use crate::protocol::{JobParams, JobRequest, JobResult, keys};
use crate::script::deliver_script;
use crate::volume::copy_between_volumes;

/// Which operation a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobRoute<'a> {
    VolumeCopy {
        source: &'a str,
        target: &'a str,
    },
    Script {
        prefix: &'a str,
        script: &'a str,
        interpreter: Option<&'a str>,
    },
}

impl<'a> JobRoute<'a> {
    /// Route from parameters alone, before anything touches the platform.
    ///
    /// A complete `copy_source`/`copy_target` pair wins over the script
    /// parameters. Otherwise both `container_prefix` and `script` are
    /// required.
    pub fn from_params(params: &'a JobParams) -> Result<Self> {
        if let (Some(source), Some(target)) = (params.copy_source(), params.copy_target()) {
            return Ok(JobRoute::VolumeCopy { source, target });
        }

        let prefix = params
            .container_prefix()
            .ok_or(DockjobError::MissingParameter(keys::CONTAINER_PREFIX))?;
        let script = params
            .script()
            .ok_or(DockjobError::MissingParameter(keys::SCRIPT))?;

        Ok(JobRoute::Script {
            prefix,
            script,
            interpreter: params.interpreter(),
        })
    }
}

/// Execute `request` and produce its single result.
///
/// Never fails: every error is folded into a `code = 1` result and, when the
/// request names a log file, an `Error: ...` line in it.
pub async fn dispatch<B>(
    request: &JobRequest,
    docker: &mut DockerCli<B>,
    config: &AdapterConfig,
) -> JobResult
where
    B: CommandBackend,
{
    let log = JobLog::new(request.log_file.clone());

    match run_route(request, docker, config, &log).await {
        Ok(result) => result,
        Err(err) => {
            error!(error = %err, "job failed");
            log.line(format!("Error: {err}"));
            JobResult::failure(err.to_string())
        }
    }
}

async fn run_route<B>(
    request: &JobRequest,
    docker: &mut DockerCli<B>,
    config: &AdapterConfig,
    log: &JobLog,
) -> Result<JobResult>
where
    B: CommandBackend,
{
    match JobRoute::from_params(&request.params)? {
        JobRoute::VolumeCopy { source, target } => {
            copy_between_volumes(docker, source, target, config, log).await?;
            info!(source, target, "volume copy finished");
            Ok(JobResult::success(format!("Copied {source} to {target}.")))
        }
        JobRoute::Script {
            prefix,
            script,
            interpreter,
        } => {
            let Some(container) = resolve_container(docker, prefix).await? else {
                log.line(format!("No container found with prefix '{prefix}'"));
                return Ok(JobResult::failure(format!(
                    "No container found with prefix '{prefix}'."
                )));
            };

            log.line(format!(
                "Found container: {} (prefix '{}')",
                container.name, container.prefix
            ));
            let strategy =
                deliver_script(docker, &container, script, interpreter, config, log).await?;
            info!(
                container = %container.name,
                prefix = %container.prefix,
                %strategy,
                "script finished"
            );
            Ok(JobResult::success("Command executed successfully."))
        }
    }
}
