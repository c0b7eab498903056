// src/lib.rs

pub mod cli;
pub mod config;
pub mod container;
pub mod dispatch;
pub mod errors;
pub mod exec;
pub mod joblog;
pub mod logging;
pub mod protocol;
pub mod script;
pub mod volume;

use std::future::Future;
use std::path::Path;

use anyhow::Result;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{error, info, warn};

use crate::cli::CliArgs;
use crate::config::{AdapterConfig, resolve_config};
use crate::dispatch::dispatch;
use crate::errors::DockjobError;
use crate::exec::{CommandBackend, DockerCli, RealCommandBackend};
use crate::joblog::JobLog;
use crate::protocol::{JobResult, ResultWriter, read_job_request};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - reading the job request from STDIN
/// - the docker CLI backend
/// - dispatch, raced against SIGINT/SIGTERM
/// - writing the single result record to STDOUT
pub async fn run(args: CliArgs) -> Result<()> {
    let mut stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let config = match resolve_config(args.config.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid adapter configuration");
            let result = fail_after_reading(&mut stdin, &err).await;
            ResultWriter::new(stdout).write(&result).await?;
            return Ok(());
        }
    };

    let backend = RealCommandBackend::new(config.command_timeout());
    let mut docker = DockerCli::new(config.docker_binary(), backend);

    serve_one_job(&mut stdin, stdout, &mut docker, &config, shutdown_signal()).await?;
    Ok(())
}

/// Read one request from `input`, run it, and write its result to `output`.
///
/// `cancel` resolving before the job finishes aborts it: the in-flight
/// command is dropped (and killed) and a cancellation failure is reported
/// instead. Returns the result that was written.
pub async fn serve_one_job<R, W, B, C>(
    input: &mut R,
    output: W,
    docker: &mut DockerCli<B>,
    config: &AdapterConfig,
    cancel: C,
) -> errors::Result<JobResult>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    B: CommandBackend,
    C: Future<Output = ()>,
{
    let mut writer = ResultWriter::new(output);

    let result = match read_job_request(input).await {
        Ok(request) => {
            info!(log_file = ?request.log_file, "job request received");
            tokio::select! {
                result = dispatch(&request, docker, config) => result,
                () = cancel => {
                    warn!("job cancelled before completion");
                    let err = DockjobError::Cancelled;
                    JobLog::new(request.log_file.clone()).line(format!("Error: {err}"));
                    JobResult::failure(err.to_string())
                }
            }
        }
        Err(err) => {
            error!(error = %err, "could not read job request");
            JobResult::failure(err.to_string())
        }
    };

    writer.write(&result).await?;
    Ok(result)
}

/// Still consume the request so the failure lands in the job's log file.
async fn fail_after_reading<R>(input: &mut R, err: &DockjobError) -> JobResult
where
    R: AsyncRead + Unpin,
{
    if let Ok(request) = read_job_request(input).await {
        JobLog::new(request.log_file).line(format!("Error: {err}"));
    }
    JobResult::failure(err.to_string())
}

/// Resolves on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
///
/// If a handler cannot be installed that signal is simply never observed;
/// the job keeps running.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT"),
        () = terminate => info!("received SIGTERM"),
    }
}
