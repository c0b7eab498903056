// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The job itself arrives on STDIN; the command line only tunes the adapter.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dockjob`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dockjob",
    version,
    about = "Run one scheduler job against a container: exec a script or copy between volumes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the adapter config file (TOML).
    ///
    /// If omitted, `DOCKJOB_CONFIG` is consulted, then `Dockjob.toml` in the
    /// current working directory (if present), then built-in defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DOCKJOB_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
