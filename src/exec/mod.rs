// src/exec/mod.rs

//! Process execution layer.
//!
//! Every interaction with the container platform is one external command run
//! to completion through this module.
//!
//! - [`command`] describes a command (`CommandSpec`) and its captured output.
//! - [`runner`] spawns it with `tokio::process::Command` under a bounded wait.
//! - [`backend`] provides the `CommandBackend` trait and the production
//!   `RealCommandBackend`; tests replace it with a scripted fake.
//! - [`docker`] is the typed `docker ...` surface the job logic talks to.

pub mod backend;
pub mod command;
pub mod docker;
pub mod runner;

pub use backend::{CommandBackend, RealCommandBackend};
pub use command::{CommandOutput, CommandSpec, OutputMode};
pub use docker::{DockerCli, VolumeMount};
pub use runner::run_command;
