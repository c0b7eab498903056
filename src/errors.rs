// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockjobError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Malformed parameter {param}: {reason}")]
    MalformedParameter { param: &'static str, reason: String },

    #[error("Command failed: {command}: {message}")]
    CommandFailed { command: String, message: String },

    #[error("Command timed out after {secs}s: {command}")]
    CommandTimedOut { command: String, secs: u64 },

    #[error("Job cancelled by signal")]
    Cancelled,

    #[error("Protocol error: {0}")]
    ProtocolError(String),

    #[error("Job result already written")]
    ResultAlreadyWritten,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DockjobError {
    pub fn malformed(param: &'static str, reason: impl Into<String>) -> Self {
        DockjobError::MalformedParameter {
            param,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DockjobError>;
