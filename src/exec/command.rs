// src/exec/command.rs

use std::fmt;

/// Where a command's stdout/stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Collect stdout for the caller; stderr is kept for error text.
    Capture,
    /// Forward both streams live to the adapter's own stdout/stderr.
    Inherit,
}

/// One external command as an argument vector. Nothing is ever passed
/// through a host shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub output: OutputMode,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, output: OutputMode) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            output,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

const DISPLAY_ARG_MAX: usize = 60;

/// Human-readable command line for logs and error descriptions. Long
/// arguments (inline scripts) are shortened.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            let shown: String = if arg.chars().count() > DISPLAY_ARG_MAX {
                let head: String = arg.chars().take(DISPLAY_ARG_MAX - 3).collect();
                format!("{head}...")
            } else {
                arg.clone()
            };

            if shown.is_empty() || shown.chars().any(char::is_whitespace) {
                write!(f, " {shown:?}")?;
            } else {
                write!(f, " {shown}")?;
            }
        }
        Ok(())
    }
}

/// Result of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Captured stdout (lossy UTF-8). Empty for `OutputMode::Inherit`.
    pub stdout: String,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
        }
    }
}
