// src/script/mod.rs

//! Script delivery into a resolved container.
//!
//! Two execution paths exist:
//! - [`file`]: scripts starting with a shebang are materialized as an
//!   executable file inside the container and run directly.
//! - [`inline`]: everything else is handed to a non-interactive shell as a
//!   single `-c` argument.
//!
//! Both forward the script's stdout/stderr live to the adapter's own streams.

pub mod file;
pub mod inline;

use std::fmt;

use tracing::{debug, info};

use crate::config::AdapterConfig;
use crate::container::ContainerRef;
use crate::errors::Result;
use crate::exec::{CommandBackend, DockerCli};
use crate::joblog::JobLog;

pub use file::run_as_file;
pub use inline::run_inline;

/// Marker that makes a script a standalone executable.
pub const SHEBANG: &str = "#!";

/// Which execution path a script takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStrategy {
    File,
    Inline,
}

impl DeliveryStrategy {
    /// Shebang scripts go through a file; everything else runs inline.
    pub fn for_script(script: &str) -> Self {
        if script.starts_with(SHEBANG) {
            DeliveryStrategy::File
        } else {
            DeliveryStrategy::Inline
        }
    }
}

impl fmt::Display for DeliveryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStrategy::File => f.write_str("file"),
            DeliveryStrategy::Inline => f.write_str("inline"),
        }
    }
}

/// Run `script` inside `container`, choosing the strategy from the script
/// itself.
///
/// `interpreter` is advisory only: it is logged but does not influence which
/// path is taken or how the script is started.
pub async fn deliver_script<B>(
    docker: &mut DockerCli<B>,
    container: &ContainerRef,
    script: &str,
    interpreter: Option<&str>,
    config: &AdapterConfig,
    log: &JobLog,
) -> Result<DeliveryStrategy>
where
    B: CommandBackend,
{
    let strategy = DeliveryStrategy::for_script(script);
    if let Some(interpreter) = interpreter {
        debug!(interpreter, "interpreter hint ignored for execution");
    }
    info!(container = %container.name, %strategy, "delivering script");

    match strategy {
        DeliveryStrategy::File => {
            run_as_file(docker, container, script, config.fallback_tmp_dir(), log).await?
        }
        DeliveryStrategy::Inline => run_inline(docker, container, script, config.shell()).await?,
    }

    Ok(strategy)
}
