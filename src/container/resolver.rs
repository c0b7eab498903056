// src/container/resolver.rs

use tracing::{debug, info};

use crate::errors::Result;
use crate::exec::{CommandBackend, DockerCli};

/// A running container picked for the current job.
///
/// Only meaningful for the lifetime of one job; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub name: String,
    pub prefix: String,
}

/// Pick the first name in `names` that starts with `prefix`.
///
/// Selection policy is "first listed wins": no secondary sort is applied, so
/// ties are broken purely by the order the platform reported. That order is
/// not documented as stable (usually most recently started first).
pub fn select_by_prefix<'a, I>(names: I, prefix: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().find(|name| name.starts_with(prefix))
}

/// List running containers and resolve `prefix` to one of them.
///
/// `Ok(None)` means nothing matched; that is an expected outcome, not an
/// error. Only a failing listing command yields `Err`.
pub async fn resolve_container<B>(
    docker: &mut DockerCli<B>,
    prefix: &str,
) -> Result<Option<ContainerRef>>
where
    B: CommandBackend,
{
    let running = docker.list_running().await?;
    debug!(prefix, candidates = running.len(), "resolving container prefix");

    let found = select_by_prefix(running.iter().map(String::as_str), prefix).map(|name| {
        ContainerRef {
            name: name.to_string(),
            prefix: prefix.to_string(),
        }
    });

    match &found {
        Some(container) => info!(prefix, container = %container.name, "container resolved"),
        None => info!(prefix, "no running container matches prefix"),
    }

    Ok(found)
}
