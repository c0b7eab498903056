// src/script/inline.rs

use crate::container::ContainerRef;
use crate::errors::Result;
use crate::exec::{CommandBackend, DockerCli};

/// `docker exec <container> <shell> -c <script>`.
///
/// The script is one argv element, so the target shell receives it byte for
/// byte: quotes and `$` reach it unchanged and no host shell ever sees it.
pub async fn run_inline<B>(
    docker: &mut DockerCli<B>,
    container: &ContainerRef,
    script: &str,
    shell: &str,
) -> Result<()>
where
    B: CommandBackend,
{
    docker
        .exec_inherit(&container.name, &[shell, "-c", script])
        .await
}
