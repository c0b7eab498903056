// src/protocol/writer.rs

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::errors::{DockjobError, Result};
use crate::protocol::model::{JobResult, WireResult};

/// Writes the one and only result record for this process.
///
/// The record is a single JSON line, flushed immediately so the scheduler
/// sees it without waiting for process exit.
pub struct ResultWriter<W> {
    out: W,
    written: bool,
}

impl<W> ResultWriter<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: false,
        }
    }

    /// Emit `result`. A second call fails with `ResultAlreadyWritten` and
    /// writes nothing.
    pub async fn write(&mut self, result: &JobResult) -> Result<()> {
        if self.written {
            return Err(DockjobError::ResultAlreadyWritten);
        }

        let mut line = serde_json::to_vec(&WireResult::from(result))?;
        line.push(b'\n');

        self.out.write_all(&line).await?;
        self.out.flush().await?;
        self.written = true;

        info!(
            code = result.code,
            description = %result.description,
            "job result written"
        );
        Ok(())
    }

    pub fn is_written(&self) -> bool {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
