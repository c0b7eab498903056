// src/protocol/reader.rs

//! Incremental job-request reader.

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, trace};

use crate::errors::{DockjobError, Result};
use crate::protocol::model::JobRequest;

const READ_CHUNK: usize = 8 * 1024;

/// Accumulates raw input until it contains one complete `JobRequest`.
///
/// The buffer is plain bytes: a fragment boundary may fall inside a
/// multi-byte UTF-8 sequence. Once a request has been produced the
/// accumulator is finished and ignores any further input.
#[derive(Debug, Default)]
pub struct JobAccumulator {
    buf: Vec<u8>,
    complete: bool,
}

impl JobAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fragment and try to parse.
    ///
    /// Returns `Some` exactly once, for the fragment that completes the
    /// request. A failed parse only means "keep reading".
    pub fn push(&mut self, fragment: &[u8]) -> Option<JobRequest> {
        if self.complete {
            trace!(len = fragment.len(), "ignoring input after complete request");
            return None;
        }

        self.buf.extend_from_slice(fragment);

        loop {
            let next = {
                let mut stream =
                    serde_json::Deserializer::from_slice(&self.buf).into_iter::<JobRequest>();
                stream
                    .next()
                    .map(|parsed| parsed.map(|request| (request, stream.byte_offset())))
            };

            match next {
                Some(Ok((request, consumed))) => {
                    debug!(bytes = consumed, "parsed job request");
                    self.complete = true;
                    self.buf = Vec::new();
                    return Some(request);
                }
                Some(Err(err)) if err.is_eof() => {
                    trace!(buffered = self.buf.len(), "request incomplete; waiting for more input");
                    return None;
                }
                Some(Err(err)) => {
                    // A complete line that is not a request can never become
                    // one; drop it so a later line still gets a chance.
                    match self.buf.iter().position(|b| *b == b'\n') {
                        Some(pos) => {
                            debug!(error = %err, skipped = pos + 1, "discarding unparseable input line");
                            self.buf = self.buf.split_off(pos + 1);
                        }
                        None => {
                            trace!(error = %err, "unparseable partial line; waiting for more input");
                            return None;
                        }
                    }
                }
                None => return None,
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn buffered_len(&self) -> usize {
        self.buf.len()
    }
}

/// Read from `input` until one complete `JobRequest` has been assembled.
///
/// Stops reading as soon as the request parses; anything after it stays
/// unread. End of input before that point is a protocol error.
pub async fn read_job_request<R>(input: &mut R) -> Result<JobRequest>
where
    R: AsyncRead + Unpin,
{
    let mut acc = JobAccumulator::new();
    let mut chunk = vec![0u8; READ_CHUNK];

    loop {
        let n = input.read(&mut chunk).await?;
        if n == 0 {
            return Err(DockjobError::ProtocolError(format!(
                "input closed before a complete job request ({} bytes buffered)",
                acc.buffered_len()
            )));
        }

        if let Some(request) = acc.push(&chunk[..n]) {
            return Ok(request);
        }
    }
}
