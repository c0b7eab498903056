// src/protocol/mod.rs

//! Scheduler wire protocol.
//!
//! One JSON job request arrives on STDIN (possibly split across many reads);
//! one JSON result record leaves on STDOUT.
//!
//! - [`model`] holds `JobRequest`, `JobParams` and `JobResult`.
//! - [`reader`] owns the fragment accumulator and the async read loop.
//! - [`writer`] emits the single, flushed result record.

pub mod model;
pub mod reader;
pub mod writer;

pub use model::{JobParams, JobRequest, JobResult, keys};
pub use reader::{JobAccumulator, read_job_request};
pub use writer::ResultWriter;
