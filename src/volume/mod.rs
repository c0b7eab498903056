// src/volume/mod.rs

//! Volume-to-volume copy through a disposable helper container.
//!
//! - [`spec`] parses `volume:path[/*]` parameters into `VolumeSpec`.
//! - [`copy`] builds and runs the helper container.

pub mod copy;
pub mod spec;

pub use copy::{COPY_SCRIPT, copy_between_volumes, copy_invocation};
pub use spec::VolumeSpec;
