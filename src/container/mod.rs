// src/container/mod.rs

//! Container resolution: human-supplied name prefix → running container.

pub mod resolver;

pub use resolver::{ContainerRef, resolve_container, select_by_prefix};
