// src/config/mod.rs

//! Adapter configuration for dockjob.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Locate and load a config file from disk (`loader.rs`).
//! - Validate basic invariants like non-empty binaries and absolute paths (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, resolve_config};
pub use model::{AdapterConfig, DockerSection, RawAdapterConfig, ScriptSection};
pub use validate::validate_config;
