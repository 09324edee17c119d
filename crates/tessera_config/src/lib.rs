//! Parsing and validation of `tessera.toml` tool configuration files.
//!
//! The configuration controls the optional circuit-library checks and the
//! naming conventions of the pre-configured fabric netlist. Every section is
//! optional; a missing file yields [`ToolConfig::default`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
