//! Parsing and validation of `vgen.toml` generator configuration.
//!
//! The file is optional: every key has a default that reproduces the
//! standard library exactly. See [`GeneratorConfig`] for the layout.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
