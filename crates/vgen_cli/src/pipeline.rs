//! Shared pipeline helpers for CLI commands.
//!
//! Every command starts the same way: find the configuration, load it, and
//! turn it into a catalog plus library options. Relative output paths in the
//! configuration are resolved against the directory that holds it.

use std::path::{Path, PathBuf};

use vgen_config::GeneratorConfig;
use vgen_library::{Catalog, LibraryOptions};

use crate::GlobalArgs;

/// A loaded configuration and everything derived from it.
#[derive(Debug)]
pub struct Session {
    /// The configuration as loaded (or the defaults).
    pub config: GeneratorConfig,
    /// Operations to generate.
    pub catalog: Catalog,
    /// Parameter defaults for every module.
    pub options: LibraryOptions,
    /// Directory relative output paths are resolved against.
    pub root: PathBuf,
}

impl Session {
    /// Builds a session from an already loaded configuration.
    pub fn new(config: GeneratorConfig, root: PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let catalog = Catalog::from_config(&config)?;
        let options = LibraryOptions::from(&config.library);
        tracing::debug!(
            operations = catalog.len(),
            width = options.width,
            init = options.init,
            root = %root.display(),
            "session ready"
        );
        Ok(Self {
            config,
            catalog,
            options,
            root,
        })
    }

    /// The library file path: `cli_override` if given, else the configured
    /// output relative to [`Session::root`].
    pub fn output_path(&self, cli_override: Option<&str>) -> PathBuf {
        match cli_override {
            Some(path) => PathBuf::from(path),
            None => self.root.join(&self.config.library.output),
        }
    }
}

/// Loads the session selected by the global arguments.
///
/// With `--config`, a file is loaded directly and a directory is searched
/// for `vgen.toml`. Otherwise the current directory is searched, and a
/// missing file means the defaults.
pub fn load_session(global: &GlobalArgs) -> Result<Session, Box<dyn std::error::Error>> {
    match global.config {
        Some(ref config_path) => load_session_at(Path::new(config_path)),
        None => {
            let cwd = std::env::current_dir()?;
            let config = vgen_config::load_config(&cwd)?;
            Session::new(config, cwd)
        }
    }
}

/// Loads the session for an explicit config path (file or directory).
pub fn load_session_at(path: &Path) -> Result<Session, Box<dyn std::error::Error>> {
    if path.is_dir() {
        let config = vgen_config::load_config(path)?;
        return Session::new(config, path.to_path_buf());
    }
    if !path.exists() {
        return Err(format!("config file not found: {}", path.display()).into());
    }
    let config = vgen_config::load_config_file(path)?;
    let root = path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    Session::new(config, root)
}
