//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::GeneratorConfig;
use std::collections::BTreeSet;
use std::path::Path;

/// The configuration file looked up in a working directory.
pub const CONFIG_FILE_NAME: &str = "vgen.toml";

/// Loads `<dir>/vgen.toml`, falling back to defaults when the file is absent.
pub fn load_config(dir: &Path) -> Result<GeneratorConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no configuration file, using defaults");
        return Ok(GeneratorConfig::default());
    }
    load_config_file(&path)
}

/// Loads and validates a specific configuration file, which must exist.
pub fn load_config_file(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &GeneratorConfig) -> Result<(), ConfigError> {
    if config.library.output.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "library.output must not be empty".to_string(),
        ));
    }
    if config.library.width == 0 {
        return Err(ConfigError::ValidationError(
            "library.width must be positive".to_string(),
        ));
    }

    let mut seen = BTreeSet::new();
    for op in &config.operations {
        if !vgen_common::is_identifier(&op.name) {
            return Err(ConfigError::ValidationError(format!(
                "operation name '{}' is not a legal identifier",
                op.name
            )));
        }
        if op.expr.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "operation '{}' has an empty expression",
                op.name
            )));
        }
        if !seen.insert(op.name.to_ascii_lowercase()) {
            return Err(ConfigError::ValidationError(format!(
                "operation '{}' is defined more than once",
                op.name
            )));
        }
    }
    Ok(())
}
