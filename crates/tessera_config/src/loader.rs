//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ToolConfig;
use std::path::Path;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "tessera.toml";

/// Loads and validates a configuration file.
///
/// A missing file is not an error: the defaults are returned.
pub fn load_config(path: &Path) -> Result<ToolConfig, ConfigError> {
    if !path.exists() {
        return Ok(ToolConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<ToolConfig, ConfigError> {
    let config: ToolConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ToolConfig) -> Result<(), ConfigError> {
    let naming = &config.naming;
    let required = [
        ("naming.top_module", &naming.top_module),
        ("naming.instance_name", &naming.instance_name),
        ("naming.hierarchy_separator", &naming.hierarchy_separator),
        ("naming.config_chain_tail", &naming.config_chain_tail),
    ];
    for (field, value) in required {
        if value.is_empty() {
            return Err(ConfigError::MissingField(field.to_string()));
        }
    }
    if config.verilog.unused_io_value > 1 {
        return Err(ConfigError::ValidationError(format!(
            "verilog.unused_io_value must be 0 or 1, got {}",
            config.verilog.unused_io_value
        )));
    }
    Ok(())
}
