mod types;

pub use types::{GroupMode, ParserConfig};

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// Get the config directory path
fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("zentry"))
}

/// Path of the user config file, `~/.config/zentry/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Parse config file content.
pub fn parse_config(content: &str) -> Result<ParserConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load config from an explicit path.
/// Returns the defaults if the file doesn't exist.
pub fn load_config_from(path: &Path) -> Result<ParserConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", path);
        return Ok(ParserConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    let config = parse_config(&content)?;
    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}

/// Load the user config from `~/.config/zentry/config.toml`.
pub fn load_parser_config() -> Result<ParserConfig, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoDirFound)?;
    load_config_from(&path)
}

/// Load the user config, logging a warning and falling back to the defaults
/// if anything fails.
pub fn parser_config() -> ParserConfig {
    match load_parser_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}, using defaults", e);
            ParserConfig::default()
        }
    }
}
