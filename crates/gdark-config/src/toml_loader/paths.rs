//! Settings path resolution.

use gdark_common::ConfigError;
use std::path::PathBuf;

pub(super) const APP_NAME: &str = "ghidra-dark";

/// Get the platform-specific default settings file path.
///
/// - Linux: `$XDG_CONFIG_HOME/ghidra-dark/config.toml`
/// - macOS: `~/Library/Application Support/ghidra-dark/config.toml`
/// - Windows: `%APPDATA%\ghidra-dark\config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join(APP_NAME).join("config.toml"))
}
