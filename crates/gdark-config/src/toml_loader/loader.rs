//! Core TOML settings loading: read from path or platform default.

use crate::schema::DarkConfig;
use crate::validation;
use gdark_common::ConfigError;
use std::path::Path;
use tracing::{debug, info};

use super::paths::default_config_path;

/// Load settings from a specific TOML file path.
///
/// Missing fields take their defaults. The parsed settings are validated
/// before being returned.
pub fn load_from_path(path: &Path) -> Result<DarkConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: DarkConfig = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!("failed to parse {}: {e}", path.display()))
    })?;

    validation::validate(&config)?;

    info!("loaded settings from {}", path.display());
    Ok(config)
}

/// Load settings from the platform default path, or defaults when the
/// file does not exist. Nothing is written to disk.
pub fn load_default() -> Result<DarkConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no settings at {}, using defaults", path.display());
            Ok(DarkConfig::default())
        }
        other => other,
    }
}

/// Load from `path` when given (it must exist), else from the default path.
pub fn load(path: Option<&Path>) -> Result<DarkConfig, ConfigError> {
    match path {
        Some(p) => load_from_path(p),
        None => load_default(),
    }
}
