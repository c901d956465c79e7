//! Core TOML config loading: read from path or platform default.

use crate::schema::FolioConfig;
use crate::validation;
use folio_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. If validation fails, a warning
/// is logged and out-of-range values are clamped into their bounds.
pub fn load_from_path(path: &Path) -> Result<FolioConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let mut config: FolioConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::sanitize(&mut config) {
        warn!("{e}; out-of-range values clamped");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, creating it from the default template first if
/// it does not exist.
pub fn load_or_create(path: &Path) -> Result<FolioConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(FolioConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/folio/config.toml`
/// On Linux: `~/.config/folio/config.toml`
pub fn load_default() -> Result<FolioConfig, ConfigError> {
    let path = default_config_path()?;
    load_or_create(&path)
}
