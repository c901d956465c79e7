//! Folio configuration system.
//!
//! TOML configuration with validation and live reload. All sections use
//! defaults so partial configs work out of the box.
//!
//! ```rust,no_run
//! use folio_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod colors;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use colors::{parse_color, Palette};
pub use reload::ReloadManager;
pub use schema::{FolioConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use folio_common::ConfigError;
use std::path::{Path, PathBuf};

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default file is created from a commented template on first run.
pub fn load_config(path: Option<&Path>) -> Result<FolioConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Path that [`load_config`] reads for the given override.
pub fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => toml_loader::default_config_path(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FolioConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&FolioConfig::default());
        for section in [
            "colors",
            "font",
            "window",
            "hero",
            "playground",
            "animation",
            "notifications",
            "performance",
            "logging",
            "advanced",
        ] {
            assert!(json.contains(&format!("\"{section}\"")), "{section}");
        }
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&FolioConfig::default());
        let parsed: FolioConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.hero.name, "TEMO");
        assert_eq!(parsed.colors.primary, "#3b82f6");
        assert_eq!(parsed.font.size, 16);
    }

    #[test]
    fn load_config_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[playground]\ndefault_scene = \"spheres\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.playground.default_scene, "spheres");
        assert_eq!(resolve_config_path(Some(&path)).unwrap(), path);
    }

    #[test]
    fn reload_manager_reads_current_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[hero]\nname = \"Ada\"\n").unwrap();
        let manager = ReloadManager::start(path).unwrap();
        let config = manager.reload_now().unwrap();
        assert_eq!(config.hero.name, "Ada");
    }
}
