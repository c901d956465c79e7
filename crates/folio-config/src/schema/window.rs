//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
    Fullscreen,
}

/// Window appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 480-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 360-4320).
    pub height: u32,
    pub startup_mode: StartupMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "TEMO | Portfolio".into(),
            width: 1280,
            height: 800,
            startup_mode: StartupMode::Windowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "TEMO | Portfolio");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
        assert_eq!(config.startup_mode, StartupMode::Windowed);
    }

    #[test]
    fn startup_mode_serialization() {
        let json = serde_json::to_string(&StartupMode::Fullscreen).unwrap();
        assert_eq!(json, "\"fullscreen\"");
        let deserialized: StartupMode = serde_json::from_str("\"maximized\"").unwrap();
        assert_eq!(deserialized, StartupMode::Maximized);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("width = 1600\n").unwrap();
        assert_eq!(config.width, 1600);
        assert_eq!(config.height, 800);
        assert_eq!(config.title, "TEMO | Portfolio");
    }
}
