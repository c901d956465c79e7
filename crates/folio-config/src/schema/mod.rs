//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the page ships with.

mod animation;
mod colors;
mod font;
mod hero;
mod playground;
mod system;
mod window;

pub use animation::*;
pub use colors::*;
pub use font::*;
pub use hero::*;
pub use playground::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FolioConfig {
    pub colors: ColorConfig,
    pub font: FontConfig,
    pub window: WindowConfig,
    pub hero: HeroConfig,
    pub playground: PlaygroundConfig,
    pub animation: AnimationConfig,
    pub notifications: NotificationsConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
    pub advanced: AdvancedConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_brand_colors() {
        let config = FolioConfig::default();
        assert_eq!(config.colors.primary, "#3b82f6");
        assert_eq!(config.colors.accent, "#8b5cf6");
        assert_eq!(config.colors.success, "#10b981");
    }

    #[test]
    fn default_config_has_hero_timing() {
        let config = FolioConfig::default();
        assert_eq!(config.hero.name, "TEMO");
        assert_eq!(config.hero.typed_text, "Full-Stack Developer");
        assert_eq!(config.hero.type_interval_ms, 100);
        assert_eq!(config.hero.cursor_blink_ms, 500);
        assert_eq!(config.hero.star_count, 5000);
    }

    #[test]
    fn default_config_has_playground_settings() {
        let config = FolioConfig::default();
        assert_eq!(config.playground.default_scene, "text");
        assert_eq!(config.playground.star_count, 3000);
        assert!((config.playground.fov - 75.0).abs() < f64::EPSILON);
        assert!((config.playground.auto_rotate_speed - 0.5).abs() < f64::EPSILON);
        assert!(config.playground.enable_zoom);
        assert!(config.playground.enable_pan);
    }

    #[test]
    fn default_config_has_animation_timing() {
        let config = FolioConfig::default();
        assert!((config.animation.reveal_duration - 0.6).abs() < f64::EPSILON);
        assert!((config.animation.stagger - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.animation.reveal_offset, 30);
        assert!(!config.animation.reduced_motion);
    }

    #[test]
    fn default_config_system_sections() {
        let config = FolioConfig::default();
        assert_eq!(config.notifications.capacity, 3);
        assert_eq!(config.notifications.ttl_secs, 5);
        assert_eq!(config.performance.frame_rate, 60);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.advanced.live_reload);
        assert!(!config.advanced.developer.show_fps);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let toml_str = r#"
[playground]
default_scene = "geometry"

[advanced.developer]
show_fps = true
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.playground.default_scene, "geometry");
        assert_eq!(config.playground.star_count, 3000);
        assert!(config.advanced.developer.show_fps);
        assert!(config.advanced.live_reload);
        assert_eq!(config.hero.name, "TEMO");
    }

    #[test]
    fn log_level_serialization() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
        assert_eq!(level.as_str(), "debug");
    }

    #[test]
    fn schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }
}
