//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = FolioConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_font_size_out_of_range() {
    let mut config = FolioConfig::default();
    config.font.size = 5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("font.size"));
}

#[test]
fn catches_type_interval_zero() {
    let mut config = FolioConfig::default();
    config.hero.type_interval_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("hero.type_interval_ms"));
}

#[test]
fn catches_unknown_default_scene() {
    let mut config = FolioConfig::default();
    config.playground.default_scene = "galaxy".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("playground.default_scene"));
    assert!(err.contains("galaxy"));
}

#[test]
fn accepts_every_known_scene() {
    for scene in ["text", "spheres", "geometry"] {
        let mut config = FolioConfig::default();
        config.playground.default_scene = scene.into();
        assert!(validate(&config).is_ok(), "{scene}");
    }
}

#[test]
fn catches_fov_out_of_range() {
    let mut config = FolioConfig::default();
    config.playground.fov = 170.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("playground.fov"));
}

#[test]
fn catches_nan_durations() {
    let mut config = FolioConfig::default();
    config.animation.reveal_duration = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.reveal_duration"));
}

#[test]
fn catches_invalid_color() {
    let mut config = FolioConfig::default();
    config.colors.accent = "purple".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("colors.accent"));
}

#[test]
fn catches_frame_rate_out_of_range() {
    let mut config = FolioConfig::default();
    config.performance.frame_rate = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("performance.frame_rate"));
}

#[test]
fn catches_zero_notification_capacity() {
    let mut config = FolioConfig::default();
    config.notifications.capacity = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("notifications.capacity"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = FolioConfig::default();
    config.font.size = 100;
    config.window.width = 10;
    config.animation.wheel_line_px = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("font.size"));
    assert!(err.contains("window.width"));
    assert!(err.contains("animation.wheel_line_px"));
    assert_eq!(err.matches("; ").count(), 2);
}

#[test]
fn sanitize_clamps_huge_star_count() {
    let mut config = FolioConfig::default();
    config.playground.star_count = 4_000_000_000;
    config.hero.star_count = 4_000_000_000;
    let err = sanitize(&mut config).unwrap_err().to_string();
    assert!(err.contains("playground.star_count"));
    assert_eq!(config.playground.star_count, 20_000);
    assert_eq!(config.hero.star_count, 20_000);
    assert!(validate(&config).is_ok());
}

#[test]
fn sanitize_clamps_low_values_and_nan() {
    let mut config = FolioConfig::default();
    config.font.size = 1;
    config.animation.reveal_duration = f64::NAN;
    config.playground.fov = 500.0;
    assert!(sanitize(&mut config).is_err());
    assert_eq!(config.font.size, 10);
    assert_eq!(config.animation.reveal_duration, 0.0);
    assert_eq!(config.playground.fov, 120.0);
}

#[test]
fn validate_leaves_config_untouched() {
    let mut config = FolioConfig::default();
    config.window.width = 10;
    assert!(validate(&config).is_err());
    assert_eq!(config.window.width, 10);
}
