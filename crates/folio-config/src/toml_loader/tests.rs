//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use folio_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_folio_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[hero]
name = "Ada"
type_interval_ms = 50

[colors]
primary = "#ff0000"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.hero.name, "Ada");
    assert_eq!(config.hero.type_interval_ms, 50);
    assert_eq!(config.colors.primary, "#ff0000");
    // Defaults preserved
    assert_eq!(config.hero.typed_text, "Full-Stack Developer");
    assert_eq!(config.colors.accent, "#8b5cf6");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_keeps_out_of_range_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[performance]\nframe_rate = 5\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.performance.frame_rate, 5);
}

#[test]
fn load_or_create_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.playground.default_scene, "text");

    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded.hero.name, "TEMO");
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.colors.primary, "#3b82f6");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::FolioConfig;

    let config: FolioConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.playground.default_scene, "text");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("folio"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn load_clamps_out_of_range_star_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[playground]\nstar_count = 4000000000\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.playground.star_count, 20_000);
}
