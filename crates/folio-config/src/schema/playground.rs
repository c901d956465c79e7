//! 3D playground configuration.

use serde::{Deserialize, Serialize};

/// Initial scene and render-surface settings for the playground canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Scene shown on startup: `text`, `spheres`, or `geometry`.
    /// Unknown names fall back to `text`.
    pub default_scene: String,
    /// Stars in the playground backdrop (valid range: 0-20000).
    pub star_count: u32,
    /// Vertical field of view in degrees (valid range: 30-120).
    pub fov: f64,
    /// Auto-rotate speed for the text scene (valid range: 0.0-10.0).
    pub auto_rotate_speed: f64,
    pub enable_zoom: bool,
    pub enable_pan: bool,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            default_scene: "text".into(),
            star_count: 3000,
            fov: 75.0,
            auto_rotate_speed: 0.5,
            enable_zoom: true,
            enable_pan: true,
        }
    }
}
