//! Hero section configuration.

use serde::{Deserialize, Serialize};

/// Hero headline, typewriter timing, and backdrop scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Name shown in the "Hi, I'm ..." headline.
    pub name: String,
    /// Subtitle revealed one character at a time.
    pub typed_text: String,
    /// Delay between revealed characters in ms (valid range: 10-2000).
    pub type_interval_ms: u32,
    /// Cursor blink period in ms (valid range: 100-5000).
    pub cursor_blink_ms: u32,
    /// Stars in the hero backdrop (valid range: 0-20000).
    pub star_count: u32,
    /// Backdrop auto-rotate speed (valid range: 0.0-10.0).
    pub auto_rotate_speed: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            name: "TEMO".into(),
            typed_text: "Full-Stack Developer".into(),
            type_interval_ms: 100,
            cursor_blink_ms: 500,
            star_count: 5000,
            auto_rotate_speed: 0.5,
        }
    }
}
