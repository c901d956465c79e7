//! Typography configuration types.

use serde::{Deserialize, Serialize};

/// Typography configuration.
///
/// `family` and `mono_family` accept a font name or one of the generic
/// names `sans-serif`, `serif`, `monospace`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub mono_family: String,
    /// Body text size in pixels (valid range: 10-32).
    pub size: u32,
    /// Line height multiplier (valid range: 1.0-3.0).
    pub line_height: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".into(),
            mono_family: "monospace".into(),
            size: 16,
            line_height: 1.5,
        }
    }
}
