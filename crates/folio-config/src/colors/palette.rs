//! Resolved palette used by the page layout.

use folio_common::types::Color;
use tracing::warn;

use super::parse_color;
use crate::schema::ColorConfig;

/// Parsed form of [`ColorConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub background: Color,
    pub surface: Color,
    pub secondary: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
}

impl Palette {
    /// Parses every entry, substituting the default for any value that
    /// fails to parse.
    pub fn resolve(config: &ColorConfig) -> Self {
        let defaults = ColorConfig::default();
        let pick = |name: &str, value: &str, fallback: &str| match parse_color(value) {
            Ok(c) => c,
            Err(e) => {
                warn!("colors.{name}: {e}, using {fallback}");
                parse_color(fallback).unwrap_or(Color::WHITE)
            }
        };
        Self {
            primary: pick("primary", &config.primary, &defaults.primary),
            accent: pick("accent", &config.accent, &defaults.accent),
            success: pick("success", &config.success, &defaults.success),
            warning: pick("warning", &config.warning, &defaults.warning),
            error: pick("error", &config.error, &defaults.error),
            background: pick("background", &config.background, &defaults.background),
            surface: pick("surface", &config.surface, &defaults.surface),
            secondary: pick("secondary", &config.secondary, &defaults.secondary),
            text: pick("text", &config.text, &defaults.text),
            text_muted: pick("text_muted", &config.text_muted, &defaults.text_muted),
            border: pick("border", &config.border, &defaults.border),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::resolve(&ColorConfig::default())
    }
}
