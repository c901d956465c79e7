//! Color parsing and palette resolution.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)`, and `rgba(r,g,b,a)`.
//! In `rgba()`, alpha may be 0.0-1.0 (float) or 0-255 (integer).

mod palette;
mod parse;

#[cfg(test)]
mod tests;

use folio_common::types::Color;
use folio_common::ConfigError;

use parse::{parse_hex, parse_rgba, HEX_RE, RGBA_RE};

pub use palette::Palette;

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s).ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgba(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid rgba color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Returns `true` if the string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGBA_RE.is_match(s) && parse_rgba(s).is_some();
    }
    false
}
