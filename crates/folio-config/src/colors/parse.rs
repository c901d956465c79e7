//! Low-level hex and rgba string parsing.

use folio_common::types::Color;
use regex::Regex;
use std::sync::LazyLock;

/// `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// `rgb(r,g,b)` or `rgba(r,g,b,a)` with float or int alpha.
pub(crate) static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = s.strip_prefix('#')?;
    if hex.len() == 3 {
        let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
        let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
        let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
        return Some(Color::from_rgba(r * 17, g * 17, b * 17, 255));
    }
    Color::from_hex(s)
}

pub(super) fn parse_rgba(s: &str) -> Option<Color> {
    let caps = RGBA_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    let a = match caps.get(4) {
        None => 255,
        Some(m) if m.as_str().contains('.') => {
            let a: f64 = m.as_str().parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            (a * 255.0).round() as u8
        }
        Some(m) => {
            let a: u32 = m.as_str().parse().ok()?;
            match a {
                0 => 0,
                1 => 255,
                2..=255 => a as u8,
                _ => return None,
            }
        }
    };

    Some(Color::from_rgba(r, g, b, a))
}
