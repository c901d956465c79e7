//! Validation for colors, font, and window.

use crate::colors::validate_color;
use crate::schema::FolioConfig;

use super::helpers::{check_range, check_range_f64};

pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &FolioConfig) {
    let c = &config.colors;
    let entries = [
        ("colors.primary", &c.primary),
        ("colors.accent", &c.accent),
        ("colors.success", &c.success),
        ("colors.warning", &c.warning),
        ("colors.error", &c.error),
        ("colors.background", &c.background),
        ("colors.surface", &c.surface),
        ("colors.secondary", &c.secondary),
        ("colors.text", &c.text),
        ("colors.text_muted", &c.text_muted),
        ("colors.border", &c.border),
    ];
    for (name, value) in entries {
        if !validate_color(value) {
            errors.push(format!("{name} = '{value}' is not a valid color"));
        }
    }
}

pub(crate) fn validate_font(errors: &mut Vec<String>, config: &mut FolioConfig) {
    check_range(errors, "font.size", &mut config.font.size, 10, 32);
    check_range_f64(
        errors,
        "font.line_height",
        &mut config.font.line_height,
        1.0,
        3.0,
    );
    if config.font.family.trim().is_empty() {
        errors.push("font.family must not be empty".into());
    }
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &mut FolioConfig) {
    check_range(errors, "window.width", &mut config.window.width, 480, 7680);
    check_range(errors, "window.height", &mut config.window.height, 360, 4320);
}
