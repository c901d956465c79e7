//! Text measurement and grid arithmetic.
//!
//! Text is shaped by the renderer, so heights here are estimates based on
//! an average glyph advance. They only decide block placement.

/// Average advance of a proportional glyph, as a fraction of the font size.
const AVG_ADVANCE: f32 = 0.52;

/// Average advance of a monospace glyph.
const MONO_ADVANCE: f32 = 0.6;

/// Breakpoints in logical pixels.
pub const MD: f32 = 768.0;
pub const LG: f32 = 1024.0;

/// Widest content column.
pub const MAX_CONTENT: f32 = 1280.0;

pub fn text_width(text: &str, size: f32, mono: bool) -> f32 {
    let advance = if mono { MONO_ADVANCE } else { AVG_ADVANCE };
    text.chars().count() as f32 * size * advance
}

/// Lines needed to wrap `text` at `width`, breaking on spaces.
pub fn line_count(text: &str, size: f32, width: f32) -> usize {
    if text.is_empty() {
        return 0;
    }
    if width <= 0.0 {
        return text.lines().count().max(1);
    }
    let space = size * AVG_ADVANCE;
    let mut lines = 0;
    for paragraph in text.split('\n') {
        lines += 1;
        let mut used = 0.0f32;
        for word in paragraph.split(' ') {
            let w = text_width(word, size, false);
            if used > 0.0 && used + space + w > width {
                lines += 1;
                used = w;
            } else if used > 0.0 {
                used += space + w;
            } else {
                used = w;
            }
            // A single word longer than the line wraps by characters.
            while used > width {
                lines += 1;
                used -= width;
            }
        }
    }
    lines
}

pub fn text_height(text: &str, size: f32, line_height: f32, width: f32) -> f32 {
    line_count(text, size, width) as f32 * line_height
}

/// Number of grid columns at `width` for a `1 / md / lg` responsive grid.
pub fn columns_for(width: f32, md: usize, lg: usize) -> usize {
    if width >= LG {
        lg.max(1)
    } else if width >= MD {
        md.max(1)
    } else {
        1
    }
}

/// Splits `width` into `count` equal columns separated by `gap`.
/// Returns `(x_offset, column_width)` per column.
pub fn grid(width: f32, count: usize, gap: f32) -> Vec<(f32, f32)> {
    let count = count.max(1);
    let col = ((width - gap * (count - 1) as f32) / count as f32).max(0.0);
    (0..count).map(|i| (i as f32 * (col + gap), col)).collect()
}

/// Horizontal padding and width of the centred content column.
pub fn content_column(window_width: f32) -> (f32, f32) {
    let pad = if window_width >= MD { 32.0 } else { 16.0 };
    let width = (window_width - pad * 2.0).min(MAX_CONTENT).max(0.0);
    ((window_width - width) * 0.5, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(line_count("Hello", 16.0, 500.0), 1);
        assert_eq!(line_count("", 16.0, 500.0), 0);
    }

    #[test]
    fn long_text_wraps() {
        let text = "word ".repeat(100);
        let lines = line_count(text.trim(), 16.0, 200.0);
        // Five words fit on a 200px line.
        assert!((20..=30).contains(&lines), "{lines}");
    }

    #[test]
    fn newlines_start_new_lines() {
        assert_eq!(line_count("a\nb\nc", 16.0, 500.0), 3);
    }

    #[test]
    fn responsive_columns() {
        assert_eq!(columns_for(1280.0, 2, 3), 3);
        assert_eq!(columns_for(900.0, 2, 3), 2);
        assert_eq!(columns_for(500.0, 2, 3), 1);
    }

    #[test]
    fn grid_splits_evenly() {
        let cols = grid(320.0, 3, 10.0);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0], (0.0, 100.0));
        assert_eq!(cols[2], (220.0, 100.0));
    }

    #[test]
    fn content_column_is_centred_and_capped() {
        let (x, w) = content_column(2000.0);
        assert_eq!(w, MAX_CONTENT);
        assert_eq!(x, 360.0);
        let (x, w) = content_column(600.0);
        assert_eq!((x, w), (16.0, 568.0));
    }
}
