use folio_common::{DrawText, TextAlign};
use glyphon::{Buffer as TextBuffer, Family};

/// Shaped-buffer identity. Colour and position are applied per frame and
/// are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct TextKey {
    text: String,
    size_bits: u32,
    line_height_bits: u32,
    width_bits: Option<u32>,
    bold: bool,
    mono: bool,
    align: TextAlign,
}

impl TextKey {
    pub(crate) fn new(text: &DrawText) -> Self {
        Self {
            text: text.text.clone(),
            size_bits: text.size.to_bits(),
            line_height_bits: text.line_height.to_bits(),
            width_bits: text.width.map(f32::to_bits),
            bold: text.bold,
            mono: text.mono,
            align: text.align,
        }
    }
}

/// Maps a configured family name onto a font query. The CSS generic names
/// select the matching generic family.
pub fn family_for(name: &str) -> Family<'_> {
    match name.trim() {
        "" | "sans-serif" | "system-ui" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        other => Family::Name(other),
    }
}

/// Horizontal shift applied to unwrapped text so `x` names its centre or
/// right edge. Wrapped text is aligned per line inside its wrap width.
pub fn align_offset(align: TextAlign, wrap_width: Option<f32>, measured: f32) -> f32 {
    if wrap_width.is_some() {
        return 0.0;
    }
    match align {
        TextAlign::Left => 0.0,
        TextAlign::Center => -measured * 0.5,
        TextAlign::Right => -measured,
    }
}

/// Widest laid-out line of a shaped buffer.
pub(crate) fn measure_width(buffer: &TextBuffer) -> f32 {
    buffer
        .layout_runs()
        .map(|run| run.line_w)
        .fold(0.0, f32::max)
}
