use folio_common::{Color, DrawText, Rect, TextAlign};
use folio_scene::SceneFrame;

/// Labels smaller than this are skipped.
const MIN_LABEL_PX: f32 = 1.0;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Clear colour for an sRGB target.
pub fn clear_color_for(color: Color) -> wgpu::Color {
    let [r, g, b, a] = color.to_linear();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

/// Flat 3D text of `frame` projected into `rect` as centred text blocks.
pub fn scene_labels(frame: &SceneFrame, rect: Rect) -> Vec<DrawText> {
    frame
        .labels
        .iter()
        .filter_map(|label| {
            let screen = frame.project_label(label, rect)?;
            if screen.size_px < MIN_LABEL_PX {
                return None;
            }
            let text = DrawText::new(label.text.clone(), screen.x, 0.0, screen.size_px, label.color)
                .bold()
                .align(TextAlign::Center);
            Some(DrawText {
                y: screen.y - text.line_height * 0.5,
                ..text
            })
        })
        .collect()
}
