//! glyphon text rendering in two layers.

mod helpers;
mod prepare;
mod renderer;

pub use helpers::{align_offset, family_for};
pub use prepare::TextItem;
pub use renderer::*;

#[cfg(test)]
mod tests {
    use super::helpers::TextKey;
    use super::*;
    use folio_common::{Color, DrawText, TextAlign};
    use glyphon::Family;

    #[test]
    fn generic_family_names() {
        assert_eq!(family_for("sans-serif"), Family::SansSerif);
        assert_eq!(family_for(""), Family::SansSerif);
        assert_eq!(family_for("serif"), Family::Serif);
        assert_eq!(family_for("monospace"), Family::Monospace);
        assert_eq!(family_for(" Inter "), Family::Name("Inter"));
    }

    #[test]
    fn unwrapped_text_is_shifted_by_alignment() {
        assert_eq!(align_offset(TextAlign::Left, None, 100.0), 0.0);
        assert_eq!(align_offset(TextAlign::Center, None, 100.0), -50.0);
        assert_eq!(align_offset(TextAlign::Right, None, 100.0), -100.0);
    }

    #[test]
    fn wrapped_text_aligns_inside_its_width() {
        assert_eq!(align_offset(TextAlign::Center, Some(300.0), 100.0), 0.0);
        assert_eq!(align_offset(TextAlign::Right, Some(300.0), 100.0), 0.0);
    }

    #[test]
    fn key_ignores_colour_and_position() {
        let a = DrawText::new("TEMO", 0.0, 0.0, 20.0, Color::WHITE);
        let b = DrawText::new("TEMO", 50.0, 80.0, 20.0, Color::BLACK);
        assert_eq!(TextKey::new(&a), TextKey::new(&b));
        let c = a.clone().bold();
        assert_ne!(TextKey::new(&a), TextKey::new(&c));
        let d = a.clone().wrap(200.0);
        assert_ne!(TextKey::new(&a), TextKey::new(&d));
    }
}
