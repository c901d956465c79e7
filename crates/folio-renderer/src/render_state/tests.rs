use folio_common::{Color, Rect, SurfaceId, TextAlign};
use folio_scene::matrix;
use folio_scene::{LabelDraw, Lighting, SceneFrame, StarfieldParams};

use super::*;

fn frame_with(labels: Vec<LabelDraw>) -> SceneFrame {
    let eye = [0.0, 0.0, 5.0];
    SceneFrame {
        surface: SurfaceId::Playground,
        view: matrix::look_at(eye, [0.0; 3], [0.0, 1.0, 0.0]),
        proj: matrix::perspective(75f32.to_radians(), 2.0, 0.1, 1000.0),
        eye,
        fov: 75.0,
        meshes: Vec::new(),
        labels,
        lighting: Lighting::new(0.5),
        stars: StarfieldParams::with_count(0),
        time: 0.0,
    }
}

fn label(text: &str, world: [f32; 3], size: f32) -> LabelDraw {
    LabelDraw {
        text: text.into(),
        world,
        size,
        color: Color::WHITE,
    }
}

#[test]
fn clear_color_is_linear() {
    let c = clear_color_for(Color::WHITE);
    assert_eq!(c, wgpu::Color::WHITE);
    let c = clear_color_for(Color::rgb(0, 0, 0));
    assert_eq!(c, wgpu::Color::BLACK);
}

#[test]
fn label_is_centred_on_its_anchor() {
    let frame = frame_with(vec![label("TEMO", [0.0; 3], 1.0)]);
    let rect = Rect::new(100.0, 50.0, 800.0, 400.0);
    let texts = scene_labels(&frame, rect);
    assert_eq!(texts.len(), 1);
    let t = &texts[0];
    assert_eq!(t.text, "TEMO");
    assert_eq!(t.align, TextAlign::Center);
    assert!(t.bold);
    assert!((t.x - 500.0).abs() < 1e-3);
    assert!((t.y + t.line_height * 0.5 - 250.0).abs() < 1e-3);
}

#[test]
fn hidden_and_tiny_labels_are_skipped() {
    let frame = frame_with(vec![
        label("behind", [0.0, 0.0, 10.0], 1.0),
        label("tiny", [0.0; 3], 0.0001),
    ]);
    let texts = scene_labels(&frame, Rect::new(0.0, 0.0, 800.0, 400.0));
    assert!(texts.is_empty());
}

#[test]
fn default_options_use_generic_families() {
    let options = RenderOptions::default();
    assert!(options.vsync);
    assert_eq!(options.font_family, "sans-serif");
    assert_eq!(options.mono_family, "monospace");
}
