use folio_common::{DrawText, Layer, Rect, TextAlign};
use glyphon::cosmic_text::Align;
use glyphon::{
    Attrs, Buffer as TextBuffer, Color as GlyphonColor, FontSystem, Metrics, Resolution, Shaping,
    TextArea, TextBounds, Weight,
};

use super::helpers::{align_offset, family_for, measure_width, TextKey};
use super::renderer::{CachedText, TextRenderer};
use crate::gpu::RendererError;

/// A text block and the logical-pixel rect it is clipped to.
#[derive(Debug, Clone, Copy)]
pub struct TextItem<'a> {
    pub text: &'a DrawText,
    pub clip: Rect,
}

impl TextRenderer {
    /// Per-frame setup shared by both layers.
    pub fn begin_frame(&mut self, queue: &wgpu::Queue, width: u32, height: u32) {
        self.viewport.update(queue, Resolution { width, height });
        self.atlas.trim();
    }

    /// Shape (or reuse) and upload the text of one layer.
    ///
    /// Buffers not used by this call are dropped from the layer's cache.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layer: Layer,
        items: &[TextItem<'_>],
        scale_factor: f32,
    ) -> Result<(), RendererError> {
        let Self {
            font_system,
            swash_cache,
            atlas,
            viewport,
            base,
            overlay,
            family,
            mono_family,
            ..
        } = self;
        let (family, mono_family) = (family.as_str(), mono_family.as_str());
        let state = match layer {
            Layer::Base => base,
            Layer::Overlay => overlay,
        };

        for cached in state.cache.values_mut() {
            cached.used = false;
        }

        let mut placed = Vec::with_capacity(items.len());
        for item in items {
            let key = TextKey::new(item.text);
            let cached = state
                .cache
                .entry(key.clone())
                .or_insert_with(|| shape(font_system, item.text, family, mono_family));
            cached.used = true;
            let dx = align_offset(item.text.align, item.text.width, cached.width);
            placed.push((key, item, dx));
        }
        state.cache.retain(|_, cached| cached.used);

        let text_areas: Vec<TextArea> = placed
            .iter()
            .filter_map(|(key, item, dx)| {
                let cached = state.cache.get(key)?;
                let clip = item.clip;
                let c = item.text.color;
                Some(TextArea {
                    buffer: &cached.buffer,
                    left: (item.text.x + dx) * scale_factor,
                    top: item.text.y * scale_factor,
                    scale: scale_factor,
                    bounds: TextBounds {
                        left: (clip.x * scale_factor).floor() as i32,
                        top: (clip.y * scale_factor).floor() as i32,
                        right: (clip.right() * scale_factor).ceil() as i32,
                        bottom: (clip.bottom() * scale_factor).ceil() as i32,
                    },
                    default_color: GlyphonColor::rgba(c.r, c.g, c.b, c.a),
                    custom_glyphs: &[],
                })
            })
            .collect();

        state.renderer.prepare(
            device,
            queue,
            font_system,
            atlas,
            viewport,
            text_areas,
            swash_cache,
        )?;
        Ok(())
    }
}

fn shape(
    font_system: &mut FontSystem,
    text: &DrawText,
    family: &str,
    mono_family: &str,
) -> CachedText {
    let metrics = Metrics::new(text.size, text.line_height);
    let name = if text.mono { mono_family } else { family };
    let weight = if text.bold {
        Weight::BOLD
    } else {
        Weight::NORMAL
    };
    let attrs = Attrs::new().family(family_for(name)).weight(weight);

    let mut buffer = TextBuffer::new(font_system, metrics);
    buffer.set_size(font_system, text.width, None);
    buffer.set_text(font_system, &text.text, attrs, Shaping::Advanced);
    if text.width.is_some() {
        let align = match text.align {
            TextAlign::Left => None,
            TextAlign::Center => Some(Align::Center),
            TextAlign::Right => Some(Align::Right),
        };
        for line in buffer.lines.iter_mut() {
            line.set_align(align);
        }
    }
    buffer.shape_until_scroll(font_system, false);

    let width = measure_width(&buffer);
    CachedText {
        buffer,
        width,
        used: true,
    }
}
