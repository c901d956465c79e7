use std::collections::HashMap;

use folio_common::Layer;
use glyphon::{
    Buffer as TextBuffer, Cache, FontSystem, SwashCache, TextAtlas, TextRenderer as GlyphonRenderer,
    Viewport,
};

use super::helpers::TextKey;

pub(crate) struct CachedText {
    pub buffer: TextBuffer,
    /// Widest line in logical pixels.
    pub width: f32,
    pub used: bool,
}

/// One glyphon renderer plus the shaped buffers it drew last frame.
pub(crate) struct LayerState {
    pub renderer: GlyphonRenderer,
    pub cache: HashMap<TextKey, CachedText>,
}

/// GPU text renderer backed by glyphon.
///
/// Base and overlay text need separate draw calls between other geometry,
/// so each layer has its own glyphon renderer sharing one atlas.
pub struct TextRenderer {
    pub font_system: FontSystem,
    pub swash_cache: SwashCache,
    pub cache: Cache,
    pub atlas: TextAtlas,
    pub viewport: Viewport,
    pub(crate) base: LayerState,
    pub(crate) overlay: LayerState,
    pub(crate) family: String,
    pub(crate) mono_family: String,
}

impl TextRenderer {
    /// Create a new text renderer backed by glyphon, using system fonts.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        family: &str,
        mono_family: &str,
    ) -> Self {
        let font_system = FontSystem::new();
        let swash_cache = SwashCache::new();

        let cache = Cache::new(device);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let viewport = Viewport::new(device, &cache);

        let mut make_layer = || LayerState {
            renderer: GlyphonRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None),
            cache: HashMap::new(),
        };
        let base = make_layer();
        let overlay = make_layer();

        tracing::info!("TextRenderer: family={family:?}, mono_family={mono_family:?}");

        Self {
            font_system,
            swash_cache,
            cache,
            atlas,
            viewport,
            base,
            overlay,
            family: family.to_string(),
            mono_family: mono_family.to_string(),
        }
    }

    /// Switch font families, dropping every shaped buffer.
    pub fn set_families(&mut self, family: &str, mono_family: &str) {
        if self.family == family && self.mono_family == mono_family {
            return;
        }
        tracing::info!("TextRenderer: switching to family={family:?}, mono_family={mono_family:?}");
        self.family = family.to_string();
        self.mono_family = mono_family.to_string();
        self.base.cache.clear();
        self.overlay.cache.clear();
    }

    /// Render the previously prepared text of `layer` into the render pass.
    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>, layer: Layer) {
        self.layer(layer)
            .renderer
            .render(&self.atlas, &self.viewport, pass)
            .unwrap_or_else(|e| {
                tracing::warn!("glyphon render error: {:?}", e);
            });
    }

    pub(crate) fn layer(&self, layer: Layer) -> &LayerState {
        match layer {
            Layer::Base => &self.base,
            Layer::Overlay => &self.overlay,
        }
    }
}
