use std::sync::Arc;

use folio_common::Color;
use winit::window::Window;

use super::helpers::clear_color_for;
use crate::gpu::{GpuContext, RendererError};
use crate::mesh::MeshRenderer;
use crate::quad::QuadRenderer;
use crate::stars::StarRenderer;
use crate::text::TextRenderer;

/// Start-up settings taken from the config.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub vsync: bool,
    pub font_family: String,
    pub mono_family: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            vsync: true,
            font_family: "sans-serif".into(),
            mono_family: "monospace".into(),
        }
    }
}

/// GPU context plus every pipeline used to draw a page frame.
pub struct RenderState {
    pub gpu: GpuContext,
    pub quad: QuadRenderer,
    pub mesh: MeshRenderer,
    pub stars: StarRenderer,
    pub text: TextRenderer,
    pub clear_color: wgpu::Color,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, options: &RenderOptions) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, options.vsync).await?;
        let format = gpu.format();
        let quad = QuadRenderer::new(&gpu.device, format);
        let mesh = MeshRenderer::new(&gpu.device, format);
        let stars = StarRenderer::new(&gpu.device, format);
        let text = TextRenderer::new(
            &gpu.device,
            &gpu.queue,
            format,
            &options.font_family,
            &options.mono_family,
        );
        let depth_view = gpu.create_depth_view();

        Ok(Self {
            gpu,
            quad,
            mesh,
            stars,
            text,
            clear_color: clear_color_for(Color::BLACK),
            depth_view,
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.depth_view = self.gpu.create_depth_view();
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.gpu.set_scale_factor(scale_factor);
    }

    /// Set the background clear color for frame rendering.
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = clear_color_for(color);
    }

    pub fn set_fonts(&mut self, family: &str, mono_family: &str) {
        self.text.set_families(family, mono_family);
    }

    /// Window size in logical pixels, the unit of the draw list.
    pub fn logical_size(&self) -> (f32, f32) {
        self.gpu.size.logical(self.gpu.scale_factor as f32)
    }
}
