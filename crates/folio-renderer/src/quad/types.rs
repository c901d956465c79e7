use folio_common::DrawQuad;

/// One rounded, optionally outlined, optionally gradient-filled rectangle.
///
/// Layout: 4 × vec4<f32> = 64 bytes.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct QuadInstance {
    /// Position and size in physical pixels: [x, y, width, height].
    pub rect: [f32; 4],
    /// Linear RGBA at the left edge.
    pub color: [f32; 4],
    /// Linear RGBA at the right edge.
    pub color_end: [f32; 4],
    /// [corner radius, border width, 0, 0] in physical pixels.
    pub params: [f32; 4],
}

impl QuadInstance {
    /// Converts a draw-list quad given in logical pixels.
    pub fn from_draw(quad: &DrawQuad, scale_factor: f32) -> Self {
        let r = quad.rect;
        let (start, end) = quad.fill.endpoints();
        let half = 0.5 * r.width.min(r.height);
        Self {
            rect: [
                r.x * scale_factor,
                r.y * scale_factor,
                r.width * scale_factor,
                r.height * scale_factor,
            ],
            color: start.to_linear(),
            color_end: end.to_linear(),
            params: [
                quad.radius.clamp(0.0, half) * scale_factor,
                quad.border.max(0.0) * scale_factor,
                0.0,
                0.0,
            ],
        }
    }
}

/// Unit quad vertices (2D position).
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct Vertex {
    pub position: [f32; 2],
}

/// Uniform buffer for the target resolution.
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct Uniforms {
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
}

pub(crate) const QUAD_VERTICES: &[Vertex] = &[
    Vertex {
        position: [0.0, 0.0],
    }, // top-left
    Vertex {
        position: [1.0, 0.0],
    }, // top-right
    Vertex {
        position: [1.0, 1.0],
    }, // bottom-right
    Vertex {
        position: [0.0, 1.0],
    }, // bottom-left
];

pub(crate) const QUAD_INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];

/// Instance buffer capacity at start-up; it doubles when a frame needs more.
pub(crate) const INITIAL_CAPACITY: u32 = 1024;
