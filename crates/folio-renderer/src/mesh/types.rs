use folio_scene::matrix::{self, Mat4};
use folio_scene::{Lighting, MeshDraw, MeshVertex};

/// Per-draw uniform block matching the WGSL `MeshUniforms` struct.
///
/// Layout: 2 × mat4 + 6 × vec4 = 224 bytes. Slots in the uniform buffer are
/// spaced by the device's dynamic-offset alignment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniforms {
    pub mvp: [f32; 16],
    pub model: [f32; 16],
    /// Linear RGB plus opacity.
    pub color: [f32; 4],
    /// [opacity, ambient, point light count, 0].
    pub params: [f32; 4],
    pub light_position: [[f32; 4]; 2],
    /// Linear RGB premultiplied by intensity.
    pub light_color: [[f32; 4]; 2],
}

impl MeshUniforms {
    /// `view_proj` already includes the surface's viewport remap.
    pub fn new(view_proj: &Mat4, draw: &MeshDraw, lighting: &Lighting) -> Self {
        let mut light_position = [[0.0; 4]; 2];
        let mut light_color = [[0.0; 4]; 2];
        let lights = lighting.points.iter().take(Lighting::MAX_POINT_LIGHTS);
        let mut count = 0;
        for (i, light) in lights.enumerate() {
            let [x, y, z] = light.position;
            let [r, g, b, _] = light.color.to_linear();
            light_position[i] = [x, y, z, 1.0];
            light_color[i] = [r * light.intensity, g * light.intensity, b * light.intensity, 1.0];
            count += 1;
        }
        let [r, g, b, _] = draw.color.to_linear();
        Self {
            mvp: matrix::mul(view_proj, &draw.model),
            model: draw.model,
            color: [r, g, b, draw.opacity],
            params: [draw.opacity, lighting.ambient, count as f32, 0.0],
            light_position,
            light_color,
        }
    }
}

/// Which pipeline a mesh draw goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshPass {
    /// Back-face culled, depth written.
    Opaque,
    /// Back-face culled, blended, depth tested only.
    Transparent,
    /// Both faces, only triangle edges drawn.
    Wireframe,
}

impl MeshPass {
    pub fn for_draw(draw: &MeshDraw) -> Self {
        if draw.wireframe {
            MeshPass::Wireframe
        } else if draw.is_transparent() {
            MeshPass::Transparent
        } else {
            MeshPass::Opaque
        }
    }
}

/// wgpu vertex buffer layout for [`MeshVertex`].
pub(crate) const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<MeshVertex>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[
        // position
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        },
        // normal
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 12,
            shader_location: 1,
        },
        // barycentric
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 24,
            shader_location: 2,
        },
    ],
};

/// Uniform slots allocated up front; the buffer doubles on demand.
pub(crate) const INITIAL_DRAWS: u64 = 64;
