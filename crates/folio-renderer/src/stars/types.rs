use folio_scene::matrix::Mat4;
use folio_scene::SceneFrame;

/// Per-surface uniform block matching the WGSL `StarUniforms` struct.
///
/// Layout: 2 × mat4 + 2 × vec4 = 160 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarUniforms {
    pub view: [f32; 16],
    /// Remapped projection, applied after `view`.
    pub proj: [f32; 16],
    /// Target size in physical pixels.
    pub resolution: [f32; 2],
    /// Twinkle phase in seconds, already scaled by the field's speed.
    pub time: f32,
    pub pixel_ratio: f32,
    /// 1.0 for soft round sprites.
    pub fade: f32,
    pub _pad: [f32; 3],
}

impl StarUniforms {
    pub fn new(frame: &SceneFrame, proj: &Mat4, resolution: [f32; 2], pixel_ratio: f32) -> Self {
        Self {
            view: frame.view,
            proj: *proj,
            resolution,
            time: frame.time * frame.stars.speed,
            pixel_ratio,
            fade: if frame.stars.fade { 1.0 } else { 0.0 },
            _pad: [0.0; 3],
        }
    }
}

/// Sprite size in pixels for a star of `size` at view depth `view_z`.
///
/// Mirrors the vertex shader; the size swings between 2× and 4× as the
/// star twinkles.
pub fn sprite_size(size: f32, view_z: f32, time: f32) -> f32 {
    if view_z >= 0.0 {
        return 0.0;
    }
    size * (30.0 / -view_z) * (3.0 + (time + 100.0).sin())
}

/// Sprite opacity at distance `d` from its centre, in sprite widths.
pub fn sprite_fade(d: f32) -> f32 {
    1.0 / (1.0 + (16.0 * (d - 0.25)).exp())
}
