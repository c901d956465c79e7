use folio_common::Rect;

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("text rendering error: {0}")]
    TextError(String),
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<glyphon::PrepareError> for RendererError {
    fn from(e: glyphon::PrepareError) -> Self {
        RendererError::TextError(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

impl PhysicalSize {
    /// Size in logical pixels for the given scale factor.
    pub fn logical(&self, scale_factor: f32) -> (f32, f32) {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        (self.width as f32 / scale, self.height as f32 / scale)
    }
}

/// Scissor rectangle in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScissorRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Converts a logical rect into a scissor rect clamped to `target`.
///
/// Returns `None` when nothing of the rect is visible.
pub fn scissor_rect(rect: Rect, scale_factor: f32, target: PhysicalSize) -> Option<ScissorRect> {
    let left = (rect.x * scale_factor).floor().max(0.0);
    let top = (rect.y * scale_factor).floor().max(0.0);
    let right = (rect.right() * scale_factor).ceil().min(target.width as f32);
    let bottom = (rect.bottom() * scale_factor).ceil().min(target.height as f32);
    if right <= left || bottom <= top {
        return None;
    }
    Some(ScissorRect {
        x: left as u32,
        y: top as u32,
        width: (right - left) as u32,
        height: (bottom - top) as u32,
    })
}

/// Rounds `size` up to a multiple of `alignment`.
pub fn aligned_stride(size: u64, alignment: u64) -> u64 {
    if alignment == 0 {
        return size;
    }
    size.div_ceil(alignment) * alignment
}
