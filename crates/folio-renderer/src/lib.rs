//! wgpu renderer for the portfolio page.
//!
//! Consumes a [`folio_common::DrawList`] plus one [`folio_scene::SceneFrame`]
//! per visible 3D surface and draws them in a fixed order: base quads, 3D
//! surfaces, base text, overlay quads, overlay text.

pub mod gpu;
pub mod mesh;
pub mod perf;
pub mod quad;
pub mod render_state;
pub mod stars;
pub mod text;

pub use gpu::{GpuContext, RendererError};
pub use perf::FrameTimer;
pub use quad::{QuadInstance, QuadRenderer};
pub use render_state::{RenderOptions, RenderState};
pub use text::TextRenderer;
