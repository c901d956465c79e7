//! Instanced quad renderer for page backgrounds, cards, buttons, badges
//! and outlines.
//!
//! Corners are rounded with a signed-distance test in the fragment shader,
//! so one pipeline covers fills, borders and horizontal gradients.

mod pipeline;
mod renderer;
mod types;

pub use renderer::*;
pub use types::QuadInstance;
