mod frame;
mod helpers;
mod state;

pub use helpers::{clear_color_for, scene_labels};
pub use state::*;

#[cfg(test)]
mod tests;
