//! Orbit camera: spherical coordinates around a target, driven by pointer
//! drag, wheel zoom, pan, and optional auto-rotation.

mod controls;
mod orbit;

#[cfg(test)]
mod tests;

pub use controls::OrbitControls;
pub use orbit::OrbitCamera;
