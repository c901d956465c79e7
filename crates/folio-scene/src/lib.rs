//! CPU-side 3D state for the hero backdrop and the playground canvas.
//!
//! Nothing here touches the GPU. Each frame the owning view advances its
//! state by `dt` and hands a [`SceneFrame`] to the renderer.

pub mod camera;
pub mod float;
pub mod frame;
pub mod hero;
pub mod matrix;
pub mod mesh;
pub mod primitive;
pub mod scene;
pub mod stars;

pub use camera::{OrbitCamera, OrbitControls};
pub use float::FloatMotion;
pub use frame::{LabelDraw, Lighting, MeshDraw, PointLight, SceneFrame, ScreenLabel};
pub use hero::HeroScene;
pub use mesh::{MeshKey, MeshVertex};
pub use primitive::{Bob, Material, Primitive, Shape};
pub use scene::{PlaygroundOptions, PlaygroundScene, SceneState};
pub use stars::{Star, StarfieldParams};
