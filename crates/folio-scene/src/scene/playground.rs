use folio_common::{Color, SceneId, SurfaceId};

use super::{collect_draws, SceneState};
use crate::camera::{OrbitCamera, OrbitControls};
use crate::frame::{Lighting, PointLight, SceneFrame};
use crate::stars::StarfieldParams;

/// Tunables for the playground canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaygroundOptions {
    pub star_count: u32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub auto_rotate_speed: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
}

impl Default for PlaygroundOptions {
    fn default() -> Self {
        Self {
            star_count: 3000,
            fov: 75.0,
            auto_rotate_speed: 0.5,
            enable_zoom: true,
            enable_pan: true,
        }
    }
}

/// The interactive canvas: a selectable scene, an orbit camera, a starfield
/// and fixed lighting.
#[derive(Debug, Clone)]
pub struct PlaygroundScene {
    state: SceneState,
    camera: OrbitCamera,
    stars: StarfieldParams,
    lighting: Lighting,
}

impl PlaygroundScene {
    pub fn new(scene: SceneId, options: PlaygroundOptions) -> Self {
        let state = SceneState::new(scene);
        let controls = OrbitControls {
            enable_zoom: options.enable_zoom,
            enable_pan: options.enable_pan,
            auto_rotate: state.auto_rotate(),
            auto_rotate_speed: options.auto_rotate_speed,
            ..OrbitControls::default()
        };
        let lighting = Lighting::new(0.5)
            .with_point(PointLight::new([10.0, 10.0, 10.0], Color::WHITE, 1.0))
            .with_point(PointLight::new(
                [-10.0, -10.0, -10.0],
                Color::rgb(0x8b, 0x5c, 0xf6),
                0.3,
            ));
        Self {
            state,
            camera: OrbitCamera::new([0.0, 0.0, 5.0], options.fov, controls),
            stars: StarfieldParams::with_count(options.star_count),
            lighting,
        }
    }

    pub fn current(&self) -> SceneId {
        self.state.current()
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Selects `id`. Auto-rotation follows the new scene.
    pub fn select(&mut self, id: SceneId) -> bool {
        let changed = self.state.select(id);
        if changed {
            self.camera.controls.auto_rotate = self.state.auto_rotate();
        }
        changed
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn stars(&self) -> &StarfieldParams {
        &self.stars
    }

    pub fn update(&mut self, dt: f32) {
        self.state.update(dt);
        self.camera.update(dt);
    }

    /// Snapshot for a surface with the given width / height ratio.
    pub fn frame(&self, aspect: f32) -> SceneFrame {
        let group = self.state.group_transform();
        let (meshes, labels) = collect_draws(self.state.primitives(), &group);
        SceneFrame {
            surface: SurfaceId::Playground,
            view: self.camera.view(),
            proj: self.camera.projection(aspect),
            eye: self.camera.eye(),
            fov: self.camera.fov_deg,
            meshes,
            labels,
            lighting: self.lighting.clone(),
            stars: self.stars,
            time: self.state.elapsed(),
        }
    }
}
