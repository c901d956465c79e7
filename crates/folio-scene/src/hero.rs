//! Backdrop behind the hero section: a floating wireframe cube in a starfield.

use folio_common::{Color, SurfaceId};

use crate::camera::{OrbitCamera, OrbitControls};
use crate::float::FloatMotion;
use crate::frame::{Lighting, PointLight, SceneFrame};
use crate::primitive::{Bob, Material, Primitive, Shape};
use crate::scene::collect_draws;
use crate::stars::StarfieldParams;

#[derive(Debug, Clone)]
pub struct HeroScene {
    cube: Primitive,
    float: FloatMotion,
    camera: OrbitCamera,
    stars: StarfieldParams,
    lighting: Lighting,
    elapsed: f32,
}

impl HeroScene {
    pub fn new(star_count: u32, auto_rotate_speed: f32) -> Self {
        let cube = Primitive::new(
            Shape::Cuboid {
                size: [2.0, 2.0, 2.0],
            },
            Material::wireframe(Color::rgb(0x3b, 0x82, 0xf6)).with_opacity(0.8),
            [0.0; 3],
        )
        .with_spin([0.5, 0.3, 0.0])
        .with_bob(Bob::Absolute {
            amplitude: 0.5,
            frequency: 1.0,
        });

        Self {
            cube,
            float: FloatMotion::default(),
            camera: OrbitCamera::new(
                [0.0, 0.0, 5.0],
                75.0,
                OrbitControls::backdrop(auto_rotate_speed),
            ),
            stars: StarfieldParams::with_count(star_count),
            lighting: Lighting::new(0.5).with_point(PointLight::new(
                [10.0, 10.0, 10.0],
                Color::WHITE,
                1.0,
            )),
            elapsed: 0.0,
        }
    }

    pub fn cube(&self) -> &Primitive {
        &self.cube
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
        let dt = dt.max(0.0);
        self.elapsed += dt;
        self.cube.update(dt, self.elapsed);
        self.camera.update(dt);
    }

    pub fn frame(&self, aspect: f32) -> SceneFrame {
        let group = self.float.matrix(self.elapsed);
        let (meshes, labels) = collect_draws(std::slice::from_ref(&self.cube), &group);
        SceneFrame {
            surface: SurfaceId::Hero,
            view: self.camera.view(),
            proj: self.camera.projection(aspect),
            eye: self.camera.eye(),
            fov: self.camera.fov_deg,
            meshes,
            labels,
            lighting: self.lighting.clone(),
            stars: self.stars,
            time: self.elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_matches_backdrop_look() {
        let hero = HeroScene::new(5000, 0.5);
        let cube = hero.cube();
        assert_eq!(cube.shape.kind_name(), "box");
        assert!(cube.material.wireframe);
        assert_eq!(cube.material.opacity, 0.8);
        assert_eq!(hero.stars().count, 5000);
    }

    #[test]
    fn cube_bobs_absolutely() {
        let mut hero = HeroScene::new(10, 0.5);
        hero.update(std::f32::consts::FRAC_PI_2);
        assert!((hero.cube().position[1] - 0.5).abs() < 1e-5);
        assert!((hero.cube().rotation[0] - 0.5 * std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn camera_only_auto_rotates() {
        let mut hero = HeroScene::new(10, 0.5);
        let controls = hero.camera().controls;
        assert!(!controls.enable_zoom);
        assert!(!controls.enable_pan);
        assert!(controls.auto_rotate);
        let start = hero.camera().azimuth;
        hero.update(1.0);
        assert_ne!(hero.camera().azimuth, start);
    }

    #[test]
    fn frame_has_one_mesh_and_one_light() {
        let hero = HeroScene::new(10, 0.5);
        let frame = hero.frame(1.5);
        assert_eq!(frame.surface, SurfaceId::Hero);
        assert_eq!(frame.meshes.len(), 1);
        assert!(frame.meshes[0].is_transparent());
        assert_eq!(frame.lighting.points.len(), 1);
    }
}
