//! Per-frame output of a 3D view, consumed by the renderer.

use folio_common::{Color, Rect, SurfaceId};

use crate::matrix::{self, Mat4, Vec3};
use crate::mesh::MeshKey;
use crate::stars::StarfieldParams;

/// One tessellated primitive to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshDraw {
    pub key: MeshKey,
    /// Local-to-world, group transform included.
    pub model: Mat4,
    pub color: Color,
    pub opacity: f32,
    pub wireframe: bool,
}

impl MeshDraw {
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Flat text anchored at a world position.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDraw {
    pub text: String,
    pub world: Vec3,
    /// Glyph height in world units.
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

/// Ambient term plus up to two point lights.
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub points: Vec<PointLight>,
}

impl Lighting {
    pub const MAX_POINT_LIGHTS: usize = 2;

    pub fn new(ambient: f32) -> Self {
        Self {
            ambient,
            points: Vec::new(),
        }
    }

    /// Adds a point light. Lights past [`Lighting::MAX_POINT_LIGHTS`] are
    /// ignored.
    pub fn with_point(mut self, light: PointLight) -> Self {
        if self.points.len() < Self::MAX_POINT_LIGHTS {
            self.points.push(light);
        } else {
            tracing::debug!("point light limit reached, ignoring light");
        }
        self
    }
}

/// Everything the renderer needs to draw one 3D surface.
#[derive(Debug, Clone)]
pub struct SceneFrame {
    pub surface: SurfaceId,
    pub view: Mat4,
    pub proj: Mat4,
    pub eye: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub meshes: Vec<MeshDraw>,
    pub labels: Vec<LabelDraw>,
    pub lighting: Lighting,
    pub stars: StarfieldParams,
    /// Elapsed scene time in seconds, drives star twinkle.
    pub time: f32,
}

/// A label projected into window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLabel {
    /// Centre of the label.
    pub x: f32,
    pub y: f32,
    /// Glyph height in pixels.
    pub size_px: f32,
}

impl SceneFrame {
    /// Projects `label` into the pixel rect the surface occupies.
    ///
    /// Returns `None` when the anchor is behind the camera.
    pub fn project_label(&self, label: &LabelDraw, rect: Rect) -> Option<ScreenLabel> {
        let [x, y, z] = label.world;
        let view_pos = matrix::transform(&self.view, [x, y, z, 1.0]);
        let depth = -view_pos[2];
        if depth <= f32::EPSILON {
            return None;
        }
        let clip = matrix::transform(&self.proj, view_pos);
        if clip[3] <= f32::EPSILON {
            return None;
        }
        let ndc_x = clip[0] / clip[3];
        let ndc_y = clip[1] / clip[3];
        let focal = rect.height * 0.5 / (self.fov.to_radians() * 0.5).tan();
        Some(ScreenLabel {
            x: rect.x + (ndc_x + 1.0) * 0.5 * rect.width,
            y: rect.y + (1.0 - ndc_y) * 0.5 * rect.height,
            size_px: label.size * focal / depth,
        })
    }

    /// Opaque meshes first, then transparent ones back to front.
    pub fn sorted_meshes(&self) -> Vec<&MeshDraw> {
        let (mut opaque, mut transparent): (Vec<&MeshDraw>, Vec<&MeshDraw>) =
            self.meshes.iter().partition(|m| !m.is_transparent());
        let eye = self.eye;
        let dist = |m: &MeshDraw| {
            matrix::length(matrix::sub([m.model[12], m.model[13], m.model[14]], eye))
        };
        transparent.sort_by(|a, b| dist(b).total_cmp(&dist(a)));
        opaque.extend(transparent);
        opaque
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(meshes: Vec<MeshDraw>) -> SceneFrame {
        let eye = [0.0, 0.0, 5.0];
        SceneFrame {
            surface: SurfaceId::Playground,
            view: matrix::look_at(eye, [0.0; 3], [0.0, 1.0, 0.0]),
            proj: matrix::perspective(75f32.to_radians(), 2.0, 0.1, 1000.0),
            eye,
            fov: 75.0,
            meshes,
            labels: Vec::new(),
            lighting: Lighting::new(0.5),
            stars: StarfieldParams::with_count(10),
            time: 0.0,
        }
    }

    fn cube_at(z: f32, opacity: f32) -> MeshDraw {
        MeshDraw {
            key: MeshKey::Cuboid {
                size_bits: [1f32.to_bits(); 3],
            },
            model: matrix::translate(0.0, 0.0, z),
            color: Color::WHITE,
            opacity,
            wireframe: false,
        }
    }

    #[test]
    fn label_at_origin_projects_to_centre() {
        let f = frame(Vec::new());
        let label = LabelDraw {
            text: "TEMO".into(),
            world: [0.0; 3],
            size: 1.0,
            color: Color::WHITE,
        };
        let rect = Rect::new(100.0, 50.0, 800.0, 400.0);
        let s = f.project_label(&label, rect).unwrap();
        assert!((s.x - 500.0).abs() < 1e-3);
        assert!((s.y - 250.0).abs() < 1e-3);
        let focal = 200.0 / (37.5f32.to_radians()).tan();
        assert!((s.size_px - focal / 5.0).abs() < 1e-3);
    }

    #[test]
    fn label_behind_camera_is_hidden() {
        let f = frame(Vec::new());
        let label = LabelDraw {
            text: "x".into(),
            world: [0.0, 0.0, 10.0],
            size: 1.0,
            color: Color::WHITE,
        };
        assert!(f.project_label(&label, Rect::new(0.0, 0.0, 100.0, 100.0)).is_none());
    }

    #[test]
    fn transparent_meshes_sort_last_and_far_first() {
        let f = frame(vec![cube_at(2.0, 0.5), cube_at(0.0, 1.0), cube_at(-3.0, 0.8)]);
        let sorted = f.sorted_meshes();
        assert_eq!(sorted[0].opacity, 1.0);
        assert_eq!(sorted[1].opacity, 0.8);
        assert_eq!(sorted[2].opacity, 0.5);
    }

    #[test]
    fn lighting_caps_point_lights() {
        let light = PointLight::new([0.0; 3], Color::WHITE, 1.0);
        let l = Lighting::new(0.5)
            .with_point(light)
            .with_point(light)
            .with_point(light);
        assert_eq!(l.points.len(), Lighting::MAX_POINT_LIGHTS);
    }
}
