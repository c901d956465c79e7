//! Scene primitives and their per-frame integration.

use folio_common::Color;

use crate::matrix::{self, Mat4, Vec3};
use crate::mesh::MeshKey;

/// Geometry of a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cuboid {
        size: Vec3,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    /// Flat text facing the camera, `size` is the glyph height in world units.
    Text {
        content: String,
        size: f32,
    },
}

impl Shape {
    /// Mesh identity for tessellated shapes; `None` for text.
    pub fn mesh_key(&self) -> Option<MeshKey> {
        match *self {
            Shape::Sphere {
                radius,
                width_segments,
                height_segments,
            } => Some(MeshKey::Sphere {
                radius_bits: radius.to_bits(),
                width_segments,
                height_segments,
            }),
            Shape::Cuboid { size } => Some(MeshKey::Cuboid {
                size_bits: [size[0].to_bits(), size[1].to_bits(), size[2].to_bits()],
            }),
            Shape::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => Some(MeshKey::Torus {
                radius_bits: radius.to_bits(),
                tube_bits: tube.to_bits(),
                radial_segments,
                tubular_segments,
            }),
            Shape::Text { .. } => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Sphere { .. } => "sphere",
            Shape::Cuboid { .. } => "box",
            Shape::Torus { .. } => "torus",
            Shape::Text { .. } => "text",
        }
    }
}

/// Surface appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    /// 0.0..=1.0, below 1.0 the primitive is alpha blended.
    pub opacity: f32,
    pub wireframe: bool,
}

impl Material {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            wireframe: false,
        }
    }

    pub fn wireframe(color: Color) -> Self {
        Self {
            wireframe: true,
            ..Self::solid(color)
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// Vertical oscillation of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bob {
    /// `y = amplitude * sin(frequency * t)`, replacing the base height.
    Absolute { amplitude: f32, frequency: f32 },
    /// Offset from the base height that starts at zero when the primitive is
    /// mounted: `amplitude * (cos(frequency * t0) - cos(frequency * t))`.
    Drift { amplitude: f32, frequency: f32 },
}

impl Bob {
    /// Height at elapsed time `t` for a primitive mounted at `mounted_at`.
    pub fn height(&self, base_y: f32, mounted_at: f32, t: f32) -> f32 {
        match *self {
            Bob::Absolute {
                amplitude,
                frequency,
            } => amplitude * (frequency * t).sin(),
            Bob::Drift {
                amplitude,
                frequency,
            } => base_y + amplitude * ((frequency * mounted_at).cos() - (frequency * t).cos()),
        }
    }
}

/// One displayed 3D primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
    pub base_position: Vec3,
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    /// Angular velocity in radians per second.
    pub spin: Vec3,
    pub bob: Option<Bob>,
    /// Scene time at which this primitive was created.
    pub mounted_at: f32,
}

impl Primitive {
    pub fn new(shape: Shape, material: Material, position: Vec3) -> Self {
        Self {
            shape,
            material,
            base_position: position,
            position,
            rotation: [0.0; 3],
            spin: [0.0; 3],
            bob: None,
            mounted_at: 0.0,
        }
    }

    pub fn with_spin(mut self, spin: Vec3) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_bob(mut self, bob: Bob) -> Self {
        self.bob = Some(bob);
        self
    }

    pub(crate) fn mount(mut self, at: f32) -> Self {
        self.mounted_at = at;
        if let Some(bob) = self.bob {
            self.position[1] = bob.height(self.base_position[1], at, at);
        }
        self
    }

    /// Advances rotation by `spin * dt` and re-evaluates the bob at
    /// elapsed scene time `t`.
    pub fn update(&mut self, dt: f32, t: f32) {
        for axis in 0..3 {
            self.rotation[axis] += self.spin[axis] * dt;
        }
        if let Some(bob) = self.bob {
            self.position[1] = bob.height(self.base_position[1], self.mounted_at, t);
        }
    }

    /// Local-to-world transform, before any group transform.
    pub fn model_matrix(&self) -> Mat4 {
        let [x, y, z] = self.position;
        matrix::mul(&matrix::translate(x, y, z), &matrix::rotate_xyz(self.rotation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere() -> Primitive {
        Primitive::new(
            Shape::Sphere {
                radius: 0.5,
                width_segments: 32,
                height_segments: 32,
            },
            Material::wireframe(Color::rgb(59, 130, 246)),
            [1.0, 2.0, 0.0],
        )
    }

    #[test]
    fn rotation_delta_is_proportional_to_dt() {
        let mut a = sphere().with_spin([0.5, 0.3, 0.0]);
        let mut b = a.clone();
        a.update(0.016, 0.016);
        b.update(0.032, 0.032);
        assert!((a.rotation[0] - 0.008).abs() < 1e-6);
        assert!((b.rotation[0] - 2.0 * a.rotation[0]).abs() < 1e-6);
        assert!((b.rotation[1] - 2.0 * a.rotation[1]).abs() < 1e-6);
        assert_eq!(a.rotation[2], 0.0);
    }

    #[test]
    fn many_small_steps_match_one_large_step() {
        let mut a = sphere().with_spin([0.5, 0.3, 0.0]);
        let mut b = a.clone();
        for i in 1..=60 {
            a.update(1.0 / 60.0, i as f32 / 60.0);
        }
        b.update(1.0, 1.0);
        assert!((a.rotation[0] - b.rotation[0]).abs() < 1e-4);
        assert!((a.position[1] - b.position[1]).abs() < 1e-5);
    }

    #[test]
    fn drift_bob_starts_at_base() {
        let p = sphere()
            .with_bob(Bob::Drift {
                amplitude: 0.3,
                frequency: 2.0,
            })
            .mount(1.25);
        assert!((p.position[1] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn drift_bob_stays_within_twice_amplitude() {
        let mut p = sphere()
            .with_bob(Bob::Drift {
                amplitude: 0.3,
                frequency: 2.0,
            })
            .mount(0.0);
        for i in 0..600 {
            let t = i as f32 * 0.05;
            p.update(0.05, t);
            assert!((p.position[1] - 2.0).abs() <= 0.6 + 1e-5);
        }
    }

    #[test]
    fn absolute_bob_ignores_base() {
        let bob = Bob::Absolute {
            amplitude: 0.5,
            frequency: 1.0,
        };
        let t = std::f32::consts::FRAC_PI_2;
        assert!((bob.height(10.0, 0.0, t) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn model_matrix_carries_position() {
        let p = sphere();
        let m = p.model_matrix();
        assert_eq!(&m[12..15], &[1.0, 2.0, 0.0]);
    }

    #[test]
    fn text_has_no_mesh() {
        let shape = Shape::Text {
            content: "TEMO".into(),
            size: 1.0,
        };
        assert!(shape.mesh_key().is_none());
        assert_eq!(shape.kind_name(), "text");
    }

    #[test]
    fn opacity_is_clamped() {
        let m = Material::solid(Color::WHITE).with_opacity(1.5);
        assert_eq!(m.opacity, 1.0);
    }
}
