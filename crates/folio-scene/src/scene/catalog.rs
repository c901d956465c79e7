//! Fixed contents of each playground scene.

use folio_common::{Color, SceneId};

use crate::float::FloatMotion;
use crate::primitive::{Bob, Material, Primitive, Shape};

const BLUE: Color = Color::rgb(0x3b, 0x82, 0xf6);
const RED: Color = Color::rgb(0xef, 0x44, 0x44);
const GREEN: Color = Color::rgb(0x10, 0xb9, 0x81);
const AMBER: Color = Color::rgb(0xf5, 0x9e, 0x0b);
const VIOLET: Color = Color::rgb(0x8b, 0x5c, 0xf6);

const SPHERE_SPIN: [f32; 3] = [0.5, 0.3, 0.0];
const SPHERE_BOB: Bob = Bob::Drift {
    amplitude: 0.3,
    frequency: 2.0,
};

/// Builds the primitives of `id`, mounted at scene time `at`.
pub(crate) fn build(id: SceneId, at: f32) -> Vec<Primitive> {
    let primitives = match id {
        SceneId::Text => vec![Primitive::new(
            Shape::Text {
                content: "TEMO".into(),
                size: 1.0,
            },
            Material::solid(BLUE),
            [0.0; 3],
        )],
        SceneId::Spheres => vec![
            animated_sphere([-2.0, 0.0, 0.0], BLUE),
            animated_sphere([2.0, 0.0, 0.0], RED),
            animated_sphere([0.0, 2.0, 0.0], GREEN),
            animated_sphere([0.0, -2.0, 0.0], AMBER),
        ],
        SceneId::Geometry => vec![
            Primitive::new(
                Shape::Cuboid {
                    size: [1.0, 1.0, 1.0],
                },
                Material::solid(VIOLET).with_opacity(0.8),
                [-2.0, 0.0, 0.0],
            )
            .with_spin([0.3, 0.5, 0.2]),
            Primitive::new(
                Shape::Torus {
                    radius: 1.0,
                    tube: 0.3,
                    radial_segments: 16,
                    tubular_segments: 100,
                },
                Material::wireframe(GREEN),
                [2.0, 0.0, 0.0],
            )
            .with_spin([0.2, 0.4, 0.0]),
            animated_sphere([0.0, 0.0, 2.0], VIOLET),
        ],
    };
    primitives.into_iter().map(|p| p.mount(at)).collect()
}

/// Group motion wrapping the scene, if any.
pub(crate) fn group_motion(id: SceneId) -> Option<FloatMotion> {
    match id {
        SceneId::Text => Some(FloatMotion::default()),
        SceneId::Spheres | SceneId::Geometry => None,
    }
}

fn animated_sphere(position: [f32; 3], color: Color) -> Primitive {
    Primitive::new(
        Shape::Sphere {
            radius: 0.5,
            width_segments: 32,
            height_segments: 32,
        },
        Material::wireframe(color),
        position,
    )
    .with_spin(SPHERE_SPIN)
    .with_bob(SPHERE_BOB)
}
