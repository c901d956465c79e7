//! Lit mesh rendering for the 3D surfaces.

mod pipeline;
mod renderer;
mod types;

pub use renderer::*;
pub use types::{MeshPass, MeshUniforms};

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::Color;
    use folio_scene::matrix;
    use folio_scene::{Lighting, MeshDraw, MeshKey, PointLight};

    fn draw(opacity: f32, wireframe: bool) -> MeshDraw {
        MeshDraw {
            key: MeshKey::Cuboid {
                size_bits: [1f32.to_bits(); 3],
            },
            model: matrix::translate(1.0, 2.0, 3.0),
            color: Color::WHITE,
            opacity,
            wireframe,
        }
    }

    #[test]
    fn uniforms_size_is_224_bytes() {
        assert_eq!(std::mem::size_of::<MeshUniforms>(), 224);
        assert_eq!(std::mem::align_of::<MeshUniforms>(), 4);
    }

    #[test]
    fn uniforms_carry_model_and_lights() {
        let lighting = Lighting::new(0.5)
            .with_point(PointLight::new([10.0, 10.0, 10.0], Color::WHITE, 1.0))
            .with_point(PointLight::new([-10.0, -10.0, -10.0], Color::WHITE, 0.5));
        let u = MeshUniforms::new(&matrix::IDENTITY, &draw(0.8, false), &lighting);
        assert_eq!(u.mvp, u.model);
        assert_eq!(&u.model[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(u.params, [0.8, 0.5, 2.0, 0.0]);
        assert_eq!(u.light_position[1], [-10.0, -10.0, -10.0, 1.0]);
        assert_eq!(u.light_color[1], [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn unlit_scene_has_no_point_lights() {
        let u = MeshUniforms::new(&matrix::IDENTITY, &draw(1.0, false), &Lighting::new(1.0));
        assert_eq!(u.params[2], 0.0);
        assert_eq!(u.light_color, [[0.0; 4]; 2]);
    }

    #[test]
    fn pass_selection() {
        assert_eq!(MeshPass::for_draw(&draw(1.0, false)), MeshPass::Opaque);
        assert_eq!(MeshPass::for_draw(&draw(0.5, false)), MeshPass::Transparent);
        assert_eq!(MeshPass::for_draw(&draw(0.5, true)), MeshPass::Wireframe);
    }
}
