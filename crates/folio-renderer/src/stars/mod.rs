//! Point-sprite starfields, drawn as instanced camera-facing quads.

mod pipeline;
mod renderer;
mod types;

pub use renderer::*;
pub use types::{sprite_fade, sprite_size, StarUniforms};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_size_is_160_bytes() {
        assert_eq!(std::mem::size_of::<StarUniforms>(), 160);
    }

    #[test]
    fn star_instance_size_is_32_bytes() {
        assert_eq!(std::mem::size_of::<folio_scene::Star>(), 32);
    }

    #[test]
    fn sprites_shrink_with_distance() {
        let near = sprite_size(1.0, -10.0, 0.0);
        let far = sprite_size(1.0, -20.0, 0.0);
        assert!((near - 2.0 * far).abs() < 1e-5);
    }

    #[test]
    fn sprites_twinkle_between_two_and_four_times() {
        for i in 0..100 {
            let s = sprite_size(1.0, -30.0, i as f32 * 0.1);
            assert!((2.0 - 1e-5..=4.0 + 1e-5).contains(&s));
        }
    }

    #[test]
    fn stars_behind_the_camera_are_hidden() {
        assert_eq!(sprite_size(1.0, 5.0, 0.0), 0.0);
    }

    #[test]
    fn fade_is_half_at_quarter_width() {
        assert!((sprite_fade(0.25) - 0.5).abs() < 1e-6);
        assert!(sprite_fade(0.0) > 0.95);
        assert!(sprite_fade(0.5) < 0.02);
    }
}
