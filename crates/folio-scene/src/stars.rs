//! Starfield generation: a shell of point sprites around the scene.

use rand::Rng;
use std::f32::consts::PI;

/// One star, laid out for direct upload as a GPU instance.
///
/// Layout: position(vec3) + size(f32) + color(vec4) = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Star {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Shape and look of a starfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldParams {
    /// Inner radius of the shell.
    pub radius: f32,
    /// Shell thickness; stars start at `radius + depth` and step inward.
    pub depth: f32,
    pub count: u32,
    /// Size multiplier.
    pub factor: f32,
    /// Colour saturation, 0.0 gives white stars.
    pub saturation: f32,
    /// Soft round sprites instead of hard squares.
    pub fade: bool,
    /// Twinkle speed.
    pub speed: f32,
    pub seed: u64,
}

impl StarfieldParams {
    pub fn with_count(count: u32) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Generates the stars.
    pub fn generate(&self) -> Vec<Star> {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    pub fn generate_with(&self, rng: &mut impl Rng) -> Vec<Star> {
        let count = self.count as usize;
        let mut stars = Vec::with_capacity(count);
        let mut r = self.radius + self.depth;
        let increment = if count > 0 {
            self.depth / count as f32
        } else {
            0.0
        };

        for i in 0..count {
            r -= increment * rng.gen::<f32>();
            let theta = (1.0 - rng.gen::<f32>() * 2.0).clamp(-1.0, 1.0).acos();
            let phi = rng.gen::<f32>() * 2.0 * PI;
            let position = [
                r * theta.sin() * phi.sin(),
                r * theta.cos(),
                r * theta.sin() * phi.cos(),
            ];
            let [cr, cg, cb] = hsl_to_rgb(i as f32 / count as f32, self.saturation, 0.9);
            stars.push(Star {
                position,
                size: (0.5 + 0.5 * rng.gen::<f32>()) * self.factor,
                color: [cr, cg, cb, 1.0],
            });
        }
        stars
    }
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            radius: 100.0,
            depth: 50.0,
            count: 5000,
            factor: 4.0,
            saturation: 0.0,
            fade: true,
            speed: 1.0,
            seed: 0x5eed_57a2,
        }
    }
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue = |mut t: f32| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    [hue(h + 1.0 / 3.0), hue(h), hue(h - 1.0 / 3.0)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::length;

    #[test]
    fn star_size_is_32_bytes() {
        assert_eq!(std::mem::size_of::<Star>(), 32);
    }

    #[test]
    fn generates_requested_count_within_shell() {
        let params = StarfieldParams::with_count(3000);
        let stars = params.generate();
        assert_eq!(stars.len(), 3000);
        for s in &stars {
            let r = length(s.position);
            assert!(r >= 100.0 - 1e-3 && r <= 150.0 + 1e-3, "r = {r}");
            assert!(s.size >= 2.0 && s.size <= 4.0);
        }
    }

    #[test]
    fn same_seed_same_stars() {
        let params = StarfieldParams::with_count(50);
        assert_eq!(params.generate(), params.generate());
    }

    #[test]
    fn zero_saturation_is_grey() {
        let stars = StarfieldParams::with_count(10).generate();
        for s in stars {
            assert!((s.color[0] - 0.9).abs() < 1e-6);
            assert_eq!(s.color[0], s.color[2]);
        }
    }

    #[test]
    fn empty_field() {
        assert!(StarfieldParams::with_count(0).generate().is_empty());
    }

    #[test]
    fn hsl_primary_red() {
        let [r, g, b] = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((r - 1.0).abs() < 1e-6 && g.abs() < 1e-6 && b.abs() < 1e-6);
    }
}
