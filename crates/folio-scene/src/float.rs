//! Gentle floating wobble applied to a group of primitives.

use crate::matrix::{self, Mat4, Vec3};

/// Group transform that sways and drifts over time.
///
/// With `phase = (offset + t) / 4 * speed`:
/// rotation is `(cos(phase) / 8, sin(phase) / 8, sin(phase) / 20)` scaled by
/// `rotation_intensity`, and height is `sin(phase) / 10 * float_intensity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Time offset so several floating groups don't move in lockstep.
    pub offset: f32,
}

impl FloatMotion {
    pub fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
            offset: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    fn phase(&self, t: f32) -> f32 {
        (self.offset + t) / 4.0 * self.speed
    }

    pub fn rotation(&self, t: f32) -> Vec3 {
        let phase = self.phase(t);
        [
            phase.cos() / 8.0 * self.rotation_intensity,
            phase.sin() / 8.0 * self.rotation_intensity,
            phase.sin() / 20.0 * self.rotation_intensity,
        ]
    }

    pub fn height(&self, t: f32) -> f32 {
        self.phase(t).sin() / 10.0 * self.float_intensity
    }

    pub fn matrix(&self, t: f32) -> Mat4 {
        matrix::mul(
            &matrix::translate(0.0, self.height(t), 0.0),
            &matrix::rotate_xyz(self.rotation(t)),
        )
    }
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self::new(2.0, 1.0, 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_tilted_on_x() {
        let f = FloatMotion::default();
        let r = f.rotation(0.0);
        assert!((r[0] - 0.125).abs() < 1e-6);
        assert!(r[1].abs() < 1e-6);
        assert!(f.height(0.0).abs() < 1e-6);
    }

    #[test]
    fn height_is_bounded_by_intensity() {
        let f = FloatMotion::default();
        for i in 0..1000 {
            assert!(f.height(i as f32 * 0.1).abs() <= 0.2 + 1e-6);
        }
    }

    #[test]
    fn peak_height_at_quarter_period() {
        // speed 2: phase = t / 2, so sin peaks at t = pi.
        let f = FloatMotion::default();
        assert!((f.height(std::f32::consts::PI) - 0.2).abs() < 1e-5);
    }

    #[test]
    fn offset_shifts_phase() {
        let f = FloatMotion::default().with_offset(1.0);
        let g = FloatMotion::default();
        assert!((f.height(0.0) - g.height(1.0)).abs() < 1e-6);
    }
}
