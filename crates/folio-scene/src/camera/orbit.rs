use std::f32::consts::{PI, TAU};

use super::OrbitControls;
use crate::matrix::{self, Mat4, Vec3};

/// Keeps the polar angle off the poles so `look_at` stays well defined.
const POLAR_EPSILON: f32 = 1e-3;

/// Zoom factor per wheel notch.
const ZOOM_STEP: f32 = 0.95;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Angle around +Y measured from +Z, radians.
    pub azimuth: f32,
    /// Angle from +Y, radians.
    pub polar: f32,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub controls: OrbitControls,
    pending_azimuth: f32,
    pending_polar: f32,
    pending_pan: Vec3,
    dragging: bool,
}

impl OrbitCamera {
    /// Camera at `position` looking at the origin.
    pub fn new(position: Vec3, fov_deg: f32, controls: OrbitControls) -> Self {
        let distance = matrix::length(position).max(f32::EPSILON);
        let polar = (position[1] / distance).clamp(-1.0, 1.0).acos();
        let azimuth = position[0].atan2(position[2]);
        Self {
            target: [0.0; 3],
            distance,
            azimuth,
            polar,
            fov_deg,
            near: 0.1,
            far: 1000.0,
            controls,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_pan: [0.0; 3],
            dragging: false,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let s = self.polar.sin();
        matrix::add(
            self.target,
            [
                self.distance * s * self.azimuth.sin(),
                self.distance * self.polar.cos(),
                self.distance * s * self.azimuth.cos(),
            ],
        )
    }

    pub fn view(&self) -> Mat4 {
        matrix::look_at(self.eye(), self.target, [0.0, 1.0, 0.0])
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        matrix::perspective(
            self.fov_deg.to_radians(),
            aspect.max(f32::EPSILON),
            self.near,
            self.far,
        )
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer drag by `(dx, dy)` pixels over a surface `height` pixels tall.
    /// Dragging right turns the scene right, dragging down tilts it down.
    pub fn rotate(&mut self, dx: f32, dy: f32, height: f32) {
        if !self.controls.enable_rotate || height <= 0.0 {
            return;
        }
        self.pending_azimuth -= TAU * dx / height;
        self.pending_polar -= TAU * dy / height;
    }

    /// Wheel zoom. Positive `steps` move the camera closer.
    pub fn zoom(&mut self, steps: f32) {
        if !self.controls.enable_zoom {
            return;
        }
        self.distance = (self.distance * ZOOM_STEP.powf(steps))
            .clamp(self.controls.min_distance, self.controls.max_distance);
    }

    /// Screen-space pan by `(dx, dy)` pixels over a surface `height` pixels tall.
    pub fn pan(&mut self, dx: f32, dy: f32, height: f32) {
        if !self.controls.enable_pan || height <= 0.0 {
            return;
        }
        let view = self.view();
        let right = [view[0], view[4], view[8]];
        let up = [view[1], view[5], view[9]];
        let extent = self.distance * (self.fov_deg.to_radians() * 0.5).tan();
        let px = 2.0 * dx * extent / height;
        let py = 2.0 * dy * extent / height;
        self.pending_pan = matrix::add(
            self.pending_pan,
            matrix::add(matrix::scaled(right, -px), matrix::scaled(up, py)),
        );
    }

    /// Applies auto-rotation and eases pending motion by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        if self.controls.auto_rotate && !self.dragging {
            self.azimuth -= TAU / 60.0 * self.controls.auto_rotate_speed * dt;
        }

        let applied = if self.controls.damping > 0.0 {
            1.0 - (1.0 - self.controls.damping.min(1.0)).powf(dt * 60.0)
        } else {
            1.0
        };

        self.azimuth += self.pending_azimuth * applied;
        self.polar += self.pending_polar * applied;
        self.target = matrix::add(self.target, matrix::scaled(self.pending_pan, applied));

        let remaining = 1.0 - applied;
        self.pending_azimuth *= remaining;
        self.pending_polar *= remaining;
        self.pending_pan = matrix::scaled(self.pending_pan, remaining);

        self.polar = self.polar.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.azimuth = self.azimuth.rem_euclid(TAU);
    }
}
