use super::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

fn camera(controls: OrbitControls) -> OrbitCamera {
    OrbitCamera::new([0.0, 0.0, 5.0], 75.0, controls)
}

fn undamped() -> OrbitControls {
    OrbitControls {
        damping: 0.0,
        ..OrbitControls::default()
    }
}

#[test]
fn starts_on_positive_z() {
    let cam = camera(OrbitControls::default());
    assert!((cam.distance - 5.0).abs() < 1e-6);
    assert!((cam.polar - FRAC_PI_2).abs() < 1e-6);
    let eye = cam.eye();
    assert!(eye[0].abs() < 1e-5);
    assert!((eye[2] - 5.0).abs() < 1e-5);
}

#[test]
fn drag_across_full_height_turns_once() {
    let mut cam = camera(undamped());
    cam.rotate(600.0, 0.0, 600.0);
    cam.update(1.0 / 60.0);
    assert!(cam.azimuth.abs() < 1e-4 || (cam.azimuth - TAU).abs() < 1e-4);
}

#[test]
fn polar_angle_is_clamped() {
    let mut cam = camera(undamped());
    cam.rotate(0.0, 10_000.0, 100.0);
    cam.update(0.016);
    assert!(cam.polar > 0.0);
    cam.rotate(0.0, -20_000.0, 100.0);
    cam.update(0.016);
    assert!(cam.polar < PI);
}

#[test]
fn zoom_is_clamped() {
    let mut cam = camera(OrbitControls::default());
    cam.zoom(1.0);
    assert!((cam.distance - 4.75).abs() < 1e-5);
    cam.zoom(1000.0);
    assert_eq!(cam.distance, 1.0);
    cam.zoom(-1000.0);
    assert_eq!(cam.distance, 50.0);
}

#[test]
fn disabled_inputs_are_ignored() {
    let mut cam = camera(OrbitControls::backdrop(0.5));
    let before = cam.clone();
    cam.zoom(3.0);
    cam.pan(100.0, 50.0, 400.0);
    cam.update(0.0);
    assert_eq!(cam.distance, before.distance);
    assert_eq!(cam.target, before.target);
}

#[test]
fn auto_rotate_turns_at_configured_speed() {
    let mut cam = camera(OrbitControls {
        auto_rotate: true,
        auto_rotate_speed: 1.0,
        damping: 0.0,
        ..OrbitControls::default()
    });
    // Half a turn in thirty seconds.
    for _ in 0..300 {
        cam.update(0.1);
    }
    assert!((cam.azimuth - PI).abs() < 1e-3);
}

#[test]
fn auto_rotate_pauses_while_dragging() {
    let mut cam = camera(OrbitControls::backdrop(0.5));
    cam.set_dragging(true);
    cam.update(1.0);
    assert!(cam.azimuth.abs() < 1e-6);
    assert!(cam.is_dragging());
}

#[test]
fn damping_converges_independent_of_frame_rate() {
    let mut a = camera(OrbitControls::default());
    let mut b = camera(OrbitControls::default());
    a.rotate(-60.0, 0.0, 600.0);
    b.rotate(-60.0, 0.0, 600.0);
    for _ in 0..120 {
        a.update(1.0 / 120.0);
    }
    for _ in 0..30 {
        b.update(1.0 / 30.0);
    }
    assert!((a.azimuth - b.azimuth).abs() < 1e-4);
    assert!(a.azimuth > 0.0);
}

#[test]
fn pan_moves_target_sideways() {
    let mut cam = camera(undamped());
    cam.pan(100.0, 0.0, 500.0);
    cam.update(0.016);
    assert!(cam.target[0] < 0.0);
    assert!(cam.target[1].abs() < 1e-5);
}
