//! 4×4 matrix math for MVP transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. Projections target the
//! wgpu clip volume (depth 0..1).

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

pub type Vec3 = [f32; 3];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Right-handed perspective projection with a 0..1 depth range.
///
/// `fov_y` is the vertical field of view in radians.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        near * far * range_inv,
        0.0,
    ]
}

/// Right-handed view matrix looking from `eye` towards `target`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = normalize(sub(target, eye));
    let s = normalize(cross(f, up));
    let u = cross(s, f);

    [
        s[0],
        u[0],
        -f[0],
        0.0,
        s[1],
        u[1],
        -f[1],
        0.0,
        s[2],
        u[2],
        -f[2],
        0.0,
        -dot(s, eye),
        -dot(u, eye),
        dot(f, eye),
        1.0,
    ]
}

/// Rotation around the X axis.
pub fn rotate_x(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Y axis.
pub fn rotate_y(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Z axis.
pub fn rotate_z(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Euler rotation applied in X, then Y, then Z intrinsic order
/// (`Rx * Ry * Rz`).
pub fn rotate_xyz(angles: Vec3) -> Mat4 {
    mul(
        &mul(&rotate_x(angles[0]), &rotate_y(angles[1])),
        &rotate_z(angles[2]),
    )
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Uniform scale matrix.
pub fn scale(s: f32) -> Mat4 {
    scale_xyz(s, s, s)
}

pub fn scale_xyz(x: f32, y: f32, z: f32) -> Mat4 {
    [
        x, 0.0, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 0.0, z, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Multiplies a homogeneous point by `m`.
pub fn transform(m: &Mat4, p: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, o) in out.iter_mut().enumerate() {
        *o = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row] * p[3];
    }
    out
}

/// Maps full-window clip space onto a sub-rectangle of the window.
///
/// `rect` is `[x, y, width, height]` in pixels with a top-left origin. The
/// result is pre-multiplied onto a projection so a scene can be drawn into
/// any part of the target, including partially off-screen, without a
/// viewport change.
pub fn viewport_remap(rect: [f32; 4], target_width: f32, target_height: f32) -> Mat4 {
    let [x, y, w, h] = rect;
    let sx = w / target_width;
    let sy = h / target_height;
    let cx = (x + w * 0.5) / target_width * 2.0 - 1.0;
    let cy = 1.0 - (y + h * 0.5) / target_height * 2.0;
    mul(&translate(cx, cy, 0.0), &scale_xyz(sx, sy, 1.0))
}

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn scaled(a: Vec3, s: f32) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn length(a: Vec3) -> f32 {
    dot(a, a).sqrt()
}

/// Unit vector in the direction of `a`; zero stays zero.
pub fn normalize(a: Vec3) -> Vec3 {
    let len = length(a);
    if len <= f32::EPSILON {
        return [0.0; 3];
    }
    scaled(a, 1.0 / len)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Mat4, b: &Mat4, eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_moves_point() {
        let t = translate(1.0, 2.0, 3.0);
        let p = transform(&t, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(p, [2.0, 3.0, 4.0, 1.0]);
    }

    #[test]
    fn rotate_x_90_degrees_maps_y_to_z() {
        let r = rotate_x(std::f32::consts::FRAC_PI_2);
        let p = transform(&r, [0.0, 1.0, 0.0, 1.0]);
        assert!(p[1].abs() < 1e-5);
        assert!((p[2] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rotate_z_90_degrees_maps_x_to_y() {
        let r = rotate_z(std::f32::consts::FRAC_PI_2);
        let p = transform(&r, [1.0, 0.0, 0.0, 1.0]);
        assert!(p[0].abs() < 1e-5);
        assert!((p[1] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rotate_xyz_zero_is_identity() {
        assert!(approx_eq(&rotate_xyz([0.0; 3]), &IDENTITY, 1e-6));
    }

    #[test]
    fn perspective_depth_range_is_zero_to_one() {
        let (near, far) = (0.1, 100.0);
        let p = perspective(std::f32::consts::FRAC_PI_4, 1.0, near, far);
        let n = transform(&p, [0.0, 0.0, -near, 1.0]);
        let f = transform(&p, [0.0, 0.0, -far, 1.0]);
        assert!((n[2] / n[3]).abs() < 1e-5);
        assert!((f[2] / f[3] - 1.0).abs() < 1e-4);
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn look_at_puts_target_on_negative_z() {
        let view = look_at([0.0, 0.0, 5.0], [0.0; 3], [0.0, 1.0, 0.0]);
        let p = transform(&view, [0.0, 0.0, 0.0, 1.0]);
        assert!(p[0].abs() < 1e-5);
        assert!(p[1].abs() < 1e-5);
        assert!((p[2] + 5.0).abs() < 1e-5);
    }

    #[test]
    fn viewport_remap_full_target_is_identity() {
        let m = viewport_remap([0.0, 0.0, 800.0, 600.0], 800.0, 600.0);
        assert!(approx_eq(&m, &IDENTITY, 1e-6));
    }

    #[test]
    fn viewport_remap_maps_corners() {
        // Right half of the window.
        let m = viewport_remap([400.0, 0.0, 400.0, 600.0], 800.0, 600.0);
        let left = transform(&m, [-1.0, 0.0, 0.5, 1.0]);
        let right = transform(&m, [1.0, 0.0, 0.5, 1.0]);
        assert!(left[0].abs() < 1e-6);
        assert!((right[0] - 1.0).abs() < 1e-6);
        assert_eq!(left[2], 0.5);
    }

    #[test]
    fn normalize_zero_vector() {
        assert_eq!(normalize([0.0; 3]), [0.0; 3]);
        let n = normalize([3.0, 0.0, 4.0]);
        assert!((length(n) - 1.0).abs() < 1e-6);
    }
}
