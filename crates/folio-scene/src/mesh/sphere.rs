use std::f32::consts::PI;

use super::{push_triangle, MeshVertex};

/// UV sphere centred at the origin with the north pole at +Y.
///
/// The pole rows emit a single triangle per segment, so the vertex count is
/// `width_segments * (2 * height_segments - 2) * 3`.
pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Vec<MeshVertex> {
    let w = width_segments.max(3);
    let h = height_segments.max(2);

    let point = |ix: u32, iy: u32| -> ([f32; 3], [f32; 3]) {
        let u = ix as f32 / w as f32;
        let v = iy as f32 / h as f32;
        let n = [
            -(u * 2.0 * PI).cos() * (v * PI).sin(),
            (v * PI).cos(),
            (u * 2.0 * PI).sin() * (v * PI).sin(),
        ];
        ([n[0] * radius, n[1] * radius, n[2] * radius], n)
    };

    let mut out = Vec::with_capacity((w * (2 * h - 2) * 3) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let (pa, na) = point(ix + 1, iy);
            let (pb, nb) = point(ix, iy);
            let (pc, nc) = point(ix, iy + 1);
            let (pd, nd) = point(ix + 1, iy + 1);
            if iy != 0 {
                push_triangle(&mut out, [pa, pb, pd], [na, nb, nd]);
            }
            if iy != h - 1 {
                push_triangle(&mut out, [pb, pc, pd], [nb, nc, nd]);
            }
        }
    }
    out
}
