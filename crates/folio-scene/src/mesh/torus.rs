use std::f32::consts::PI;

use super::{push_triangle, MeshVertex};

/// Torus in the XY plane around the Z axis.
///
/// `radius` is the distance from the centre to the tube centre, `tube` the
/// tube radius. Emits `radial_segments * tubular_segments * 6` vertices.
pub fn generate_torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> Vec<MeshVertex> {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);

    let point = |j: u32, i: u32| -> ([f32; 3], [f32; 3]) {
        let u = i as f32 / tubular as f32 * 2.0 * PI;
        let v = j as f32 / radial as f32 * 2.0 * PI;
        let p = [
            (radius + tube * v.cos()) * u.cos(),
            (radius + tube * v.cos()) * u.sin(),
            tube * v.sin(),
        ];
        let n = [v.cos() * u.cos(), v.cos() * u.sin(), v.sin()];
        (p, n)
    };

    let mut out = Vec::with_capacity((radial * tubular * 6) as usize);
    for j in 1..=radial {
        for i in 1..=tubular {
            let (pa, na) = point(j, i - 1);
            let (pb, nb) = point(j - 1, i - 1);
            let (pc, nc) = point(j - 1, i);
            let (pd, nd) = point(j, i);
            push_triangle(&mut out, [pa, pb, pd], [na, nb, nd]);
            push_triangle(&mut out, [pb, pc, pd], [nb, nc, nd]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::assert_outward_winding;

    #[test]
    fn vertex_count() {
        assert_eq!(generate_torus(1.0, 0.3, 16, 100).len(), 16 * 100 * 6);
    }

    #[test]
    fn vertices_lie_on_tube() {
        for v in generate_torus(1.0, 0.3, 8, 12) {
            let ring = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
            let d = ((ring - 1.0).powi(2) + v.position[2].powi(2)).sqrt();
            assert!((d - 0.3).abs() < 1e-4);
        }
    }

    #[test]
    fn winding_is_outward_from_tube_centre() {
        let mesh = generate_torus(1.0, 0.3, 8, 12);
        assert_outward_winding(&mesh, |p| {
            let ring = (p[0].powi(2) + p[1].powi(2)).sqrt().max(1e-6);
            [p[0] / ring, p[1] / ring, 0.0]
        });
    }
}
