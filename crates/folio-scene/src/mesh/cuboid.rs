use super::{push_triangle, MeshVertex};

/// (normal, u, v) per face, with `u × v = normal`.
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Axis-aligned box centred at the origin, two triangles per face.
pub fn generate_cuboid(size: [f32; 3]) -> Vec<MeshVertex> {
    let half = [size[0] * 0.5, size[1] * 0.5, size[2] * 0.5];
    let mul = |a: [f32; 3], s: f32| -> [f32; 3] {
        [a[0] * half[0] * s, a[1] * half[1] * s, a[2] * half[2] * s]
    };

    let mut out = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let c = mul(n, 1.0);
        let corner = |su: f32, sv: f32| -> [f32; 3] {
            let a = mul(u, su);
            let b = mul(v, sv);
            [c[0] + a[0] + b[0], c[1] + a[1] + b[1], c[2] + a[2] + b[2]]
        };
        let p0 = corner(-1.0, -1.0);
        let p1 = corner(1.0, -1.0);
        let p2 = corner(1.0, 1.0);
        let p3 = corner(-1.0, 1.0);
        push_triangle(&mut out, [p0, p1, p2], [n; 3]);
        push_triangle(&mut out, [p0, p2, p3], [n; 3]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{assert_outward_winding, face_normal};
    use crate::matrix::{dot, normalize};

    #[test]
    fn has_36_vertices() {
        assert_eq!(generate_cuboid([1.0, 1.0, 1.0]).len(), 36);
    }

    #[test]
    fn extents_match_size() {
        let mesh = generate_cuboid([2.0, 1.0, 4.0]);
        for axis in 0..3 {
            let max = mesh
                .iter()
                .map(|v| v.position[axis])
                .fold(f32::MIN, f32::max);
            assert!((max - [1.0, 0.5, 2.0][axis]).abs() < 1e-6);
        }
    }

    #[test]
    fn winding_matches_face_normals() {
        let mesh = generate_cuboid([1.0, 1.0, 1.0]);
        for tri in mesh.chunks_exact(3) {
            let n = normalize(face_normal(tri[0].position, tri[1].position, tri[2].position));
            assert!((dot(n, tri[0].normal) - 1.0).abs() < 1e-5);
        }
        assert_outward_winding(&mesh, |_| [0.0; 3]);
    }
}
