//! Triangle-list mesh generation for the primitive shapes.
//!
//! Meshes are emitted unindexed so every corner carries a barycentric
//! coordinate, which the fragment shader uses to draw wireframe edges.
//! All generators wind triangles counter-clockwise seen from outside.

mod cuboid;
mod sphere;
mod torus;

pub use cuboid::generate_cuboid;
pub use sphere::generate_sphere;
pub use torus::generate_torus;

use crate::matrix::{cross, sub, Vec3};

/// A single mesh vertex.
///
/// Layout: position(vec3) + normal(vec3) + barycentric(vec3) = 36 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub barycentric: [f32; 3],
}

/// Hashable identity of a generated mesh, so the renderer can upload each
/// distinct geometry once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKey {
    Sphere {
        radius_bits: u32,
        width_segments: u32,
        height_segments: u32,
    },
    Cuboid {
        size_bits: [u32; 3],
    },
    Torus {
        radius_bits: u32,
        tube_bits: u32,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

impl MeshKey {
    /// Generates the vertices this key describes.
    pub fn build(&self) -> Vec<MeshVertex> {
        match *self {
            MeshKey::Sphere {
                radius_bits,
                width_segments,
                height_segments,
            } => generate_sphere(f32::from_bits(radius_bits), width_segments, height_segments),
            MeshKey::Cuboid { size_bits } => generate_cuboid([
                f32::from_bits(size_bits[0]),
                f32::from_bits(size_bits[1]),
                f32::from_bits(size_bits[2]),
            ]),
            MeshKey::Torus {
                radius_bits,
                tube_bits,
                radial_segments,
                tubular_segments,
            } => generate_torus(
                f32::from_bits(radius_bits),
                f32::from_bits(tube_bits),
                radial_segments,
                tubular_segments,
            ),
        }
    }
}

const CORNERS: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Appends one triangle with per-corner normals.
pub(crate) fn push_triangle(out: &mut Vec<MeshVertex>, p: [Vec3; 3], n: [Vec3; 3]) {
    for i in 0..3 {
        out.push(MeshVertex {
            position: p[i],
            normal: n[i],
            barycentric: CORNERS[i],
        });
    }
}

/// Unnormalized face normal from winding order.
pub(crate) fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    cross(sub(b, a), sub(c, a))
}

#[cfg(test)]
pub(crate) fn assert_outward_winding(mesh: &[MeshVertex], centre_of: impl Fn(Vec3) -> Vec3) {
    use crate::matrix::dot;
    for (i, tri) in mesh.chunks_exact(3).enumerate() {
        let n = face_normal(tri[0].position, tri[1].position, tri[2].position);
        let out = sub(tri[0].position, centre_of(tri[0].position));
        assert!(dot(n, out) > -1e-6, "triangle {i} winds inward");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_vertex_size_is_36_bytes() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 36);
        assert_eq!(std::mem::align_of::<MeshVertex>(), 4);
    }

    #[test]
    fn barycentric_corners_cycle() {
        let mesh = generate_cuboid([1.0, 1.0, 1.0]);
        for tri in mesh.chunks_exact(3) {
            assert_eq!(tri[0].barycentric, CORNERS[0]);
            assert_eq!(tri[1].barycentric, CORNERS[1]);
            assert_eq!(tri[2].barycentric, CORNERS[2]);
        }
    }

    #[test]
    fn key_builds_matching_mesh() {
        let key = MeshKey::Sphere {
            radius_bits: 0.5f32.to_bits(),
            width_segments: 8,
            height_segments: 4,
        };
        assert_eq!(key.build(), generate_sphere(0.5, 8, 4));
    }
}
