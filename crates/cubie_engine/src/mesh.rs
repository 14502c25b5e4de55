//! Cubie meshes, as far as the engine needs to know about them.

use cgmath::Vector3;

use crate::geometry::Axis;

/// Polygon layout of the mesh drawn for each cubie.
///
/// The engine only needs the outward normal of each polygon so that it can
/// tell which polygons carry which sticker.
pub trait CubieGeometry {
    /// Returns the outward normal of each polygon, in polygon order.
    fn polygon_normals(&self) -> Vec<Vector3<f32>>;
}

/// Axis-aligned box made of 12 triangles: two per side, with sides in the
/// order +X, -X, +Y, -Y, +Z, -Z.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BoxGeometry;
impl BoxGeometry {
    /// Number of triangles in the mesh.
    pub const TRIANGLE_COUNT: usize = 12;
}
impl CubieGeometry for BoxGeometry {
    fn polygon_normals(&self) -> Vec<Vector3<f32>> {
        Axis::iter()
            .flat_map(|axis| [axis.unit_vec3(), -axis.unit_vec3()])
            .flat_map(|normal| [normal; 2])
            .collect()
    }
}
