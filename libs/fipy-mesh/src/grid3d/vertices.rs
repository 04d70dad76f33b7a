//! Lattice vertex coordinates.

use crate::core::vec3::Vec3;

/// Coordinates `0, d, 2d, ..., n * d` along one axis.
pub(crate) fn axis_coordinates(d: f64, n: usize) -> Vec<f64> {
    (0..=n).map(|i| i as f64 * d).collect()
}

/// Every lattice vertex, x fastest, then y, then z.
pub(crate) fn create_vertices(spacing: Vec3, [nx, ny, nz]: [usize; 3]) -> Vec<Vec3> {
    let xs = axis_coordinates(spacing.x, nx);
    let ys = axis_coordinates(spacing.y, ny);
    let zs = axis_coordinates(spacing.z, nz);

    let mut vertices = Vec::with_capacity(xs.len() * ys.len() * zs.len());
    for &z in &zs {
        for &y in &ys {
            vertices.extend(xs.iter().map(|&x| Vec3::new(x, y, z)));
        }
    }
    vertices
}
