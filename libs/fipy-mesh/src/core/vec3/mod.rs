//! Thin wrapper around `glam::DVec3` shared across mesh modules.
//!
//! Point averages and polygon normals used by the mesh metrics live here so
//! higher layers never depend on `glam` directly.

pub use glam::DVec3 as Vec3;

/// Arithmetic mean of a set of points.
///
/// Returns the zero vector for an empty slice.
///
/// # Examples
/// ```
/// use fipy_mesh::Vec3;
/// use fipy_mesh::core::vec3::centroid;
/// let c = centroid(&[Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0)]);
/// assert_eq!(c, Vec3::new(1.0, 2.0, 3.0));
/// ```
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    let sum = points.iter().fold(Vec3::ZERO, |acc, p| acc + *p);
    sum / points.len() as f64
}

/// Normal of a planar polygon by Newell's method, not normalized.
///
/// The direction follows the right-hand rule over the corner order; the
/// length equals twice the polygon area.
///
/// # Examples
/// ```
/// use fipy_mesh::Vec3;
/// use fipy_mesh::core::vec3::polygon_normal;
/// let square = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y];
/// assert_eq!(polygon_normal(&square), Vec3::new(0.0, 0.0, 2.0));
/// ```
pub fn polygon_normal(corners: &[Vec3]) -> Vec3 {
    let n = corners.len();
    (0..n).fold(Vec3::ZERO, |acc, i| {
        let a = corners[i];
        let b = corners[(i + 1) % n];
        acc + Vec3::new(
            (a.y - b.y) * (a.z + b.z),
            (a.z - b.z) * (a.x + b.x),
            (a.x - b.x) * (a.y + b.y),
        )
    })
}

#[cfg(test)]
mod tests;
