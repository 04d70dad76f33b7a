//! Closed-form geometry of a uniform grid: areas, normals, tangents, volumes.

use crate::core::vec3::Vec3;
use crate::grid3d::faces::{FaceFamily, FaceLayout};

pub(crate) fn face_areas(layout: &FaceLayout, spacing: Vec3) -> Vec<f64> {
    FaceFamily::ALL
        .into_iter()
        .flat_map(|family| std::iter::repeat(family.area(spacing)).take(layout.count(family)))
        .collect()
}

/// Unit normals. Boundary faces point out of the domain; interior faces
/// point towards increasing coordinate.
pub(crate) fn face_normals(layout: &FaceLayout, [nx, ny, _]: [usize; 3]) -> Vec<Vec3> {
    let mut normals = Vec::with_capacity(layout.total());

    // XY: only the z = 0 layer faces down.
    normals.extend((0..layout.count(FaceFamily::XY)).map(|i| {
        if i < nx * ny {
            -Vec3::Z
        } else {
            Vec3::Z
        }
    }));

    // XZ: the y = 0 row of each layer faces -y.
    let xz_layer = nx * (ny + 1);
    normals.extend((0..layout.count(FaceFamily::XZ)).map(|i| {
        if i % xz_layer < nx {
            -Vec3::Y
        } else {
            Vec3::Y
        }
    }));

    // YZ: the x = 0 column faces -x.
    normals.extend((0..layout.count(FaceFamily::YZ)).map(|i| {
        if i % (nx + 1) == 0 {
            -Vec3::X
        } else {
            Vec3::X
        }
    }));

    normals
}

pub(crate) fn face_tangents(layout: &FaceLayout) -> (Vec<Vec3>, Vec<Vec3>) {
    FaceFamily::ALL
        .into_iter()
        .flat_map(|family| {
            let (a, b) = family.tangent_axes();
            std::iter::repeat((a.unit(), b.unit())).take(layout.count(family))
        })
        .unzip()
}

pub(crate) fn cell_volumes(count: usize, spacing: Vec3) -> Vec<f64> {
    vec![spacing.x * spacing.y * spacing.z; count]
}
