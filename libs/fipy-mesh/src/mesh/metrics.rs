//! # Metrics
//!
//! Centers, distances and area projections derived from the primary mesh
//! arrays and its [`Connectivity`](super::Connectivity).
//!
//! All functions are pure: they take slices and return freshly computed
//! arrays. Meshes that want to reuse the results memoize them.

use ::config::constants::FACES_PER_CELL;

use crate::core::vec3::{centroid, Vec3};
use crate::mesh::{CellFaces, FaceCells, FaceVertices};

/// Distances from a face center to the centers of its adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceToCellDistance {
    /// Distance to the first cell.
    pub first: f64,
    /// Distance to the second cell, `None` on the boundary.
    pub second: Option<f64>,
}

/// Center of every face: the mean of its corner vertices.
pub fn face_centers(vertices: &[Vec3], face_vertices: &[FaceVertices]) -> Vec<Vec3> {
    face_vertices
        .iter()
        .map(|ids| centroid(&ids.map(|v| vertices[v])))
        .collect()
}

/// Center of every cell: the mean of its face centers.
pub fn cell_centers(face_centers: &[Vec3], cell_faces: &[CellFaces]) -> Vec<Vec3> {
    cell_faces
        .iter()
        .map(|faces| centroid(&faces.map(|f| face_centers[f])))
        .collect()
}

/// Distance from every face center to each adjacent cell center.
pub fn face_to_cell_distances(
    face_centers: &[Vec3],
    cell_centers: &[Vec3],
    face_cells: &[FaceCells],
) -> Vec<FaceToCellDistance> {
    face_centers
        .iter()
        .zip(face_cells)
        .map(|(center, cells)| FaceToCellDistance {
            first: center.distance(cell_centers[cells.first]),
            second: cells.second.map(|c| center.distance(cell_centers[c])),
        })
        .collect()
}

/// Characteristic distance of every face.
///
/// Interior faces: distance between the two cell centers. Boundary faces:
/// distance from the face center to its single cell center.
pub fn cell_distances(
    face_centers: &[Vec3],
    cell_centers: &[Vec3],
    face_cells: &[FaceCells],
) -> Vec<f64> {
    face_centers
        .iter()
        .zip(face_cells)
        .map(|(center, cells)| {
            let first = cell_centers[cells.first];
            match cells.second {
                Some(second) => first.distance(cell_centers[second]),
                None => first.distance(*center),
            }
        })
        .collect()
}

/// Ratio of the first face-to-cell distance to the cell distance, per face.
///
/// `1.0` on the boundary, `0.5` for interior faces of a uniform grid.
pub fn face_to_cell_distance_ratios(
    face_to_cell: &[FaceToCellDistance],
    cell_distances: &[f64],
) -> Vec<f64> {
    face_to_cell
        .iter()
        .zip(cell_distances)
        .map(|(d, &total)| d.first / total)
        .collect()
}

/// Face normal scaled by face area, per face.
pub fn area_projections(normals: &[Vec3], areas: &[f64]) -> Vec<Vec3> {
    normals.iter().zip(areas).map(|(n, &a)| *n * a).collect()
}

/// Face normals seen from each cell, flipped to point out of the cell.
pub fn cell_normals(
    normals: &[Vec3],
    cell_faces: &[CellFaces],
    orientations: &[[i8; FACES_PER_CELL]],
) -> Vec<[Vec3; FACES_PER_CELL]> {
    cell_faces
        .iter()
        .zip(orientations)
        .map(|(faces, signs)| std::array::from_fn(|slot| normals[faces[slot]] * f64::from(signs[slot])))
        .collect()
}

/// Outward area projections seen from each cell.
///
/// # Panics
///
/// If a face ID in `cell_faces` is out of range for `normals` or `areas`.
/// [`validate`](super::validate) checks the array lengths before calling this.
pub fn cell_area_projections(
    normals: &[Vec3],
    areas: &[f64],
    cell_faces: &[CellFaces],
    orientations: &[[i8; FACES_PER_CELL]],
) -> Vec<[Vec3; FACES_PER_CELL]> {
    cell_normals(normals, cell_faces, orientations)
        .into_iter()
        .zip(cell_faces)
        .map(|(slots, faces)| std::array::from_fn(|slot| slots[slot] * areas[faces[slot]]))
        .collect()
}

/// Cell distance of the face in each cell slot.
pub fn cell_to_cell_distances(
    cell_distances: &[f64],
    cell_faces: &[CellFaces],
) -> Vec<[f64; FACES_PER_CELL]> {
    cell_faces
        .iter()
        .map(|faces| faces.map(|f| cell_distances[f]))
        .collect()
}
