//! # Mesh Module
//!
//! The minimal contract a finite-volume mesh offers to the code that
//! assembles equations on it, plus the topology and metric derivations that
//! work on any mesh honouring that contract.
//!
//! ## Structure
//!
//! - [`Mesh`] - counts, vertex coordinates, face-vertex and cell-face
//!   adjacency, primary geometric quantities
//! - [`connectivity`] - face-cell adjacency, orientations, boundary subsets
//! - [`metrics`] - centers, distances and projections derived from geometry
//! - [`validate`] - structural and geometric consistency checks
//!
//! ## Example
//!
//! ```rust
//! use fipy_mesh::{Grid3D, Mesh};
//!
//! let grid = Grid3D::new(0.5, 2.0, 4.0, Some(3), Some(2), Some(1)).unwrap();
//! assert_eq!(grid.vertex_count(), 24);
//! assert_eq!(grid.face_count(), 29);
//! assert_eq!(grid.cell_count(), 6);
//! ```

pub mod connectivity;
pub mod metrics;

use ::config::constants::{FACES_PER_CELL, MESH_DIMENSION, VERTICES_PER_FACE};
use rayon::prelude::*;

use crate::core::vec3::{polygon_normal, Vec3};
use crate::error::{MeshError, MeshResult};
use crate::units::Scale;

pub use connectivity::{Connectivity, FaceCells};

/// Vertex IDs bounding one face, ordered around its boundary.
pub type FaceVertices = [usize; VERTICES_PER_FACE];

/// Face IDs bounding one cell, in slot order.
pub type CellFaces = [usize; FACES_PER_CELL];

// =============================================================================
// MESH TRAIT
// =============================================================================

/// Capability interface of a finite-volume mesh.
///
/// Implementors provide the primary arrays; everything else (adjacency,
/// centers, distances) can be derived from them with [`Connectivity`] and
/// the [`metrics`] functions. All geometric quantities are dimensionless and
/// are converted to physical values through [`Mesh::scale`].
pub trait Mesh {
    /// Spatial dimension of the mesh.
    fn dim(&self) -> usize {
        MESH_DIMENSION
    }

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of faces.
    fn face_count(&self) -> usize;

    /// Number of cells.
    fn cell_count(&self) -> usize;

    /// Vertex coordinates indexed by vertex ID.
    fn vertex_coords(&self) -> &[Vec3];

    /// Corner vertex IDs of every face.
    fn face_vertex_ids(&self) -> &[FaceVertices];

    /// Bounding face IDs of every cell.
    fn cell_face_ids(&self) -> &[CellFaces];

    /// Area of every face.
    fn face_areas(&self) -> &[f64];

    /// Unit normal of every face.
    fn face_normals(&self) -> &[Vec3];

    /// Volume of every cell.
    fn cell_volumes(&self) -> &[f64];

    /// Length scale of the mesh.
    fn scale(&self) -> Scale;
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Checks the structural and geometric invariants of a mesh.
///
/// - every per-face and per-cell array has one entry per face or cell
/// - every cell references [`FACES_PER_CELL`] distinct, existing faces
/// - every face belongs to one or two cells
/// - every face-vertex ID exists and the corner polygon is parallel to the
///   stored normal
/// - every cell volume is positive
/// - the orientation-corrected, area-weighted normals of each cell sum to zero
///
/// # Errors
///
/// Returns [`MeshError::InvalidTopology`] describing the first violation.
///
/// # Examples
/// ```
/// use fipy_mesh::{mesh, Grid3D};
/// let grid = Grid3D::new(1.0, 1.0, 1.0, Some(4), Some(3), Some(2)).unwrap();
/// assert!(mesh::validate(&grid, 1e-9).is_ok());
/// ```
pub fn validate<M: Mesh + ?Sized>(mesh: &M, tolerance: f64) -> MeshResult<()> {
    let face_count = mesh.face_count();
    let cell_faces = mesh.cell_face_ids();

    if cell_faces.len() != mesh.cell_count() {
        return Err(MeshError::invalid_topology(format!(
            "{} cell-face rows for {} cells",
            cell_faces.len(),
            mesh.cell_count()
        )));
    }

    let lengths = [
        ("face-vertex", mesh.face_vertex_ids().len(), face_count),
        ("face area", mesh.face_areas().len(), face_count),
        ("face normal", mesh.face_normals().len(), face_count),
        ("cell volume", mesh.cell_volumes().len(), mesh.cell_count()),
    ];
    if let Some((name, len, expected)) = lengths
        .into_iter()
        .find(|(_, len, expected)| len != expected)
    {
        return Err(MeshError::invalid_topology(format!(
            "{len} {name} entries, expected {expected}"
        )));
    }

    // Distinct, in-range face references per cell
    cell_faces
        .par_iter()
        .enumerate()
        .try_for_each(|(cell, faces)| {
            for (slot, &face) in faces.iter().enumerate() {
                if face >= face_count {
                    return Err(MeshError::invalid_topology(format!(
                        "cell {cell} references missing face {face}"
                    )));
                }
                if faces[..slot].contains(&face) {
                    return Err(MeshError::invalid_topology(format!(
                        "cell {cell} references face {face} twice"
                    )));
                }
            }
            Ok(())
        })?;

    // At most two cells per face, none orphaned
    let connectivity = Connectivity::from_mesh(mesh)?;

    // Corner polygons agree with stored normals
    let vertices = mesh.vertex_coords();
    let normals = mesh.face_normals();
    mesh.face_vertex_ids()
        .par_iter()
        .enumerate()
        .try_for_each(|(face, ids)| {
            if ids.iter().any(|&v| v >= vertices.len()) {
                return Err(MeshError::invalid_topology(format!(
                    "face {face} references a missing vertex"
                )));
            }
            let corners: [Vec3; VERTICES_PER_FACE] = std::array::from_fn(|i| vertices[ids[i]]);
            let sense = polygon_normal(&corners).normalize_or_zero();
            if (sense.dot(normals[face]).abs() - 1.0).abs() > tolerance {
                return Err(MeshError::invalid_topology(format!(
                    "face {face} corner polygon is not parallel to its normal"
                )));
            }
            Ok(())
        })?;

    if let Some(cell) = mesh.cell_volumes().iter().position(|&v| v <= 0.0) {
        return Err(MeshError::invalid_topology(format!(
            "cell {cell} has non-positive volume"
        )));
    }

    // Closed cell surfaces
    let projections = metrics::cell_area_projections(
        mesh.face_normals(),
        mesh.face_areas(),
        cell_faces,
        connectivity.cell_face_orientations(),
    );
    projections
        .par_iter()
        .enumerate()
        .try_for_each(|(cell, slots)| {
            let sum = slots.iter().fold(Vec3::ZERO, |acc, p| acc + *p);
            let reference = slots.iter().map(|p| p.length()).fold(0.0, f64::max);
            if sum.length() > tolerance * reference.max(1.0) {
                return Err(MeshError::invalid_topology(format!(
                    "cell {cell} surface is not closed (residual {sum})"
                )));
            }
            Ok(())
        })?;

    Ok(())
}
