//! # Grid3D
//!
//! Structured rectangular-prism grid. Construction runs a strictly forward
//! pipeline once:
//!
//! ```text
//! GridParams → resolve → vertices → faces → cells → connectivity
//! ```
//!
//! Everything else (areas, normals, centers, distances, boundary subsets) is
//! derived lazily on first access and memoized for the lifetime of the grid.
//!
//! ## Numbering
//!
//! - Vertices: x fastest, then y, then z.
//! - Cells: same as vertices.
//! - Faces: XY faces first, then XZ, then YZ; each family numbered like the
//!   vertices.
//!
//! ## Example
//!
//! ```rust
//! use fipy_mesh::{Boundary, Grid3D, Mesh};
//!
//! let grid = Grid3D::new(0.5, 2.0, 4.0, Some(3), Some(2), Some(1)).unwrap();
//! assert_eq!(grid.cell_face_ids()[0], [21, 22, 12, 15, 0, 6]);
//! assert_eq!(grid.boundary_faces(Boundary::Bottom), &[12, 13, 14]);
//! assert_eq!(grid.interior_faces(), &[15, 16, 17, 22, 23, 26, 27]);
//! ```

mod boundary;
mod cells;
mod faces;
mod geometry;
mod params;
mod resolve;
mod vertices;

use std::fmt;
use std::sync::OnceLock;

use ::config::constants::{FACES_PER_CELL, VERTICES_PER_CELL};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::MeshConfig;
use crate::core::vec3::Vec3;
use crate::error::MeshResult;
use crate::mesh::metrics::{self, FaceToCellDistance};
use crate::mesh::{self, CellFaces, Connectivity, FaceCells, FaceVertices, Mesh};
use crate::units::{PhysicalShape, Scale, Spacing};

pub use boundary::Boundary;
pub use cells::FaceSlot;
pub use faces::{FaceFamily, FaceLayout};
pub use params::GridParams;

// =============================================================================
// GRID3D STRUCT
// =============================================================================

/// Structured 3D finite-volume grid.
///
/// Immutable after construction. All derived arrays are computed at most
/// once per grid, so repeated accessor calls return the same slice.
#[derive(Clone)]
pub struct Grid3D {
    params: GridParams,
    spacing: Vec3,
    shape: [usize; 3],
    scale: Scale,
    config: MeshConfig,
    layout: FaceLayout,
    vertices: Vec<Vec3>,
    faces: Vec<FaceVertices>,
    cells: Vec<CellFaces>,
    connectivity: Connectivity,
    cache: GridCache,
}

/// Memoized derived properties.
#[derive(Debug, Clone, Default)]
struct GridCache {
    face_areas: OnceLock<Vec<f64>>,
    face_normals: OnceLock<Vec<Vec3>>,
    face_tangents: OnceLock<(Vec<Vec3>, Vec<Vec3>)>,
    cell_volumes: OnceLock<Vec<f64>>,
    face_centers: OnceLock<Vec<Vec3>>,
    cell_centers: OnceLock<Vec<Vec3>>,
    face_to_cell_distances: OnceLock<Vec<FaceToCellDistance>>,
    cell_distances: OnceLock<Vec<f64>>,
    distance_ratios: OnceLock<Vec<f64>>,
    area_projections: OnceLock<Vec<Vec3>>,
    cell_normals: OnceLock<Vec<[Vec3; FACES_PER_CELL]>>,
    cell_area_projections: OnceLock<Vec<[Vec3; FACES_PER_CELL]>>,
    cell_to_cell_distances: OnceLock<Vec<[f64; FACES_PER_CELL]>>,
    cell_to_cell_filled: OnceLock<Vec<[usize; FACES_PER_CELL]>>,
    adjacent_cell_ids: OnceLock<Vec<(usize, usize)>>,
    cell_vertex_ids: OnceLock<Vec<[usize; VERTICES_PER_CELL]>>,
    boundaries: [OnceLock<Vec<usize>>; 6],
}

/// Returns the memoized value of `cell`, computing it with `init` on first use.
fn memo_value<'a, T>(cell: &'a OnceLock<T>, name: &str, init: impl FnOnce() -> T) -> &'a T {
    cell.get_or_init(|| {
        log::trace!("Grid3D: computing {name}");
        init()
    })
}

/// Like [`memo_value`], borrowing the cached array as a slice.
fn memo<'a, T, U>(cell: &'a OnceLock<T>, name: &str, init: impl FnOnce() -> T) -> &'a U
where
    T: AsRef<U>,
    U: ?Sized,
{
    memo_value(cell, name, init).as_ref()
}

impl Grid3D {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Builds a grid from spacings and optional cell counts.
    ///
    /// Spacings accept bare numbers or `(value, unit)` pairs. A missing count
    /// means one cell along that axis.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidSpacing`](crate::MeshError::InvalidSpacing) for
    ///   a non-positive or non-finite spacing
    /// - [`MeshError::InvalidCellCount`](crate::MeshError::InvalidCellCount)
    ///   for a zero count
    /// - [`MeshError::IncompatibleUnits`](crate::MeshError::IncompatibleUnits)
    ///   when y or z carries a unit but x is bare
    /// - [`MeshError::TooManyCells`](crate::MeshError::TooManyCells) above
    ///   the configured limit
    ///
    /// # Examples
    /// ```
    /// use fipy_mesh::{Grid3D, Mesh};
    /// use fipy_mesh::units::LengthUnit;
    ///
    /// let grid = Grid3D::new((2.0, LengthUnit::Millimeter), 1.0, 1.0, Some(4), None, None).unwrap();
    /// assert_eq!(grid.shape(), [4, 1, 1]);
    /// assert_eq!(grid.scale().unit(), Some(LengthUnit::Millimeter));
    /// ```
    pub fn new(
        dx: impl Into<Spacing>,
        dy: impl Into<Spacing>,
        dz: impl Into<Spacing>,
        nx: Option<usize>,
        ny: Option<usize>,
        nz: Option<usize>,
    ) -> MeshResult<Self> {
        Self::from_params(GridParams::new(dx, dy, dz, nx, ny, nz))
    }

    /// Builds a grid from a parameter set with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`Grid3D::new`].
    pub fn from_params(params: GridParams) -> MeshResult<Self> {
        Self::with_config(params, MeshConfig::default())
    }

    /// Builds a grid from a parameter set and an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`Grid3D::new`].
    ///
    /// # Examples
    /// ```
    /// use fipy_mesh::{config::MeshConfig, GridParams, Grid3D, MeshError};
    /// let config = MeshConfig::new(1e-9, 10).unwrap();
    /// let params = GridParams::new(1.0, 1.0, 1.0, Some(4), Some(4), Some(4));
    /// assert!(matches!(
    ///     Grid3D::with_config(params, config),
    ///     Err(MeshError::TooManyCells { count: 64, max: 10 })
    /// ));
    /// ```
    pub fn with_config(params: GridParams, config: MeshConfig) -> MeshResult<Self> {
        let resolved = resolve::resolve(&params, config.max_cells)?;
        let shape = resolved.shape;
        let layout = FaceLayout::new(shape);

        let vertices = vertices::create_vertices(resolved.spacing, shape);
        let faces = faces::create_faces(shape);
        let cells = cells::create_cells(shape, &layout);
        let connectivity = Connectivity::new(layout.total(), &cells)?;

        log::debug!(
            "Grid3D {}x{}x{}: {} vertices, {} faces, {} cells",
            shape[0],
            shape[1],
            shape[2],
            vertices.len(),
            faces.len(),
            cells.len()
        );

        let [nx, ny, nz] = shape;
        Ok(Self {
            params: GridParams {
                nx: Some(nx),
                ny: Some(ny),
                nz: Some(nz),
                ..params
            },
            spacing: resolved.spacing,
            shape,
            scale: resolved.scale,
            config,
            layout,
            vertices,
            faces,
            cells,
            connectivity,
            cache: GridCache::default(),
        })
    }

    // =========================================================================
    // SHAPE AND SCALE
    // =========================================================================

    /// Parameters that reproduce this grid, with counts filled in.
    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Configuration the grid was built with.
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Cell counts `[nx, ny, nz]`.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Dimensionless spacings `(dx, dy, dz)` in the reference unit.
    pub fn spacing(&self) -> Vec3 {
        self.spacing
    }

    /// Extent `(nx dx, ny dy, nz dz)` tagged with the reference unit.
    ///
    /// # Examples
    /// ```
    /// use fipy_mesh::{Grid3D, Vec3};
    /// use fipy_mesh::units::LengthUnit;
    /// let grid = Grid3D::new((1.0, LengthUnit::Centimeter), 2.0, 3.0, Some(10), Some(10), Some(10)).unwrap();
    /// let shape = grid.physical_shape();
    /// assert_eq!(shape.extent, Vec3::new(10.0, 20.0, 30.0));
    /// assert_eq!(shape.unit, Some(LengthUnit::Centimeter));
    /// ```
    pub fn physical_shape(&self) -> PhysicalShape {
        let [nx, ny, nz] = self.shape;
        PhysicalShape {
            extent: self.spacing * Vec3::new(nx as f64, ny as f64, nz as f64),
            unit: self.scale.unit(),
        }
    }

    /// Sizes and offsets of the three face families.
    pub fn face_layout(&self) -> FaceLayout {
        self.layout
    }

    // =========================================================================
    // FACE GEOMETRY
    // =========================================================================

    /// The two unit tangents of every face.
    pub fn face_tangents(&self) -> (&[Vec3], &[Vec3]) {
        let (t1, t2) = memo_value(&self.cache.face_tangents, "face tangents", || {
            geometry::face_tangents(&self.layout)
        });
        (t1.as_slice(), t2.as_slice())
    }

    /// Mean of the four corners of every face.
    pub fn face_centers(&self) -> &[Vec3] {
        memo(&self.cache.face_centers, "face centers", || {
            metrics::face_centers(&self.vertices, &self.faces)
        })
    }

    /// Face normal times face area.
    pub fn area_projections(&self) -> &[Vec3] {
        memo(&self.cache.area_projections, "area projections", || {
            metrics::area_projections(self.face_normals(), self.face_areas())
        })
    }

    // =========================================================================
    // CELL GEOMETRY
    // =========================================================================

    /// Midpoint of every cell.
    pub fn cell_centers(&self) -> &[Vec3] {
        memo(&self.cache.cell_centers, "cell centers", || {
            metrics::cell_centers(self.face_centers(), &self.cells)
        })
    }

    /// Face normals seen from each cell, pointing out of the cell.
    pub fn cell_normals(&self) -> &[[Vec3; FACES_PER_CELL]] {
        memo(&self.cache.cell_normals, "cell normals", || {
            metrics::cell_normals(
                self.face_normals(),
                &self.cells,
                self.connectivity.cell_face_orientations(),
            )
        })
    }

    /// Outward area projections seen from each cell.
    pub fn cell_area_projections(&self) -> &[[Vec3; FACES_PER_CELL]] {
        memo(&self.cache.cell_area_projections, "cell area projections", || {
            metrics::cell_area_projections(
                self.face_normals(),
                self.face_areas(),
                &self.cells,
                self.connectivity.cell_face_orientations(),
            )
        })
    }

    /// Eight corner vertex IDs of every cell, in descending order.
    pub fn cell_vertex_ids(&self) -> &[[usize; VERTICES_PER_CELL]] {
        memo(&self.cache.cell_vertex_ids, "cell vertex ids", || {
            cells::create_cell_vertex_ids(self.shape)
        })
    }

    // =========================================================================
    // DISTANCES
    // =========================================================================

    /// Distance from each face center to its adjacent cell centers.
    pub fn face_to_cell_distances(&self) -> &[FaceToCellDistance] {
        memo(&self.cache.face_to_cell_distances, "face-to-cell distances", || {
            metrics::face_to_cell_distances(
                self.face_centers(),
                self.cell_centers(),
                self.connectivity.face_cells(),
            )
        })
    }

    /// Center-to-center distance across each interior face; face-to-cell
    /// distance for boundary faces.
    pub fn cell_distances(&self) -> &[f64] {
        memo(&self.cache.cell_distances, "cell distances", || {
            metrics::cell_distances(
                self.face_centers(),
                self.cell_centers(),
                self.connectivity.face_cells(),
            )
        })
    }

    /// First face-to-cell distance over cell distance, per face.
    pub fn face_to_cell_distance_ratios(&self) -> &[f64] {
        memo(&self.cache.distance_ratios, "distance ratios", || {
            metrics::face_to_cell_distance_ratios(
                self.face_to_cell_distances(),
                self.cell_distances(),
            )
        })
    }

    /// Cell distance of the face in each cell slot.
    pub fn cell_to_cell_distances(&self) -> &[[f64; FACES_PER_CELL]] {
        memo(&self.cache.cell_to_cell_distances, "cell-to-cell distances", || {
            metrics::cell_to_cell_distances(self.cell_distances(), &self.cells)
        })
    }

    // =========================================================================
    // CONNECTIVITY
    // =========================================================================

    /// Face-cell adjacency and its derived subsets.
    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    /// Adjacent cells of every face, lower ID first.
    pub fn face_cell_ids(&self) -> &[FaceCells] {
        self.connectivity.face_cells()
    }

    /// Adjacent cells of every face, the first repeated on the boundary.
    pub fn adjacent_cell_ids(&self) -> &[(usize, usize)] {
        memo(&self.cache.adjacent_cell_ids, "adjacent cell ids", || {
            self.connectivity.adjacent_cell_ids()
        })
    }

    /// `1` where the cell is its face's first cell, `-1` otherwise.
    pub fn cell_face_orientations(&self) -> &[[i8; FACES_PER_CELL]] {
        self.connectivity.cell_face_orientations()
    }

    /// Neighbour across each cell slot, `None` on the boundary.
    pub fn cell_to_cell_ids(&self) -> &[[Option<usize>; FACES_PER_CELL]] {
        self.connectivity.cell_to_cell_ids()
    }

    /// Neighbour across each cell slot, the cell itself on the boundary.
    pub fn cell_to_cell_ids_filled(&self) -> &[[usize; FACES_PER_CELL]] {
        memo(&self.cache.cell_to_cell_filled, "filled cell-to-cell ids", || {
            self.connectivity.cell_to_cell_ids_filled()
        })
    }

    /// Faces with one adjacent cell.
    pub fn exterior_faces(&self) -> &[usize] {
        self.connectivity.exterior_faces()
    }

    /// Faces with two adjacent cells.
    pub fn interior_faces(&self) -> &[usize] {
        self.connectivity.interior_faces()
    }

    /// Cells owning at least one boundary face.
    pub fn exterior_cell_ids(&self) -> &[usize] {
        self.connectivity.exterior_cells()
    }

    /// Cells with no boundary face.
    pub fn interior_cell_ids(&self) -> &[usize] {
        self.connectivity.interior_cells()
    }

    // =========================================================================
    // BOUNDARIES
    // =========================================================================

    /// Sorted IDs of the faces on `side`.
    pub fn boundary_faces(&self, side: Boundary) -> &[usize] {
        memo(&self.cache.boundaries[side.index()], side.name(), || {
            boundary::boundary_faces(side, self.shape, &self.layout)
        })
    }

    /// XY faces at z = 0.
    pub fn faces_front(&self) -> &[usize] {
        self.boundary_faces(Boundary::Front)
    }

    /// XY faces at the largest z.
    pub fn faces_back(&self) -> &[usize] {
        self.boundary_faces(Boundary::Back)
    }

    /// YZ faces at x = 0.
    pub fn faces_left(&self) -> &[usize] {
        self.boundary_faces(Boundary::Left)
    }

    /// YZ faces at the largest x.
    pub fn faces_right(&self) -> &[usize] {
        self.boundary_faces(Boundary::Right)
    }

    /// XZ faces at y = 0.
    pub fn faces_bottom(&self) -> &[usize] {
        self.boundary_faces(Boundary::Bottom)
    }

    /// XZ faces at the largest y.
    pub fn faces_top(&self) -> &[usize] {
        self.boundary_faces(Boundary::Top)
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Runs [`mesh::validate`] with the configured tolerance.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidTopology`](crate::MeshError::InvalidTopology) on
    /// the first violated invariant.
    pub fn validate(&self) -> MeshResult<()> {
        mesh::validate(self, self.config.tolerance).inspect_err(|e| {
            log::warn!("{self} failed validation: {e}");
        })
    }
}

// =============================================================================
// MESH TRAIT
// =============================================================================

impl Mesh for Grid3D {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn vertex_coords(&self) -> &[Vec3] {
        &self.vertices
    }

    fn face_vertex_ids(&self) -> &[FaceVertices] {
        &self.faces
    }

    fn cell_face_ids(&self) -> &[CellFaces] {
        &self.cells
    }

    fn face_areas(&self) -> &[f64] {
        memo(&self.cache.face_areas, "face areas", || {
            geometry::face_areas(&self.layout, self.spacing)
        })
    }

    fn face_normals(&self) -> &[Vec3] {
        memo(&self.cache.face_normals, "face normals", || {
            geometry::face_normals(&self.layout, self.shape)
        })
    }

    fn cell_volumes(&self) -> &[f64] {
        memo(&self.cache.cell_volumes, "cell volumes", || {
            geometry::cell_volumes(self.cells.len(), self.spacing)
        })
    }

    fn scale(&self) -> Scale {
        self.scale
    }
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

impl PartialEq for Grid3D {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.spacing == other.spacing && self.scale == other.scale
    }
}

impl fmt::Debug for Grid3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid3D")
            .field("params", &self.params)
            .field("spacing", &self.spacing)
            .field("shape", &self.shape)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Grid3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [nx, ny, nz] = self.shape;
        write!(
            f,
            "Grid3D(dx = {}, dy = {}, dz = {}, nx = {nx}, ny = {ny}, nz = {nz})",
            self.params.dx, self.params.dy, self.params.dz
        )
    }
}

impl Serialize for Grid3D {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.params.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid3D {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let params = GridParams::deserialize(deserializer)?;
        Grid3D::from_params(params).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests;
