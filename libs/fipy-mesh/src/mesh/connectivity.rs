//! # Connectivity
//!
//! Face-cell adjacency and everything that follows from it: boundary and
//! interior subsets, cell-face orientations, and cell neighbourhoods.
//!
//! A face with no second cell is a boundary face. The absent neighbour is an
//! explicit `None`, never a sentinel ID.

use ::config::constants::{FACES_PER_CELL, MAX_CELLS_PER_FACE};

use crate::error::{MeshError, MeshResult};
use crate::mesh::{CellFaces, Mesh};

/// The cells on either side of a face.
///
/// `first` is always the lower cell ID.
///
/// # Examples
/// ```
/// use fipy_mesh::mesh::FaceCells;
/// let interior = FaceCells { first: 0, second: Some(3) };
/// assert_eq!(interior.other(3), Some(0));
/// assert!(FaceCells { first: 2, second: None }.is_boundary());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceCells {
    /// Lower adjacent cell ID.
    pub first: usize,
    /// Higher adjacent cell ID, `None` on the domain boundary.
    pub second: Option<usize>,
}

impl FaceCells {
    /// True when the face has a single adjacent cell.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.second.is_none()
    }

    /// The neighbour of `cell` across this face.
    #[inline]
    pub fn other(&self, cell: usize) -> Option<usize> {
        match self.second {
            Some(second) if second == cell => Some(self.first),
            Some(second) if self.first == cell => Some(second),
            _ => None,
        }
    }

    /// Both cells, with the first repeated when the second is absent.
    #[inline]
    pub fn filled(&self) -> (usize, usize) {
        (self.first, self.second.unwrap_or(self.first))
    }
}

/// Face-cell adjacency of a mesh together with its derived subsets.
#[derive(Debug, Clone, PartialEq)]
pub struct Connectivity {
    face_cells: Vec<FaceCells>,
    exterior_faces: Vec<usize>,
    interior_faces: Vec<usize>,
    orientations: Vec<[i8; FACES_PER_CELL]>,
    cell_to_cell: Vec<[Option<usize>; FACES_PER_CELL]>,
    exterior_cells: Vec<usize>,
    interior_cells: Vec<usize>,
}

impl Connectivity {
    /// Derives connectivity from the cell-face table of a mesh.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidTopology`] when a cell references a face outside
    /// `0..face_count`, a face is shared by more than [`MAX_CELLS_PER_FACE`] cells, or a face
    /// belongs to no cell.
    pub fn new(face_count: usize, cell_faces: &[CellFaces]) -> MeshResult<Self> {
        let mut slots: Vec<(Option<usize>, Option<usize>)> = vec![(None, None); face_count];

        // Cells are visited in ascending order, so `first < second` holds.
        for (cell, faces) in cell_faces.iter().enumerate() {
            for &face in faces {
                let slot = slots.get_mut(face).ok_or_else(|| {
                    MeshError::invalid_topology(format!(
                        "cell {cell} references missing face {face}"
                    ))
                })?;
                match *slot {
                    (None, _) => slot.0 = Some(cell),
                    (Some(_), None) => slot.1 = Some(cell),
                    (Some(_), Some(_)) => {
                        return Err(MeshError::invalid_topology(format!(
                            "face {face} is shared by more than {MAX_CELLS_PER_FACE} cells"
                        )))
                    }
                }
            }
        }

        let face_cells = slots
            .into_iter()
            .enumerate()
            .map(|(face, slot)| match slot {
                (Some(first), second) => Ok(FaceCells { first, second }),
                (None, _) => Err(MeshError::invalid_topology(format!(
                    "face {face} belongs to no cell"
                ))),
            })
            .collect::<MeshResult<Vec<_>>>()?;

        let (exterior_faces, interior_faces): (Vec<usize>, Vec<usize>) =
            (0..face_count).partition(|&face| face_cells[face].is_boundary());

        let orientations = cell_faces
            .iter()
            .enumerate()
            .map(|(cell, faces)| faces.map(|face| if face_cells[face].first == cell { 1 } else { -1 }))
            .collect();

        let cell_to_cell = cell_faces
            .iter()
            .enumerate()
            .map(|(cell, faces)| faces.map(|face| face_cells[face].other(cell)))
            .collect();

        let mut on_boundary = vec![false; cell_faces.len()];
        for &face in &exterior_faces {
            on_boundary[face_cells[face].first] = true;
        }
        let (exterior_cells, interior_cells): (Vec<usize>, Vec<usize>) =
            (0..cell_faces.len()).partition(|&cell| on_boundary[cell]);

        log::trace!(
            "connectivity: {} exterior / {} interior faces, {} exterior / {} interior cells",
            exterior_faces.len(),
            interior_faces.len(),
            exterior_cells.len(),
            interior_cells.len()
        );

        Ok(Self {
            face_cells,
            exterior_faces,
            interior_faces,
            orientations,
            cell_to_cell,
            exterior_cells,
            interior_cells,
        })
    }

    /// Derives connectivity from any [`Mesh`].
    ///
    /// # Errors
    ///
    /// See [`Connectivity::new`].
    pub fn from_mesh<M: Mesh + ?Sized>(mesh: &M) -> MeshResult<Self> {
        Self::new(mesh.face_count(), mesh.cell_face_ids())
    }

    /// Adjacent cells of every face.
    pub fn face_cells(&self) -> &[FaceCells] {
        &self.face_cells
    }

    /// Adjacent cells of every face, the first repeated for boundary faces.
    pub fn adjacent_cell_ids(&self) -> Vec<(usize, usize)> {
        self.face_cells.iter().map(FaceCells::filled).collect()
    }

    /// Sorted IDs of faces with a single adjacent cell.
    pub fn exterior_faces(&self) -> &[usize] {
        &self.exterior_faces
    }

    /// Sorted IDs of faces shared by two cells.
    pub fn interior_faces(&self) -> &[usize] {
        &self.interior_faces
    }

    /// Per cell slot: `1` if the cell is the face's first cell, `-1` otherwise.
    pub fn cell_face_orientations(&self) -> &[[i8; FACES_PER_CELL]] {
        &self.orientations
    }

    /// Per cell slot: the neighbouring cell across that face.
    pub fn cell_to_cell_ids(&self) -> &[[Option<usize>; FACES_PER_CELL]] {
        &self.cell_to_cell
    }

    /// Like [`Connectivity::cell_to_cell_ids`], with absent neighbours
    /// replaced by the cell itself.
    pub fn cell_to_cell_ids_filled(&self) -> Vec<[usize; FACES_PER_CELL]> {
        self.cell_to_cell
            .iter()
            .enumerate()
            .map(|(cell, neighbours)| neighbours.map(|n| n.unwrap_or(cell)))
            .collect()
    }

    /// Sorted IDs of cells owning at least one boundary face.
    pub fn exterior_cells(&self) -> &[usize] {
        &self.exterior_cells
    }

    /// Sorted IDs of cells with no boundary face.
    pub fn interior_cells(&self) -> &[usize] {
        &self.interior_cells
    }
}
