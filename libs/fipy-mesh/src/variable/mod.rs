//! # Variable Layout
//!
//! Shape contract for arrays of values attached to mesh entities. A
//! variable stores one element per cell or per face; each element is itself
//! a tensor of shape [`ElementShape`]. The full array shape is the element
//! shape followed by the entity count.
//!
//! ## Example
//!
//! ```rust
//! use fipy_mesh::Grid3D;
//! use fipy_mesh::variable::{Location, VariableLayout};
//!
//! let grid = Grid3D::new(1.0, 1.0, 1.0, Some(2), Some(3), Some(1)).unwrap();
//! let gradient = VariableLayout::for_mesh(&grid, Location::Cell, Some(1), None).unwrap();
//! assert_eq!(gradient.shape(&grid), vec![3, 6]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Shape of a single element of a mesh variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementShape(Vec<usize>);

impl ElementShape {
    /// Shape of a scalar element.
    pub fn scalar() -> Self {
        Self(Vec::new())
    }

    /// Resolves an element shape from an optional rank and explicit shape.
    ///
    /// - neither given: scalar `()`
    /// - rank only: `rank` copies of `dim`
    /// - shape given: used as is, and its length must equal `rank` if both
    ///   are given
    ///
    /// # Errors
    ///
    /// [`MeshError::Dimension`] when the explicit shape disagrees with the rank.
    ///
    /// # Examples
    /// ```
    /// use fipy_mesh::variable::ElementShape;
    /// assert_eq!(ElementShape::resolve(Some(2), None, 3).unwrap().dims(), &[3, 3]);
    /// assert_eq!(ElementShape::resolve(None, Some([4].as_slice()), 3).unwrap().dims(), &[4]);
    /// assert!(ElementShape::resolve(Some(2), Some([4].as_slice()), 3).is_err());
    /// ```
    pub fn resolve(rank: Option<usize>, shape: Option<&[usize]>, dim: usize) -> MeshResult<Self> {
        match (rank, shape) {
            (None, None) => Ok(Self::scalar()),
            (Some(rank), None) => Ok(Self(vec![dim; rank])),
            (Some(rank), Some(shape)) if shape.len() != rank => Err(MeshError::Dimension {
                shape: shape.to_vec(),
                expected: rank,
                actual: shape.len(),
            }),
            (_, Some(shape)) => Ok(Self(shape.to_vec())),
        }
    }

    /// Extent along each element axis.
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Number of element axes.
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Number of scalar components per element.
    pub fn component_count(&self) -> usize {
        self.0.iter().product()
    }
}

impl From<Vec<usize>> for ElementShape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims)
    }
}

/// Mesh entity a variable is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// One element per cell.
    Cell,
    /// One element per face.
    Face,
}

impl Location {
    /// Number of entities of this kind in `mesh`.
    pub fn count<M: Mesh + ?Sized>(self, mesh: &M) -> usize {
        match self {
            Location::Cell => mesh.cell_count(),
            Location::Face => mesh.face_count(),
        }
    }
}

/// Where a variable lives and what each of its elements looks like.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableLayout {
    /// Entity kind the values are attached to.
    pub location: Location,
    /// Shape of one element.
    pub element_shape: ElementShape,
}

impl VariableLayout {
    /// Layout from an already resolved element shape.
    pub fn new(location: Location, element_shape: ElementShape) -> Self {
        Self {
            location,
            element_shape,
        }
    }

    /// Layout on `mesh`, resolving the element shape against its dimension.
    ///
    /// # Errors
    ///
    /// See [`ElementShape::resolve`].
    pub fn for_mesh<M: Mesh + ?Sized>(
        mesh: &M,
        location: Location,
        rank: Option<usize>,
        shape: Option<&[usize]>,
    ) -> MeshResult<Self> {
        let element_shape = ElementShape::resolve(rank, shape, mesh.dim())?;
        Ok(Self::new(location, element_shape))
    }

    /// Full array shape on `mesh`: the element shape followed by the entity count.
    pub fn shape<M: Mesh + ?Sized>(&self, mesh: &M) -> Vec<usize> {
        let mut shape = self.element_shape.dims().to_vec();
        shape.push(self.location.count(mesh));
        shape
    }

    /// Total number of scalar values on `mesh`.
    pub fn len<M: Mesh + ?Sized>(&self, mesh: &M) -> usize {
        self.element_shape.component_count() * self.location.count(mesh)
    }
}
