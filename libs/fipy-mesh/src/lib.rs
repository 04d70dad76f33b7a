//! Structured finite-volume grid geometry.
//!
//! This crate derives the full topological and geometric description of a
//! rectangular-prism grid from three spacings and three cell counts: vertex
//! coordinates, face and cell numbering, face-cell adjacency, normals,
//! tangents, areas, volumes and inter-cell distances.
//!
//! ```rust
//! use fipy_mesh::{Grid3D, Mesh};
//!
//! let grid = Grid3D::new(0.5, 2.0, 4.0, Some(3), Some(2), Some(1)).unwrap();
//! let total: f64 = grid.cell_volumes().iter().sum();
//! assert_eq!(total, 24.0);
//! assert!(grid.validate().is_ok());
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod grid3d;
pub mod mesh;
pub mod units;
pub mod variable;

pub use crate::config::MeshConfig;
pub use crate::core::axis::Axis;
pub use crate::core::vec3::Vec3;
pub use error::{MeshError, MeshResult};
pub use grid3d::{Boundary, FaceFamily, FaceLayout, FaceSlot, Grid3D, GridParams};
pub use mesh::metrics::FaceToCellDistance;
pub use mesh::{CellFaces, Connectivity, FaceCells, FaceVertices, Mesh};
pub use units::{LengthUnit, PhysicalShape, Scale, Spacing};
pub use variable::{ElementShape, Location, VariableLayout};
