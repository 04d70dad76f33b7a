//! # Error Types
//!
//! Error types for grid construction and mesh queries. All errors are
//! explicit and carry the offending values.
//!
//! ## Error Policy
//!
//! - Invalid construction parameters are reported, never silently corrected
//! - A grid is either fully constructed or not constructed at all
//! - Topology defects are reported by [`crate::mesh::validate`]

use thiserror::Error;

use crate::config::MeshConfigError;
use crate::core::axis::Axis;
use crate::units::LengthUnit;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or inspecting a mesh.
///
/// ## Example
///
/// ```rust
/// use fipy_mesh::{Grid3D, Mesh, MeshError};
///
/// match Grid3D::new(0.0, 1.0, 1.0, Some(2), Some(2), Some(2)) {
///     Ok(grid) => println!("{} cells", grid.cell_count()),
///     Err(MeshError::InvalidSpacing { axis, value }) => {
///         eprintln!("bad d{axis}: {value}")
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Spacing along an axis is zero, negative or not finite.
    #[error("Invalid spacing along {axis}: {value} (must be positive and finite)")]
    InvalidSpacing {
        /// Axis the spacing belongs to
        axis: Axis,
        /// Dimensionless spacing after unit normalization
        value: f64,
    },

    /// Cell count along an axis is below one.
    #[error("Invalid cell count along {axis}: {count} (must be at least 1)")]
    InvalidCellCount {
        /// Axis the count belongs to
        axis: Axis,
        /// Requested count
        count: usize,
    },

    /// A spacing carries a unit while the reference scale is dimensionless.
    #[error("Spacing along {axis} is given in {unit} but the x spacing is dimensionless")]
    IncompatibleUnits {
        /// Axis the spacing belongs to
        axis: Axis,
        /// Unit of the offending spacing
        unit: LengthUnit,
    },

    /// A unit symbol could not be parsed.
    #[error("Unknown length unit: {0}")]
    UnknownUnit(String),

    /// A boundary name could not be parsed.
    #[error("Unknown boundary: {0}")]
    UnknownBoundary(String),

    /// The grid would exceed the configured cell limit.
    #[error("Too many cells: {count} (max: {max})")]
    TooManyCells {
        /// Requested cell count (saturated on overflow)
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// An element shape does not agree with the requested rank.
    #[error("Element shape {shape:?} has rank {actual}, expected {expected}")]
    Dimension {
        /// Explicit element shape
        shape: Vec<usize>,
        /// Requested rank
        expected: usize,
        /// Length of the explicit shape
        actual: usize,
    },

    /// Generated topology violates a structural invariant.
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(#[from] MeshConfigError),
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology(message.into())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh operations.
///
/// ## Example
///
/// ```rust
/// use fipy_mesh::error::MeshResult;
/// use fipy_mesh::{Grid3D, Mesh};
///
/// fn unit_cube() -> MeshResult<Grid3D> {
///     Grid3D::new(1.0, 1.0, 1.0, None, None, None)
/// }
/// assert_eq!(unit_cube().unwrap().cell_count(), 1);
/// ```
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================
