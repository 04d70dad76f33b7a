//! # Configuration Constants
//!
//! Centralized constants for the structured-grid geometry engine. Topology
//! arities, default counts, tolerances, and size limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Topology**: Fixed arities of the hexahedral grid (faces per cell, ...)
//! - **Defaults**: Values used when a caller omits a parameter
//! - **Limits**: Maximum values for safety bounds

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by geometry checks.
///
/// Used when verifying closed-surface sums, volume totals and normal
/// orientations of generated grids.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Spatial dimension of the grids built by this workspace.
///
/// # Examples
/// ```
/// use config::constants::MESH_DIMENSION;
/// assert_eq!(MESH_DIMENSION, 3);
/// ```
pub const MESH_DIMENSION: usize = 3;

/// Number of faces bounding one hexahedral cell.
///
/// Slot order is front, back, left, right, bottom, top.
///
/// # Examples
/// ```
/// use config::constants::FACES_PER_CELL;
/// assert_eq!(FACES_PER_CELL, 6);
/// ```
pub const FACES_PER_CELL: usize = 6;

/// Number of vertices bounding one quadrilateral face.
///
/// # Examples
/// ```
/// use config::constants::VERTICES_PER_FACE;
/// assert_eq!(VERTICES_PER_FACE, 4);
/// ```
pub const VERTICES_PER_FACE: usize = 4;

/// Number of vertices of one hexahedral cell.
///
/// # Examples
/// ```
/// use config::constants::VERTICES_PER_CELL;
/// assert_eq!(VERTICES_PER_CELL, 8);
/// ```
pub const VERTICES_PER_CELL: usize = 8;

/// Maximum number of cells that may share one face.
///
/// A boundary face has one adjacent cell, an interior face has two.
///
/// # Examples
/// ```
/// use config::constants::MAX_CELLS_PER_FACE;
/// assert_eq!(MAX_CELLS_PER_FACE, 2);
/// ```
pub const MAX_CELLS_PER_FACE: usize = 2;

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Cell count used for an axis when the caller does not supply one.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CELL_COUNT;
/// let nx: Option<usize> = None;
/// assert_eq!(nx.unwrap_or(DEFAULT_CELL_COUNT), 1);
/// ```
pub const DEFAULT_CELL_COUNT: usize = 1;

/// Spacing used for an axis when the caller does not supply one.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SPACING;
/// assert_eq!(DEFAULT_SPACING, 1.0);
/// ```
pub const DEFAULT_SPACING: f64 = 1.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of cells a single grid may hold.
///
/// Guards against requests whose derived arrays would exhaust memory.
///
/// # Examples
/// ```
/// use config::constants::MAX_GRID_CELLS;
/// assert!(MAX_GRID_CELLS >= 1_000_000);
/// ```
pub const MAX_GRID_CELLS: usize = 50_000_000;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry checks.
    pub tolerance: f64,
    /// Upper bound on the number of cells of one grid.
    pub max_cells: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and cell limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 1_000).expect("valid config");
    /// assert_eq!(cfg.max_cells, 1_000);
    /// ```
    pub fn new(tolerance: f64, max_cells: usize) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_cells == 0 {
            return Err(ConfigError::InvalidMaxCells(max_cells));
        }
        Ok(Self {
            tolerance,
            max_cells,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            max_cells: MAX_GRID_CELLS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the cell limit would forbid every grid.
    InvalidMaxCells(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidMaxCells(value) => {
                write!(f, "max_cells must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
