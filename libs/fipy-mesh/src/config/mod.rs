//! Mesh-level configuration helpers building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so grid construction and
//! validation can stay decoupled from literal constants.

use ::config::constants::{ConfigError, GlobalConfig, EPSILON_TOLERANCE, MAX_GRID_CELLS};

/// Grid construction configuration.
///
/// # Examples
/// ```
/// use fipy_mesh::config::MeshConfig;
/// let cfg = MeshConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshConfig {
    /// Tolerance used by geometric consistency checks.
    pub tolerance: f64,
    /// Largest number of cells a grid may be built with.
    pub max_cells: usize,
}

impl MeshConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use fipy_mesh::config::MeshConfig;
    /// let cfg = MeshConfig::new(1.0e-8, 1_000).unwrap();
    /// assert_eq!(cfg.max_cells, 1_000);
    /// ```
    pub fn new(tolerance: f64, max_cells: usize) -> Result<Self, MeshConfigError> {
        GlobalConfig::new(tolerance, max_cells)
            .map(Self::from)
            .map_err(MeshConfigError)
    }
}

impl From<GlobalConfig> for MeshConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            max_cells: cfg.max_cells,
        }
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            max_cells: MAX_GRID_CELLS,
        }
    }
}

/// Error wrapper for invalid mesh configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshConfigError(pub ConfigError);

impl std::fmt::Display for MeshConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for MeshConfigError {}
