//! Construction parameters of a [`Grid3D`], the only persisted state.

use serde::{Deserialize, Serialize};

use crate::config::MeshConfig;
use crate::error::MeshResult;
use crate::grid3d::Grid3D;
use crate::units::Spacing;

/// The six values a grid is built from.
///
/// A missing count defaults to one cell along that axis. Spacings default
/// to a bare `1.0`.
///
/// # Examples
/// ```
/// use fipy_mesh::GridParams;
/// let params = GridParams::new(0.5, 2.0, 4.0, Some(3), Some(2), Some(1));
/// let grid = params.build().unwrap();
/// assert_eq!(grid.shape(), [3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    /// Spacing along x; its unit becomes the grid's reference unit.
    pub dx: Spacing,
    /// Spacing along y.
    pub dy: Spacing,
    /// Spacing along z.
    pub dz: Spacing,
    /// Cell count along x.
    pub nx: Option<usize>,
    /// Cell count along y.
    pub ny: Option<usize>,
    /// Cell count along z.
    pub nz: Option<usize>,
}

impl GridParams {
    /// Bundles spacings and optional counts.
    pub fn new(
        dx: impl Into<Spacing>,
        dy: impl Into<Spacing>,
        dz: impl Into<Spacing>,
        nx: Option<usize>,
        ny: Option<usize>,
        nz: Option<usize>,
    ) -> Self {
        Self {
            dx: dx.into(),
            dy: dy.into(),
            dz: dz.into(),
            nx,
            ny,
            nz,
        }
    }

    /// Builds a grid with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`Grid3D::from_params`].
    pub fn build(self) -> MeshResult<Grid3D> {
        Grid3D::from_params(self)
    }

    /// Builds a grid with an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`Grid3D::with_config`].
    pub fn build_with(self, config: MeshConfig) -> MeshResult<Grid3D> {
        Grid3D::with_config(self, config)
    }
}
