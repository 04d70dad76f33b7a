//! Dimension resolver: requested spacings and counts to concrete values.
//!
//! The unit of the x spacing is the reference unit of the whole grid. Y and
//! z spacings carrying a unit are converted into it; bare y and z spacings
//! are taken as already expressed in it.

use ::config::constants::DEFAULT_CELL_COUNT;

use crate::core::axis::Axis;
use crate::core::vec3::Vec3;
use crate::error::{MeshError, MeshResult};
use crate::grid3d::GridParams;
use crate::units::{LengthUnit, Scale, Spacing};

/// Dimensionless spacings, integer counts and the length scale of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Resolved {
    pub spacing: Vec3,
    pub shape: [usize; 3],
    pub scale: Scale,
}

/// Resolves `params`, rejecting grids with more than `max_cells` cells.
pub(crate) fn resolve(params: &GridParams, max_cells: usize) -> MeshResult<Resolved> {
    let reference = params.dx.unit();

    let dx = resolve_spacing(Axis::X, params.dx, reference)?;
    let dy = resolve_spacing(Axis::Y, params.dy, reference)?;
    let dz = resolve_spacing(Axis::Z, params.dz, reference)?;

    let shape = [
        resolve_count(Axis::X, params.nx)?,
        resolve_count(Axis::Y, params.ny)?,
        resolve_count(Axis::Z, params.nz)?,
    ];

    let count = shape
        .iter()
        .try_fold(1usize, |acc, &n| acc.checked_mul(n))
        .unwrap_or(usize::MAX);
    if count > max_cells {
        return Err(MeshError::TooManyCells {
            count,
            max: max_cells,
        });
    }

    Ok(Resolved {
        spacing: Vec3::new(dx, dy, dz),
        shape,
        scale: Scale::new(reference),
    })
}

fn resolve_spacing(axis: Axis, spacing: Spacing, reference: Option<LengthUnit>) -> MeshResult<f64> {
    let value = match (spacing, reference) {
        (Spacing::Bare(value), _) => value,
        (Spacing::Physical { value, unit }, Some(reference)) => value * unit.factor_to(reference),
        (Spacing::Physical { unit, .. }, None) => {
            return Err(MeshError::IncompatibleUnits { axis, unit })
        }
    };

    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MeshError::InvalidSpacing { axis, value })
    }
}

fn resolve_count(axis: Axis, count: Option<usize>) -> MeshResult<usize> {
    match count.unwrap_or(DEFAULT_CELL_COUNT) {
        0 => Err(MeshError::InvalidCellCount { axis, count: 0 }),
        n => Ok(n),
    }
}
