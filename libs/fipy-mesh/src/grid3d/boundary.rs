//! Named sides of the grid and the faces lying on them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::indexing::repeat_with_offset;
use crate::core::vec3::Vec3;
use crate::error::MeshError;
use crate::grid3d::faces::{FaceFamily, FaceLayout};

/// One of the six sides of the grid.
///
/// X runs from left to right, y from bottom to top, z from front to back.
///
/// # Examples
/// ```
/// use fipy_mesh::{Boundary, Grid3D};
/// let grid = Grid3D::new(0.5, 2.0, 4.0, Some(3), Some(2), Some(1)).unwrap();
/// assert_eq!(grid.boundary_faces(Boundary::Left), &[21, 25]);
/// assert_eq!("top".parse::<Boundary>().unwrap(), Boundary::Top);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// XY faces at z = 0.
    Front,
    /// XY faces at the largest z.
    Back,
    /// YZ faces at x = 0.
    Left,
    /// YZ faces at the largest x.
    Right,
    /// XZ faces at y = 0.
    Bottom,
    /// XZ faces at the largest y.
    Top,
}

impl Boundary {
    /// All sides.
    pub const ALL: [Boundary; 6] = [
        Boundary::Front,
        Boundary::Back,
        Boundary::Left,
        Boundary::Right,
        Boundary::Bottom,
        Boundary::Top,
    ];

    /// Position in [`Boundary::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Family of the faces on this side.
    pub fn family(self) -> FaceFamily {
        match self {
            Boundary::Front | Boundary::Back => FaceFamily::XY,
            Boundary::Left | Boundary::Right => FaceFamily::YZ,
            Boundary::Bottom | Boundary::Top => FaceFamily::XZ,
        }
    }

    /// Unit normal pointing out of the domain.
    pub fn outward_normal(self) -> Vec3 {
        let axis = self.family().normal_axis().unit();
        match self {
            Boundary::Front | Boundary::Left | Boundary::Bottom => -axis,
            Boundary::Back | Boundary::Right | Boundary::Top => axis,
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Boundary::Front => "front",
            Boundary::Back => "back",
            Boundary::Left => "left",
            Boundary::Right => "right",
            Boundary::Bottom => "bottom",
            Boundary::Top => "top",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Boundary {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Boundary::ALL
            .into_iter()
            .find(|b| b.name() == name)
            .ok_or_else(|| MeshError::UnknownBoundary(s.to_string()))
    }
}

/// Sorted IDs of the faces on `side`.
pub(crate) fn boundary_faces(side: Boundary, [nx, ny, nz]: [usize; 3], layout: &FaceLayout) -> Vec<usize> {
    let xz_start = layout.offset(FaceFamily::XZ);
    let yz = layout.range(FaceFamily::YZ);

    match side {
        Boundary::Front => (0..nx * ny).collect(),
        Boundary::Back => (xz_start - nx * ny..xz_start).collect(),
        Boundary::Bottom | Boundary::Top => {
            let row: Vec<usize> = (xz_start..xz_start + nx).collect();
            let shift = if side == Boundary::Top { nx * ny } else { 0 };
            repeat_with_offset(&row, nx * (ny + 1), nz)
                .into_iter()
                .map(|face| face + shift)
                .collect()
        }
        Boundary::Left => yz.step_by(nx + 1).collect(),
        Boundary::Right => (yz.start + nx..yz.end).step_by(nx + 1).collect(),
    }
}
