//! Face numbering.
//!
//! Faces are grouped by family and numbered contiguously: XY faces first,
//! then XZ, then YZ. Within a family the numbering follows the vertex order
//! (x fastest, then y, then z).

use std::ops::Range;

use crate::core::axis::Axis;
use crate::core::indexing::{prune, repeat_with_offset};
use crate::core::vec3::Vec3;
use crate::mesh::FaceVertices;

/// Face family, named by the plane the faces lie in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceFamily {
    /// Faces spanning x and y, normal along z.
    XY,
    /// Faces spanning x and z, normal along y.
    XZ,
    /// Faces spanning y and z, normal along x.
    YZ,
}

impl FaceFamily {
    /// Families in numbering order.
    pub const ALL: [FaceFamily; 3] = [FaceFamily::XY, FaceFamily::XZ, FaceFamily::YZ];

    /// Axis the face normals of this family are parallel to.
    pub fn normal_axis(self) -> Axis {
        match self {
            FaceFamily::XY => Axis::Z,
            FaceFamily::XZ => Axis::Y,
            FaceFamily::YZ => Axis::X,
        }
    }

    /// The two in-plane axes, in tangent order.
    pub fn tangent_axes(self) -> (Axis, Axis) {
        match self {
            FaceFamily::XY => (Axis::X, Axis::Y),
            FaceFamily::XZ => (Axis::X, Axis::Z),
            FaceFamily::YZ => (Axis::Y, Axis::Z),
        }
    }

    /// Area of a face of this family for the given spacings.
    ///
    /// # Examples
    /// ```
    /// use fipy_mesh::{grid3d::FaceFamily, Vec3};
    /// let d = Vec3::new(0.5, 2.0, 4.0);
    /// assert_eq!(FaceFamily::XZ.area(d), 2.0);
    /// ```
    pub fn area(self, spacing: Vec3) -> f64 {
        let (a, b) = self.tangent_axes();
        a.component(spacing) * b.component(spacing)
    }
}

/// Sizes of the three face families of a grid.
///
/// # Examples
/// ```
/// use fipy_mesh::grid3d::{FaceFamily, FaceLayout};
/// let layout = FaceLayout::new([3, 2, 1]);
/// assert_eq!(layout.count(FaceFamily::XY), 12);
/// assert_eq!(layout.range(FaceFamily::YZ), 21..29);
/// assert_eq!(layout.family_of(15), Some(FaceFamily::XZ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLayout {
    xy: usize,
    xz: usize,
    yz: usize,
}

impl FaceLayout {
    /// Layout of a grid with `[nx, ny, nz]` cells.
    pub fn new([nx, ny, nz]: [usize; 3]) -> Self {
        Self {
            xy: nx * ny * (nz + 1),
            xz: nx * (ny + 1) * nz,
            yz: (nx + 1) * ny * nz,
        }
    }

    /// Number of faces in `family`.
    pub fn count(&self, family: FaceFamily) -> usize {
        match family {
            FaceFamily::XY => self.xy,
            FaceFamily::XZ => self.xz,
            FaceFamily::YZ => self.yz,
        }
    }

    /// ID of the first face of `family`.
    pub fn offset(&self, family: FaceFamily) -> usize {
        match family {
            FaceFamily::XY => 0,
            FaceFamily::XZ => self.xy,
            FaceFamily::YZ => self.xy + self.xz,
        }
    }

    /// Face IDs belonging to `family`.
    pub fn range(&self, family: FaceFamily) -> Range<usize> {
        let start = self.offset(family);
        start..start + self.count(family)
    }

    /// Total number of faces.
    pub fn total(&self) -> usize {
        self.xy + self.xz + self.yz
    }

    /// Family of `face`, `None` when out of range.
    pub fn family_of(&self, face: usize) -> Option<FaceFamily> {
        FaceFamily::ALL
            .into_iter()
            .find(|&family| self.range(family).contains(&face))
    }
}

/// Corner vertex IDs of every face, XY then XZ then YZ.
///
/// Each family uses one fixed winding, so the right-hand normal of the
/// corners is +z for XY faces, -y for XZ faces and +x for YZ faces. The
/// stored normals point out of the domain on the low boundaries and along
/// the positive axis everywhere else, which means the z = 0 XY faces, the
/// XZ faces above y = 0 and the x = 0 YZ faces wind against their normal.
/// [`validate`](crate::mesh::validate) therefore only requires the corner
/// polygon to be parallel to the normal.
pub(crate) fn create_faces([nx, ny, nz]: [usize; 3]) -> Vec<FaceVertices> {
    let row = nx + 1;
    let layer = (nx + 1) * (ny + 1);
    let layout = FaceLayout::new([nx, ny, nz]);

    let xy_base: Vec<usize> = (0..row * ny).collect();
    let xy = repeat_with_offset(&prune(&xy_base, row, nx), layer, nz + 1);

    let xz_base: Vec<usize> = (0..layer).collect();
    let xz = repeat_with_offset(&prune(&xz_base, row, nx), layer, nz);

    let yz_base: Vec<usize> = (0..row * ny).collect();
    let yz = repeat_with_offset(&yz_base, layer, nz);

    let mut faces = Vec::with_capacity(layout.total());
    faces.extend(xy.into_iter().map(|v| [v, v + 1, v + row + 1, v + row]));
    faces.extend(xz.into_iter().map(|v| [v, v + 1, v + layer + 1, v + layer]));
    faces.extend(yz.into_iter().map(|v| [v, v + row, v + layer + row, v + layer]));

    debug_assert_eq!(faces.len(), layout.total());
    faces
}
