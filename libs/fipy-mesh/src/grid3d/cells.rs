//! Cell numbering: the six bounding faces and eight corners of every cell.

use ::config::constants::{FACES_PER_CELL, VERTICES_PER_CELL};

use crate::core::axis::Axis;
use crate::core::indexing::{prune, repeat_with_offset};
use crate::core::vec3::Vec3;
use crate::grid3d::faces::{FaceFamily, FaceLayout};
use crate::mesh::CellFaces;

/// Position of a face within a cell's face table.
///
/// Front and back are the YZ faces at the low and high x side, left and
/// right the XZ faces at low and high y, bottom and top the XY faces at low
/// and high z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceSlot {
    /// YZ face at low x.
    Front,
    /// YZ face at high x.
    Back,
    /// XZ face at low y.
    Left,
    /// XZ face at high y.
    Right,
    /// XY face at low z.
    Bottom,
    /// XY face at high z.
    Top,
}

impl FaceSlot {
    /// Slots in table order.
    pub const ALL: [FaceSlot; FACES_PER_CELL] = [
        FaceSlot::Front,
        FaceSlot::Back,
        FaceSlot::Left,
        FaceSlot::Right,
        FaceSlot::Bottom,
        FaceSlot::Top,
    ];

    /// Column of this slot in a cell's face table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit normal pointing out of the cell through this slot.
    ///
    /// # Examples
    /// ```
    /// use fipy_mesh::{grid3d::FaceSlot, Vec3};
    /// assert_eq!(FaceSlot::Left.outward_normal(), -Vec3::Y);
    /// ```
    pub fn outward_normal(self) -> Vec3 {
        let axis = self.family().normal_axis().unit();
        match self {
            FaceSlot::Front | FaceSlot::Left | FaceSlot::Bottom => -axis,
            FaceSlot::Back | FaceSlot::Right | FaceSlot::Top => axis,
        }
    }

    /// Family of the face occupying this slot.
    pub fn family(self) -> FaceFamily {
        match self {
            FaceSlot::Front | FaceSlot::Back => FaceFamily::YZ,
            FaceSlot::Left | FaceSlot::Right => FaceFamily::XZ,
            FaceSlot::Bottom | FaceSlot::Top => FaceFamily::XY,
        }
    }

    /// Axis crossed when leaving the cell through this slot.
    pub fn axis(self) -> Axis {
        self.family().normal_axis()
    }
}

/// Bounding face IDs of every cell in [`FaceSlot`] order.
pub(crate) fn create_cells([nx, ny, nz]: [usize; 3], layout: &FaceLayout) -> Vec<CellFaces> {
    let count = nx * ny * nz;
    let xz_offset = layout.offset(FaceFamily::XZ);
    let yz_offset = layout.offset(FaceFamily::YZ);

    let yz_ids: Vec<usize> = (0..layout.count(FaceFamily::YZ)).collect();
    let front = prune(&yz_ids, nx + 1, nx);

    let row_ids: Vec<usize> = (0..nx * ny).collect();
    let left = repeat_with_offset(&row_ids, nx * (ny + 1), nz);

    debug_assert_eq!(front.len(), count);
    debug_assert_eq!(left.len(), count);

    (0..count)
        .map(|cell| {
            let front = front[cell] + yz_offset;
            let left = left[cell] + xz_offset;
            [front, front + 1, left, left + nx, cell, cell + nx * ny]
        })
        .collect()
}

/// Corner vertex IDs of every cell, in descending order.
pub(crate) fn create_cell_vertex_ids([nx, ny, nz]: [usize; 3]) -> Vec<[usize; VERTICES_PER_CELL]> {
    let row = nx + 1;
    let layer = (nx + 1) * (ny + 1);
    let offsets = [
        layer + row + 1,
        layer + row,
        layer + 1,
        layer,
        row + 1,
        row,
        1,
        0,
    ];

    let mut ids = Vec::with_capacity(nx * ny * nz);
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let base = i + j * row + k * layer;
                ids.push(offsets.map(|o| base + o));
            }
        }
    }
    ids
}
