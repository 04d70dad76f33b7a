//! Tests for Grid3D construction, numbering and derived geometry.
//!
//! Most tests use the 3x2x1 grid with dx = 0.5, dy = 2, dz = 4.

use super::*;
use crate::error::MeshError;
use crate::units::LengthUnit;
use crate::core::vec3::polygon_normal;
use crate::Axis;
use approx::assert_relative_eq;

const DX: f64 = 0.5;
const DY: f64 = 2.0;
const DZ: f64 = 4.0;

fn grid() -> Grid3D {
    Grid3D::new(DX, DY, DZ, Some(3), Some(2), Some(1)).unwrap()
}

fn assert_vecs_close(actual: &[Vec3], expected: &[Vec3]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(a.abs_diff_eq(*e, 1e-10), "entry {i}: {a} != {e}");
    }
}

fn assert_floats_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, *e, epsilon = 1e-10);
    }
}

// =============================================================================
// COUNTS AND NUMBERING
// =============================================================================

#[test]
fn counts_of_reference_grid() {
    let grid = grid();
    assert_eq!(grid.vertex_count(), 24);
    assert_eq!(grid.face_count(), 29);
    assert_eq!(grid.cell_count(), 6);

    let layout = grid.face_layout();
    assert_eq!(layout.count(FaceFamily::XY), 12);
    assert_eq!(layout.count(FaceFamily::XZ), 9);
    assert_eq!(layout.count(FaceFamily::YZ), 8);
}

#[test]
fn vertices_run_x_fastest() {
    let grid = grid();
    let mut expected = Vec::new();
    for k in 0..2 {
        for j in 0..3 {
            for i in 0..4 {
                expected.push(Vec3::new(i as f64 * DX, j as f64 * DY, k as f64 * DZ));
            }
        }
    }
    assert_vecs_close(grid.vertex_coords(), &expected);
}

#[test]
fn face_vertex_ids() {
    let expected: Vec<FaceVertices> = vec![
        [0, 1, 5, 4],
        [1, 2, 6, 5],
        [2, 3, 7, 6],
        [4, 5, 9, 8],
        [5, 6, 10, 9],
        [6, 7, 11, 10],
        [12, 13, 17, 16],
        [13, 14, 18, 17],
        [14, 15, 19, 18],
        [16, 17, 21, 20],
        [17, 18, 22, 21],
        [18, 19, 23, 22],
        [0, 1, 13, 12],
        [1, 2, 14, 13],
        [2, 3, 15, 14],
        [4, 5, 17, 16],
        [5, 6, 18, 17],
        [6, 7, 19, 18],
        [8, 9, 21, 20],
        [9, 10, 22, 21],
        [10, 11, 23, 22],
        [0, 4, 16, 12],
        [1, 5, 17, 13],
        [2, 6, 18, 14],
        [3, 7, 19, 15],
        [4, 8, 20, 16],
        [5, 9, 21, 17],
        [6, 10, 22, 18],
        [7, 11, 23, 19],
    ];
    assert_eq!(grid().face_vertex_ids(), expected.as_slice());
}

#[test]
fn cell_face_ids() {
    let expected: Vec<CellFaces> = vec![
        [21, 22, 12, 15, 0, 6],
        [22, 23, 13, 16, 1, 7],
        [23, 24, 14, 17, 2, 8],
        [25, 26, 15, 18, 3, 9],
        [26, 27, 16, 19, 4, 10],
        [27, 28, 17, 20, 5, 11],
    ];
    assert_eq!(grid().cell_face_ids(), expected.as_slice());
}

#[test]
fn cell_vertex_ids_descend() {
    let base = [17, 16, 13, 12, 5, 4, 1, 0];
    let expected: Vec<[usize; 8]> = [0, 1, 2, 4, 5, 6]
        .into_iter()
        .map(|shift| base.map(|v| v + shift))
        .collect();
    assert_eq!(grid().cell_vertex_ids(), expected.as_slice());
}

#[test]
fn face_families_by_id() {
    let layout = grid().face_layout();
    assert_eq!(layout.family_of(0), Some(FaceFamily::XY));
    assert_eq!(layout.family_of(11), Some(FaceFamily::XY));
    assert_eq!(layout.family_of(12), Some(FaceFamily::XZ));
    assert_eq!(layout.family_of(28), Some(FaceFamily::YZ));
    assert_eq!(layout.family_of(29), None);
}

// =============================================================================
// BOUNDARIES AND CONNECTIVITY
// =============================================================================

#[test]
fn boundary_face_sets() {
    let grid = grid();
    assert_eq!(grid.faces_bottom(), &[12, 13, 14]);
    assert_eq!(grid.faces_top(), &[18, 19, 20]);
    assert_eq!(grid.faces_front(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(grid.faces_back(), &[6, 7, 8, 9, 10, 11]);
    assert_eq!(grid.faces_left(), &[21, 25]);
    assert_eq!(grid.faces_right(), &[24, 28]);
}

#[test]
fn boundary_normals_point_outward() {
    let grid = grid();
    for side in Boundary::ALL {
        for &face in grid.boundary_faces(side) {
            assert_eq!(grid.face_normals()[face], side.outward_normal(), "{side} face {face}");
        }
    }
}

#[test]
fn boundaries_partition_exterior_faces() {
    let grid = Grid3D::new(1.0, 1.0, 1.0, Some(4), Some(3), Some(5)).unwrap();
    let mut all: Vec<usize> = Boundary::ALL
        .into_iter()
        .flat_map(|side| grid.boundary_faces(side).to_vec())
        .collect();
    all.sort_unstable();
    assert_eq!(all, grid.exterior_faces());
}

#[test]
fn exterior_and_interior_faces() {
    let grid = grid();
    assert_eq!(
        grid.exterior_faces(),
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 18, 19, 20, 21, 24, 25, 28]
    );
    assert_eq!(grid.interior_faces(), &[15, 16, 17, 22, 23, 26, 27]);
}

#[test]
fn face_cell_ids() {
    let grid = grid();
    let expected: Vec<(usize, Option<usize>)> = vec![
        (0, None),
        (1, None),
        (2, None),
        (3, None),
        (4, None),
        (5, None),
        (0, None),
        (1, None),
        (2, None),
        (3, None),
        (4, None),
        (5, None),
        (0, None),
        (1, None),
        (2, None),
        (0, Some(3)),
        (1, Some(4)),
        (2, Some(5)),
        (3, None),
        (4, None),
        (5, None),
        (0, None),
        (0, Some(1)),
        (1, Some(2)),
        (2, None),
        (3, None),
        (3, Some(4)),
        (4, Some(5)),
        (5, None),
    ];
    let actual: Vec<(usize, Option<usize>)> = grid
        .face_cell_ids()
        .iter()
        .map(|fc| (fc.first, fc.second))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn adjacent_cell_ids_fill_boundary() {
    let grid = grid();
    let (first, second): (Vec<usize>, Vec<usize>) = grid.adjacent_cell_ids().iter().copied().unzip();
    assert_eq!(
        first,
        vec![0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5, 0, 1, 2, 0, 1, 2, 3, 4, 5, 0, 0, 1, 2, 3, 3, 4, 5]
    );
    assert_eq!(
        second,
        vec![0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5, 3, 4, 5, 0, 1, 2, 2, 3, 4, 5, 5]
    );
}

#[test]
fn cell_face_orientations() {
    assert_eq!(
        grid().cell_face_orientations(),
        &[
            [1, 1, 1, 1, 1, 1],
            [-1, 1, 1, 1, 1, 1],
            [-1, 1, 1, 1, 1, 1],
            [1, 1, -1, 1, 1, 1],
            [-1, 1, -1, 1, 1, 1],
            [-1, 1, -1, 1, 1, 1],
        ]
    );
}

#[test]
fn cell_to_cell_ids() {
    let grid = grid();
    assert_eq!(
        grid.cell_to_cell_ids(),
        &[
            [None, Some(1), None, Some(3), None, None],
            [Some(0), Some(2), None, Some(4), None, None],
            [Some(1), None, None, Some(5), None, None],
            [None, Some(4), Some(0), None, None, None],
            [Some(3), Some(5), Some(1), None, None, None],
            [Some(4), None, Some(2), None, None, None],
        ]
    );
    assert_eq!(
        grid.cell_to_cell_ids_filled(),
        &[
            [0, 1, 0, 3, 0, 0],
            [0, 2, 1, 4, 1, 1],
            [1, 2, 2, 5, 2, 2],
            [3, 4, 0, 3, 3, 3],
            [3, 5, 1, 4, 4, 4],
            [4, 5, 2, 5, 5, 5],
        ]
    );
}

#[test]
fn cell_subsets() {
    let grid = grid();
    assert!(grid.interior_cell_ids().is_empty());
    assert_eq!(grid.exterior_cell_ids(), &[0, 1, 2, 3, 4, 5]);

    let big = Grid3D::new(1.0, 1.0, 1.0, Some(3), Some(3), Some(3)).unwrap();
    assert_eq!(big.interior_cell_ids(), &[13]);
    assert_eq!(big.exterior_cell_ids().len(), 26);
}

// =============================================================================
// GEOMETRY
// =============================================================================

#[test]
fn face_areas_by_family() {
    let (xy, xz, yz) = (DX * DY, DX * DZ, DY * DZ);
    let mut expected = vec![xy; 12];
    expected.extend([xz; 9]);
    expected.extend([yz; 8]);
    assert_floats_close(grid().face_areas(), &expected);
}

#[test]
fn face_normals_by_family() {
    let mut expected = vec![-Vec3::Z; 6];
    expected.extend([Vec3::Z; 6]);
    expected.extend([-Vec3::Y; 3]);
    expected.extend([Vec3::Y; 6]);
    expected.extend([-Vec3::X, Vec3::X, Vec3::X, Vec3::X]);
    expected.extend([-Vec3::X, Vec3::X, Vec3::X, Vec3::X]);
    assert_eq!(grid().face_normals(), expected.as_slice());
}

#[test]
fn face_tangents_by_family() {
    let grid = grid();
    let (t1, t2) = grid.face_tangents();

    let mut e1 = vec![Vec3::X; 21];
    e1.extend([Vec3::Y; 8]);
    let mut e2 = vec![Vec3::Y; 12];
    e2.extend([Vec3::Z; 17]);

    assert_eq!(t1, e1.as_slice());
    assert_eq!(t2, e2.as_slice());
}

#[test]
fn face_centers_average_corners() {
    let grid = grid();
    let expected: Vec<Vec3> = grid
        .face_vertex_ids()
        .iter()
        .map(|ids| ids.iter().map(|&v| grid.vertex_coords()[v]).sum::<Vec3>() / 4.0)
        .collect();
    assert_vecs_close(grid.face_centers(), &expected);
}

#[test]
fn cell_volumes_and_centers() {
    let grid = grid();
    assert_floats_close(grid.cell_volumes(), &[DX * DY * DZ; 6]);
    assert_relative_eq!(grid.cell_volumes().iter().sum::<f64>(), 24.0, epsilon = 1e-12);

    let expected: Vec<Vec3> = [(1.0, 1.0), (3.0, 1.0), (5.0, 1.0), (1.0, 3.0), (3.0, 3.0), (5.0, 3.0)]
        .into_iter()
        .map(|(i, j)| Vec3::new(i * DX / 2.0, j * DY / 2.0, DZ / 2.0))
        .collect();
    assert_vecs_close(grid.cell_centers(), &expected);
}

#[test]
fn cell_normals_and_area_projections() {
    let grid = grid();
    let normals = [-Vec3::X, Vec3::X, -Vec3::Y, Vec3::Y, -Vec3::Z, Vec3::Z];
    for cell in grid.cell_normals() {
        assert_eq!(cell, &normals);
    }

    let (xy, xz, yz) = (DX * DY, DX * DZ, DY * DZ);
    let projections = [
        Vec3::new(-yz, 0.0, 0.0),
        Vec3::new(yz, 0.0, 0.0),
        Vec3::new(0.0, -xz, 0.0),
        Vec3::new(0.0, xz, 0.0),
        Vec3::new(0.0, 0.0, -xy),
        Vec3::new(0.0, 0.0, xy),
    ];
    for cell in grid.cell_area_projections() {
        assert_vecs_close(cell, &projections);
    }

    let face_projections: Vec<Vec3> = grid
        .face_normals()
        .iter()
        .zip(grid.face_areas())
        .map(|(n, a)| *n * *a)
        .collect();
    assert_vecs_close(grid.area_projections(), &face_projections);
}

#[test]
fn face_slots_match_cell_normals() {
    let grid = grid();
    for slot in FaceSlot::ALL {
        assert_eq!(grid.cell_normals()[0][slot.index()], slot.outward_normal());
        let face = grid.cell_face_ids()[0][slot.index()];
        assert_eq!(grid.face_layout().family_of(face), Some(slot.family()));
    }
    assert_eq!(FaceSlot::Top.axis(), Axis::Z);
}

// =============================================================================
// DISTANCES
// =============================================================================

fn expected_cell_distances() -> Vec<f64> {
    let mut d = vec![DZ / 2.0; 12];
    d.extend([DY / 2.0; 3]);
    d.extend([DY; 3]);
    d.extend([DY / 2.0; 3]);
    d.extend([DX / 2.0, DX, DX, DX / 2.0, DX / 2.0, DX, DX, DX / 2.0]);
    d
}

#[test]
fn face_to_cell_distances() {
    let grid = grid();
    let distances = grid.face_to_cell_distances();
    let interior = grid.interior_faces();

    let half: Vec<f64> = (0..29)
        .map(|face| match face {
            0..=11 => DZ / 2.0,
            12..=20 => DY / 2.0,
            _ => DX / 2.0,
        })
        .collect();

    for (face, d) in distances.iter().enumerate() {
        assert_relative_eq!(d.first, half[face], epsilon = 1e-10);
        match d.second {
            Some(second) => {
                assert!(interior.contains(&face));
                assert_relative_eq!(second, half[face], epsilon = 1e-10);
            }
            None => assert!(!interior.contains(&face)),
        }
    }
}

#[test]
fn cell_distances_and_ratios() {
    let grid = grid();
    let expected = expected_cell_distances();
    assert_floats_close(grid.cell_distances(), &expected);

    let ratios: Vec<f64> = grid
        .face_to_cell_distances()
        .iter()
        .zip(&expected)
        .map(|(d, c)| d.first / c)
        .collect();
    assert_floats_close(grid.face_to_cell_distance_ratios(), &ratios);
}

#[test]
fn cell_to_cell_distances_follow_cell_faces() {
    let grid = grid();
    let expected = expected_cell_distances();
    for (cell, faces) in grid.cell_face_ids().iter().enumerate() {
        let row = faces.map(|f| expected[f]);
        assert_floats_close(&grid.cell_to_cell_distances()[cell], &row);
    }
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn omitted_counts_default_to_one() {
    let grid = Grid3D::new(1.0, 1.0, 1.0, None, Some(2), None).unwrap();
    assert_eq!(grid.shape(), [1, 2, 1]);
    assert_eq!(grid.params().nx, Some(1));
}

#[test]
fn zero_count_is_rejected() {
    let err = Grid3D::new(1.0, 1.0, 1.0, Some(2), Some(0), Some(2)).unwrap_err();
    assert_eq!(
        err,
        MeshError::InvalidCellCount {
            axis: Axis::Y,
            count: 0
        }
    );
}

#[test]
fn bad_spacings_are_rejected() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = Grid3D::new(1.0, 1.0, bad, Some(1), Some(1), Some(1)).unwrap_err();
        assert!(matches!(err, MeshError::InvalidSpacing { axis: Axis::Z, .. }), "{bad}");
    }
}

#[test]
fn physical_spacings_convert_to_x_unit() {
    let grid = Grid3D::new(
        (1.0, LengthUnit::Centimeter),
        (20.0, LengthUnit::Millimeter),
        3.0,
        Some(2),
        Some(2),
        Some(2),
    )
    .unwrap();
    assert_relative_eq!(grid.spacing().y, 2.0, epsilon = 1e-12);
    assert_eq!(grid.spacing().z, 3.0);
    assert_eq!(grid.scale().unit(), Some(LengthUnit::Centimeter));
    assert_relative_eq!(grid.scale().length(), 0.01);

    let shape = grid.physical_shape();
    assert_relative_eq!(shape.extent.y, 4.0, epsilon = 1e-12);
    assert_relative_eq!(shape.in_meters().z, 0.06, epsilon = 1e-12);
}

#[test]
fn unit_on_y_without_unit_on_x_is_rejected() {
    let err = Grid3D::new(1.0, (2.0, LengthUnit::Meter), 1.0, None, None, None).unwrap_err();
    assert_eq!(
        err,
        MeshError::IncompatibleUnits {
            axis: Axis::Y,
            unit: LengthUnit::Meter
        }
    );
}

#[test]
fn cell_limit_is_enforced() {
    let config = MeshConfig::new(1e-9, 100).unwrap();
    let params = GridParams::new(1.0, 1.0, 1.0, Some(5), Some(5), Some(5));
    assert_eq!(
        Grid3D::with_config(params, config).unwrap_err(),
        MeshError::TooManyCells { count: 125, max: 100 }
    );

    let huge = GridParams::new(1.0, 1.0, 1.0, Some(usize::MAX), Some(2), Some(1));
    assert!(matches!(
        huge.build(),
        Err(MeshError::TooManyCells { count: usize::MAX, .. })
    ));
}

#[test]
fn display_lists_parameters() {
    assert_eq!(
        grid().to_string(),
        "Grid3D(dx = 0.5, dy = 2, dz = 4, nx = 3, ny = 2, nz = 1)"
    );
    let physical = Grid3D::new((3.0, LengthUnit::Centimeter), 1.0, 1.0, None, None, None).unwrap();
    assert_eq!(
        physical.to_string(),
        "Grid3D(dx = 3 cm, dy = 1, dz = 1, nx = 1, ny = 1, nz = 1)"
    );
}

#[test]
fn reference_grid_validates() {
    assert!(grid().validate().is_ok());
}

#[test]
fn accessors_are_memoized() {
    let grid = grid();
    assert!(std::ptr::eq(grid.face_areas(), grid.face_areas()));
    assert!(std::ptr::eq(grid.face_normals(), grid.face_normals()));
    assert!(std::ptr::eq(grid.cell_volumes(), grid.cell_volumes()));
    assert!(std::ptr::eq(grid.face_centers(), grid.face_centers()));
    assert!(std::ptr::eq(grid.area_projections(), grid.area_projections()));
    assert!(std::ptr::eq(grid.cell_centers(), grid.cell_centers()));
    assert!(std::ptr::eq(grid.cell_normals(), grid.cell_normals()));
    assert!(std::ptr::eq(grid.cell_area_projections(), grid.cell_area_projections()));
    assert!(std::ptr::eq(grid.cell_vertex_ids(), grid.cell_vertex_ids()));
    assert!(std::ptr::eq(grid.face_to_cell_distances(), grid.face_to_cell_distances()));
    assert!(std::ptr::eq(grid.cell_distances(), grid.cell_distances()));
    assert!(std::ptr::eq(
        grid.face_to_cell_distance_ratios(),
        grid.face_to_cell_distance_ratios()
    ));
    assert!(std::ptr::eq(grid.cell_to_cell_distances(), grid.cell_to_cell_distances()));
    assert!(std::ptr::eq(grid.adjacent_cell_ids(), grid.adjacent_cell_ids()));
    assert!(std::ptr::eq(grid.cell_to_cell_ids_filled(), grid.cell_to_cell_ids_filled()));
    for side in Boundary::ALL {
        assert!(std::ptr::eq(grid.boundary_faces(side), grid.boundary_faces(side)));
    }

    let (t1, t2) = grid.face_tangents();
    let (again1, again2) = grid.face_tangents();
    assert!(std::ptr::eq(t1, again1));
    assert!(std::ptr::eq(t2, again2));
}

#[test]
fn corner_winding_is_fixed_per_family() {
    let grid = grid();
    let layout = grid.face_layout();
    for (face, ids) in grid.face_vertex_ids().iter().enumerate() {
        let corners = ids.map(|v| grid.vertex_coords()[v]);
        let sense = polygon_normal(&corners).normalize();
        let expected = match layout.family_of(face) {
            Some(FaceFamily::XY) => Vec3::Z,
            Some(FaceFamily::XZ) => -Vec3::Y,
            Some(FaceFamily::YZ) => Vec3::X,
            None => unreachable!(),
        };
        assert!(sense.abs_diff_eq(expected, 1e-12), "face {face}: {sense}");
    }

    // Faces whose stored normal opposes the corner winding.
    let against: Vec<usize> = (0..grid.face_count())
        .filter(|&face| {
            let ids = grid.face_vertex_ids()[face];
            let corners = ids.map(|v| grid.vertex_coords()[v]);
            polygon_normal(&corners).dot(grid.face_normals()[face]) < 0.0
        })
        .collect();
    assert_eq!(
        against,
        vec![0, 1, 2, 3, 4, 5, 15, 16, 17, 18, 19, 20, 21, 25]
    );
}

#[test]
fn grid_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Grid3D>();
}

#[test]
fn equality_ignores_cache_state() {
    let a = grid();
    let b = grid();
    let _ = a.cell_distances();
    assert_eq!(a, b);
    assert_ne!(a, Grid3D::new(DX, DY, DZ, Some(3), Some(2), Some(2)).unwrap());
}
