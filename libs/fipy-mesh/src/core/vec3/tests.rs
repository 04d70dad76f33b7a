//! Tests for the Vec3 helpers.

use super::*;

#[test]
fn centroid_of_empty_slice_is_origin() {
    assert_eq!(centroid(&[]), Vec3::ZERO);
}

#[test]
fn centroid_of_unit_square() {
    let square = [
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.0, 1.0, 1.0),
    ];
    assert_eq!(centroid(&square), Vec3::new(0.5, 0.5, 1.0));
}

/// Reversing the corner order flips the polygon normal.
#[test]
fn polygon_normal_follows_winding() {
    let ccw = [
        Vec3::ZERO,
        Vec3::new(0.0, 3.0, 0.0),
        Vec3::new(0.0, 3.0, 2.0),
        Vec3::new(0.0, 0.0, 2.0),
    ];
    let mut cw = ccw;
    cw.reverse();
    let n = polygon_normal(&ccw);
    assert_eq!(n, Vec3::new(12.0, 0.0, 0.0));
    assert_eq!(polygon_normal(&cw), -n);
}
