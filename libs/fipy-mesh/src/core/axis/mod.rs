//! Cartesian coordinate axes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;

/// One of the three grid axes.
///
/// X runs from left to right, Y from bottom to top, Z from front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Left to right.
    X,
    /// Bottom to top.
    Y,
    /// Front to back.
    Z,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a `Vec3` or `[_; 3]`.
    ///
    /// # Examples
    /// ```
    /// use fipy_mesh::Axis;
    /// assert_eq!(Axis::Z.index(), 2);
    /// ```
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector pointing along the positive direction of this axis.
    ///
    /// # Examples
    /// ```
    /// use fipy_mesh::{Axis, Vec3};
    /// assert_eq!(Axis::Y.unit(), Vec3::Y);
    /// ```
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Component of `v` along this axis.
    #[inline]
    pub fn component(self, v: Vec3) -> f64 {
        v[self.index()]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}
