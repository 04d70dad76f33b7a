//! Core building blocks shared by the mesh modules.
//!
//! Includes the vector alias (`Vec3`), coordinate axes, and the integer
//! index-generation tools used to lay out structured grids.

pub mod axis;
pub mod indexing;
pub mod vec3;
