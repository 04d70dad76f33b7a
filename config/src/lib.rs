//! # Config Crate
//!
//! Centralized configuration constants for the FiPy mesh workspace.
//! All magic numbers and tunable parameters of the grid geometry engine are
//! defined here so the mesh crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CELL_COUNT, EPSILON_TOLERANCE, FACES_PER_CELL};
//!
//! // An axis without an explicit cell count gets a single cell
//! let requested: Option<usize> = None;
//! assert_eq!(requested.unwrap_or(DEFAULT_CELL_COUNT), 1);
//!
//! // Hexahedral cells are bounded by six faces
//! assert_eq!(FACES_PER_CELL, 6);
//!
//! // Geometric comparisons use a shared tolerance
//! assert!((0.1_f64 + 0.2 - 0.3).abs() < EPSILON_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: Runtime overrides go through [`constants::GlobalConfig`]
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
