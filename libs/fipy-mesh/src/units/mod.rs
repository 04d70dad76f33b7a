//! # Length Units and Spacings
//!
//! A grid spacing is either a bare number or a magnitude tagged with a length
//! unit. Construction resolves the spacings once into dimensionless values
//! plus a single [`Scale`] taken from the x spacing, so all downstream
//! geometry is unit-free.
//!
//! ## Example
//!
//! ```rust
//! use fipy_mesh::units::{LengthUnit, Spacing};
//!
//! let dx = Spacing::new(2.5, LengthUnit::Millimeter);
//! assert_eq!(dx.magnitude(), 2.5);
//! assert_eq!(dx.unit(), Some(LengthUnit::Millimeter));
//!
//! let dy: Spacing = 0.5.into();
//! assert_eq!(dy.unit(), None);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;
use crate::error::MeshError;

// =============================================================================
// LENGTH UNIT
// =============================================================================

/// Supported length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Kilometre.
    #[serde(rename = "km")]
    Kilometer,
    /// Metre.
    #[serde(rename = "m")]
    Meter,
    /// Centimetre.
    #[serde(rename = "cm")]
    Centimeter,
    /// Millimetre.
    #[serde(rename = "mm")]
    Millimeter,
    /// Micrometre.
    #[serde(rename = "um")]
    Micrometer,
    /// Nanometre.
    #[serde(rename = "nm")]
    Nanometer,
    /// International inch.
    #[serde(rename = "inch")]
    Inch,
    /// International foot.
    #[serde(rename = "ft")]
    Foot,
}

impl LengthUnit {
    /// Size of one unit in metres.
    ///
    /// # Examples
    /// ```
    /// use fipy_mesh::units::LengthUnit;
    /// assert_eq!(LengthUnit::Centimeter.meters(), 0.01);
    /// ```
    pub fn meters(self) -> f64 {
        match self {
            LengthUnit::Kilometer => 1.0e3,
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 1.0e-2,
            LengthUnit::Millimeter => 1.0e-3,
            LengthUnit::Micrometer => 1.0e-6,
            LengthUnit::Nanometer => 1.0e-9,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
        }
    }

    /// Factor converting a magnitude in `self` into a magnitude in `target`.
    ///
    /// # Examples
    /// ```
    /// use fipy_mesh::units::LengthUnit;
    /// assert_eq!(LengthUnit::Meter.factor_to(LengthUnit::Meter), 1.0);
    /// let f = LengthUnit::Meter.factor_to(LengthUnit::Millimeter);
    /// assert!((f - 1000.0).abs() < 1e-9);
    /// ```
    pub fn factor_to(self, target: LengthUnit) -> f64 {
        if self == target {
            1.0
        } else {
            self.meters() / target.meters()
        }
    }

    /// Short symbol of the unit.
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Kilometer => "km",
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Micrometer => "um",
            LengthUnit::Nanometer => "nm",
            LengthUnit::Inch => "inch",
            LengthUnit::Foot => "ft",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "km" => Ok(LengthUnit::Kilometer),
            "m" => Ok(LengthUnit::Meter),
            "cm" => Ok(LengthUnit::Centimeter),
            "mm" => Ok(LengthUnit::Millimeter),
            "um" | "µm" => Ok(LengthUnit::Micrometer),
            "nm" => Ok(LengthUnit::Nanometer),
            "inch" | "in" => Ok(LengthUnit::Inch),
            "ft" => Ok(LengthUnit::Foot),
            other => Err(MeshError::UnknownUnit(other.to_string())),
        }
    }
}

// =============================================================================
// SPACING
// =============================================================================

/// Requested cell spacing along one axis.
///
/// Serialized untagged: a bare number, or `{ "value": .., "unit": ".." }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Dimensionless spacing, expressed in the grid's reference unit.
    Bare(f64),
    /// Spacing carrying a length unit.
    Physical {
        /// Magnitude in `unit`
        value: f64,
        /// Unit of `value`
        unit: LengthUnit,
    },
}

impl Spacing {
    /// Creates a spacing tagged with a unit.
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Spacing::Physical { value, unit }
    }

    /// Numeric magnitude, in whatever unit the spacing carries.
    pub fn magnitude(&self) -> f64 {
        match *self {
            Spacing::Bare(value) | Spacing::Physical { value, .. } => value,
        }
    }

    /// Unit of the spacing, `None` when bare.
    pub fn unit(&self) -> Option<LengthUnit> {
        match *self {
            Spacing::Bare(_) => None,
            Spacing::Physical { unit, .. } => Some(unit),
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Bare(::config::constants::DEFAULT_SPACING)
    }
}

impl From<f64> for Spacing {
    fn from(value: f64) -> Self {
        Spacing::Bare(value)
    }
}

impl From<(f64, LengthUnit)> for Spacing {
    fn from((value, unit): (f64, LengthUnit)) -> Self {
        Spacing::Physical { value, unit }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::Bare(value) => write!(f, "{value}"),
            Spacing::Physical { value, unit } => write!(f, "{value} {unit}"),
        }
    }
}

// =============================================================================
// SCALE
// =============================================================================

/// Length scale shared by all three axes of a grid.
///
/// Grid geometry is stored dimensionless; one grid length unit corresponds
/// to `length` metres when the grid has a unit, and to `1.0` otherwise.
///
/// # Examples
/// ```
/// use fipy_mesh::units::{LengthUnit, Scale};
/// let scale = Scale::new(Some(LengthUnit::Centimeter));
/// assert_eq!(scale.length(), 0.01);
/// assert!((scale.area() - 1.0e-4).abs() < 1e-18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    unit: Option<LengthUnit>,
}

impl Scale {
    /// Scale of a grid whose reference unit is `unit`.
    pub fn new(unit: Option<LengthUnit>) -> Self {
        Self { unit }
    }

    /// Scale of a grid without physical units.
    pub fn dimensionless() -> Self {
        Self { unit: None }
    }

    /// Reference unit, if any.
    pub fn unit(&self) -> Option<LengthUnit> {
        self.unit
    }

    /// Metres per grid length unit.
    pub fn length(&self) -> f64 {
        self.unit.map_or(1.0, LengthUnit::meters)
    }

    /// Square metres per grid area unit.
    pub fn area(&self) -> f64 {
        self.length().powi(2)
    }

    /// Cubic metres per grid volume unit.
    pub fn volume(&self) -> f64 {
        self.length().powi(3)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::dimensionless()
    }
}

/// Physical extent of a grid along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalShape {
    /// Extent in the reference unit (or dimensionless).
    pub extent: Vec3,
    /// Reference unit, if any.
    pub unit: Option<LengthUnit>,
}

impl PhysicalShape {
    /// Extent converted to metres; dimensionless grids are returned unchanged.
    pub fn in_meters(&self) -> Vec3 {
        self.extent * Scale::new(self.unit).length()
    }
}
