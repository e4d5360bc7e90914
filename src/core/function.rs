//! Scientific unary functions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit used to interpret the operand of trigonometric functions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Convert an angle in this unit to radians.
    pub fn to_radians(&self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle * std::f64::consts::PI / 180.0,
            Self::Radians => angle,
        }
    }
}

/// A function applied to the current operand in place.
///
/// # Example
///
/// ```rust
/// use scicalc::core::{AngleUnit, UnaryFunction};
///
/// let y = UnaryFunction::Sin.apply(90.0, AngleUnit::Degrees);
/// assert!((y - 1.0).abs() < 1e-12);
/// assert!(UnaryFunction::Sqrt.apply(-4.0, AngleUnit::Degrees).is_nan());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
}

impl UnaryFunction {
    pub const ALL: [UnaryFunction; 6] = [
        UnaryFunction::Sin,
        UnaryFunction::Cos,
        UnaryFunction::Tan,
        UnaryFunction::Log10,
        UnaryFunction::Ln,
        UnaryFunction::Sqrt,
    ];

    /// Label printed on the key.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Sqrt => "√",
        }
    }

    pub fn is_trigonometric(&self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Apply the function. Trigonometric inputs are read in `unit`.
    ///
    /// Domain violations surface as NaN or an infinity; the caller decides
    /// how to present them.
    pub fn apply(&self, x: f64, unit: AngleUnit) -> f64 {
        match self {
            Self::Sin => unit.to_radians(x).sin(),
            Self::Cos => unit.to_radians(x).cos(),
            Self::Tan => unit.to_radians(x).tan(),
            Self::Log10 => x.log10(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
