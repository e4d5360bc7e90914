//! Builder API for calculator configuration.
//!
//! Configuration is code-only: history capacity and the angle unit used by
//! trigonometric keys.

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
