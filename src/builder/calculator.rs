//! Builder for configuring a calculator.

use crate::builder::error::BuildError;
use crate::core::{AngleUnit, CalculationHistory, DEFAULT_HISTORY_CAPACITY};
use crate::engine::Calculator;
use tracing::debug;

/// Builder for constructing a [`Calculator`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use scicalc::builder::CalculatorBuilder;
/// use scicalc::core::AngleUnit;
///
/// let calc = CalculatorBuilder::new()
///     .history_capacity(25)
///     .angle_unit(AngleUnit::Radians)
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.history().capacity(), 25);
/// assert_eq!(calc.angle_unit(), AngleUnit::Radians);
/// ```
#[derive(Clone, Debug)]
pub struct CalculatorBuilder {
    history_capacity: usize,
    angle_unit: AngleUnit,
}

impl CalculatorBuilder {
    /// Create a builder with the defaults: 10 history entries, degrees.
    pub fn new() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            angle_unit: AngleUnit::Degrees,
        }
    }

    /// Maximum number of completed calculations kept.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Unit for sin, cos and tan operands.
    pub fn angle_unit(mut self, unit: AngleUnit) -> Self {
        self.angle_unit = unit;
        self
    }

    /// Build the calculator.
    /// Returns an error if the history could hold nothing.
    pub fn build(self) -> Result<Calculator, BuildError> {
        if self.history_capacity == 0 {
            return Err(BuildError::ZeroHistoryCapacity);
        }

        debug!(
            history_capacity = self.history_capacity,
            angle_unit = ?self.angle_unit,
            "calculator built"
        );
        Ok(Calculator::with_config(
            CalculationHistory::with_capacity(self.history_capacity),
            self.angle_unit,
        ))
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
