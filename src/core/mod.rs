//! Pure calculator core.
//!
//! Everything here is free of side effects: operators and functions map
//! numbers to numbers, and the history returns new values instead of
//! mutating. The stateful engine lives in [`crate::engine`].

mod function;
mod history;
mod mode;
pub mod number;
mod operator;

pub use function::{AngleUnit, UnaryFunction};
pub use history::{CalculationHistory, CalculationRecord, DEFAULT_HISTORY_CAPACITY};
pub use mode::Mode;
pub use operator::{evaluate, evaluate_tag, BinaryOperator};
