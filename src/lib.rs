//! Scicalc: the evaluation engine of a scientific pocket calculator
//!
//! Scicalc follows a "pure core, imperative shell" layout. The core is made
//! of pure functions over numbers and immutable history values; the engine
//! owns the mutable calculator state and is driven one key press at a time.
//!
//! # Core Concepts
//!
//! - **Operand**: a number typed or computed, held as text until needed
//! - **Pending operator**: the single binary operation awaiting its right
//!   operand; a second operator resolves it (strict left-to-right, no precedence)
//! - **Functions**: sin, cos and tan (degrees by default), log, ln and √,
//!   applied to the operand in place
//! - **History**: the most recent completed calculations, oldest first
//!
//! Invalid arithmetic never fails the caller: division by zero, domain
//! errors and unparsable operands all show up as `"Error"` in the display.
//!
//! # Example
//!
//! ```rust
//! use scicalc::{Calculator, Key};
//!
//! let mut calc = Calculator::new();
//! for label in ["2", "+", "3", "×", "4", "="] {
//!     calc.press_label(label).unwrap();
//! }
//! assert_eq!(calc.display(), "20.0");
//!
//! calc.press(Key::AllClear).unwrap();
//! for label in ["5", "÷", "0", "="] {
//!     calc.press_label(label).unwrap();
//! }
//! assert_eq!(calc.display(), "Error");
//! assert_eq!(calc.history().len(), 2);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use core::{
    AngleUnit, BinaryOperator, CalculationHistory, CalculationRecord, Mode, UnaryFunction,
};
pub use engine::{Calculator, CalculatorView, Key, KeyOutcome};
pub use error::{CalcError, ERROR_DISPLAY};
