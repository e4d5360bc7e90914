//! Stateful calculator engine.
//!
//! The imperative shell around [`crate::core`]: a single owned
//! [`Calculator`] mutated by one key press at a time, plus the keypad
//! model and a render snapshot for the UI.

mod calculator;
mod key;
mod view;

pub use calculator::Calculator;
pub use key::{Key, KeyOutcome};
pub use view::CalculatorView;
