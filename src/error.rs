//! Calculator error types.

use thiserror::Error;

/// Text shown in place of an operand whenever a calculation is invalid.
pub const ERROR_DISPLAY: &str = "Error";

/// Errors produced by the pure calculator core.
///
/// The engine never surfaces `InvalidOperand` or `InvalidResult` to its
/// caller: both are trapped and replaced by [`ERROR_DISPLAY`] in the
/// operand buffer. The remaining variants reject malformed input from the
/// UI layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The operand buffer could not be parsed as a finite number
    #[error("Operand '{0}' is not a number")]
    InvalidOperand(String),

    /// The computation produced NaN or an infinity
    #[error("Calculation produced an invalid result")]
    InvalidResult,

    /// A digit key outside 0..=9
    #[error("Digit {0} is out of range 0-9")]
    InvalidDigit(u8),

    /// A button label that maps to no key
    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    /// An operator tag that maps to no binary operator
    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),
}
