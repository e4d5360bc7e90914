//! Entry mode of the calculator.
//!
//! The mode is derived from whether a binary operator is pending; it is
//! never stored separately from that fact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which operand the user is currently typing.
///
/// `apply_equals` and `clear_all` return the engine to
/// `EnteringFirstOperand`. There is no terminal mode.
///
/// # Example
///
/// ```rust
/// use scicalc::core::Mode;
///
/// let mode = Mode::from_pending(false);
/// assert_eq!(mode, Mode::EnteringFirstOperand);
/// assert_eq!(mode.name(), "EnteringFirstOperand");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    EnteringFirstOperand,
    EnteringSecondOperand,
}

impl Mode {
    /// Mode implied by the presence of a pending operator.
    pub fn from_pending(has_pending_operator: bool) -> Self {
        if has_pending_operator {
            Self::EnteringSecondOperand
        } else {
            Self::EnteringFirstOperand
        }
    }

    /// Name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnteringFirstOperand => "EnteringFirstOperand",
            Self::EnteringSecondOperand => "EnteringSecondOperand",
        }
    }

    pub fn is_awaiting_second_operand(&self) -> bool {
        matches!(self, Self::EnteringSecondOperand)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
