//! Binary arithmetic operators.
//!
//! Operators are applied strictly one at a time. There is no precedence:
//! a second operator resolves the pending one before taking its place.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four binary operators a calculator key can trigger.
///
/// # Example
///
/// ```rust
/// use scicalc::core::BinaryOperator;
///
/// assert_eq!(BinaryOperator::Multiply.symbol(), "×");
/// assert_eq!(BinaryOperator::Subtract.evaluate(9.0, 3.0), 6.0);
/// assert!(BinaryOperator::Divide.evaluate(5.0, 0.0).is_nan());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// All operators, in keypad order.
    pub const ALL: [BinaryOperator; 4] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
    ];

    /// Symbol used in the expression preview and history records.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to `a` and `b`.
    ///
    /// Division by zero yields NaN rather than an infinity so callers can
    /// treat every invalid quotient the same way.
    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    f64::NAN
                }
            }
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOperator {
    type Err = CalcError;

    /// Accepts both the ASCII tags and the display symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "*" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

/// Evaluate `a <op> b`.
pub fn evaluate(a: f64, b: f64, op: BinaryOperator) -> f64 {
    op.evaluate(a, b)
}

/// Evaluate with a textual operator tag.
///
/// Unknown tags evaluate to `0.0`.
pub fn evaluate_tag(a: f64, b: f64, tag: &str) -> f64 {
    tag.parse::<BinaryOperator>()
        .map(|op| op.evaluate(a, b))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_matches_f64_operations() {
        assert_eq!(evaluate(2.0, 3.0, BinaryOperator::Add), 5.0);
        assert_eq!(evaluate(9.0, 3.0, BinaryOperator::Subtract), 6.0);
        assert_eq!(evaluate(2.5, 4.0, BinaryOperator::Multiply), 10.0);
        assert_eq!(evaluate(7.0, 2.0, BinaryOperator::Divide), 3.5);
    }

    #[test]
    fn divide_by_zero_is_nan() {
        assert!(evaluate(5.0, 0.0, BinaryOperator::Divide).is_nan());
        assert!(evaluate(0.0, 0.0, BinaryOperator::Divide).is_nan());
        assert!(evaluate(5.0, -0.0, BinaryOperator::Divide).is_nan());
    }

    #[test]
    fn symbols_match_keypad() {
        let symbols: Vec<&str> = BinaryOperator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!["+", "-", "×", "÷"]);
        assert_eq!(BinaryOperator::Divide.to_string(), "÷");
    }

    #[test]
    fn parses_tags_and_symbols() {
        assert_eq!("*".parse::<BinaryOperator>(), Ok(BinaryOperator::Multiply));
        assert_eq!("×".parse::<BinaryOperator>(), Ok(BinaryOperator::Multiply));
        assert_eq!("÷".parse::<BinaryOperator>(), Ok(BinaryOperator::Divide));
        assert_eq!("−".parse::<BinaryOperator>(), Ok(BinaryOperator::Subtract));
        assert_eq!(
            "%".parse::<BinaryOperator>(),
            Err(CalcError::UnknownOperator("%".to_string()))
        );
    }

    #[test]
    fn unknown_tag_evaluates_to_zero() {
        assert_eq!(evaluate_tag(4.0, 2.0, "^"), 0.0);
        assert_eq!(evaluate_tag(4.0, 2.0, ""), 0.0);
        assert_eq!(evaluate_tag(4.0, 2.0, "/"), 2.0);
    }

    #[test]
    fn operator_serializes_correctly() {
        let json = serde_json::to_string(&BinaryOperator::Multiply).unwrap();
        let back: BinaryOperator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BinaryOperator::Multiply);
    }
}
