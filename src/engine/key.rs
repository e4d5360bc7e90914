//! Keypad model.
//!
//! Each on-screen button maps to exactly one [`Key`]. The UI can build keys
//! directly or parse them from button labels.

use crate::core::{BinaryOperator, UnaryFunction};
use crate::error::CalcError;
use std::str::FromStr;

/// A single button press.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    DecimalPoint,
    Operator(BinaryOperator),
    Function(UnaryFunction),
    Equals,
    /// "AC": reset everything except history
    AllClear,
    /// "C": delete the last typed character
    Clear,
    /// Present on the keypad, not wired to any behaviour
    OpenParen,
    /// Present on the keypad, not wired to any behaviour
    CloseParen,
}

/// Whether a key press changed the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyOutcome {
    /// The key's operation ran
    Applied,

    /// The key's precondition did not hold; nothing changed
    Ignored { reason: &'static str },
}

impl KeyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl Key {
    /// Canonical on-screen label.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Function(f) => f.label().to_string(),
            Self::Equals => "=".to_string(),
            Self::AllClear => "AC".to_string(),
            Self::Clear => "C".to_string(),
            Self::OpenParen => "(".to_string(),
            Self::CloseParen => ")".to_string(),
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    /// Parse a button label.
    ///
    /// # Example
    ///
    /// ```rust
    /// use scicalc::core::{BinaryOperator, UnaryFunction};
    /// use scicalc::engine::Key;
    ///
    /// assert_eq!("7".parse::<Key>().unwrap(), Key::Digit(7));
    /// assert_eq!("×".parse::<Key>().unwrap(), Key::Operator(BinaryOperator::Multiply));
    /// assert_eq!("√".parse::<Key>().unwrap(), Key::Function(UnaryFunction::Sqrt));
    /// assert!("%".parse::<Key>().is_err());
    /// ```
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let key = match label {
            "." => Self::DecimalPoint,
            "=" => Self::Equals,
            "AC" => Self::AllClear,
            "C" => Self::Clear,
            "(" => Self::OpenParen,
            ")" => Self::CloseParen,
            "sin" => Self::Function(UnaryFunction::Sin),
            "cos" => Self::Function(UnaryFunction::Cos),
            "tan" => Self::Function(UnaryFunction::Tan),
            "log" => Self::Function(UnaryFunction::Log10),
            "ln" => Self::Function(UnaryFunction::Ln),
            "√" | "sqrt" => Self::Function(UnaryFunction::Sqrt),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c as u8 - b'0'),
                    _ => label
                        .parse::<BinaryOperator>()
                        .map(Self::Operator)
                        .map_err(|_| CalcError::UnknownKey(label.to_string()))?,
                }
            }
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_parse() {
        let mut keys: Vec<Key> = (0..=9).map(Key::Digit).collect();
        keys.extend(BinaryOperator::ALL.iter().copied().map(Key::Operator));
        keys.extend(UnaryFunction::ALL.iter().copied().map(Key::Function));
        keys.extend([
            Key::DecimalPoint,
            Key::Equals,
            Key::AllClear,
            Key::Clear,
            Key::OpenParen,
            Key::CloseParen,
        ]);

        for key in keys {
            assert_eq!(key.label().parse::<Key>(), Ok(key), "label {}", key.label());
        }
    }

    #[test]
    fn ascii_operator_aliases_parse() {
        assert_eq!("*".parse::<Key>(), Ok(Key::Operator(BinaryOperator::Multiply)));
        assert_eq!("/".parse::<Key>(), Ok(Key::Operator(BinaryOperator::Divide)));
        assert_eq!("sqrt".parse::<Key>(), Ok(Key::Function(UnaryFunction::Sqrt)));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        for label in ["", "10", "H", "%", "exp", "x"] {
            assert_eq!(
                label.parse::<Key>(),
                Err(CalcError::UnknownKey(label.to_string()))
            );
        }
    }

    #[test]
    fn outcome_reports_application() {
        assert!(KeyOutcome::Applied.is_applied());
        assert!(!KeyOutcome::Ignored { reason: "empty" }.is_applied());
    }
}
