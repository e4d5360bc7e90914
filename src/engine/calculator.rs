//! The calculator engine.

use crate::core::number::{checked, display_result, format_number, parse_operand};
use crate::core::{
    AngleUnit, BinaryOperator, CalculationHistory, CalculationRecord, Mode, UnaryFunction,
};
use crate::engine::key::{Key, KeyOutcome};
use crate::engine::view::CalculatorView;
use crate::error::{CalcError, ERROR_DISPLAY};
use chrono::Utc;
use tracing::{debug, trace, warn};

const EMPTY_OPERAND: &str = "operand is empty";

/// Calculator state mutated by key presses.
///
/// Holds one operand buffer, at most one pending operator, and a bounded
/// history of completed calculations. Operators apply strictly left to
/// right: pressing a second operator resolves the first.
///
/// # Example
///
/// ```rust
/// use scicalc::Calculator;
/// use scicalc::core::BinaryOperator;
///
/// let mut calc = Calculator::new();
/// calc.input_digit(9).unwrap();
/// calc.apply_binary_operator(BinaryOperator::Subtract);
/// calc.input_digit(3).unwrap();
/// calc.apply_equals();
///
/// assert_eq!(calc.display(), "6.0");
/// assert_eq!(calc.history().lines(), vec!["9.0 - 3.0 = 6.0"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    current_operand: String,
    pending_operator: Option<BinaryOperator>,
    first_operand: f64,
    entering_new_number: bool,
    expression_preview: String,
    history: CalculationHistory,
    angle_unit: AngleUnit,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Calculator with a 10-entry history reading angles in degrees.
    pub fn new() -> Self {
        Self::with_config(CalculationHistory::new(), AngleUnit::Degrees)
    }

    pub(crate) fn with_config(history: CalculationHistory, angle_unit: AngleUnit) -> Self {
        Self {
            current_operand: String::new(),
            pending_operator: None,
            first_operand: 0.0,
            entering_new_number: true,
            expression_preview: String::new(),
            history,
            angle_unit,
        }
    }

    /// Type a digit. Starts a fresh operand when a new number is expected.
    pub fn input_digit(&mut self, digit: u8) -> Result<KeyOutcome, CalcError> {
        if digit > 9 {
            return Err(CalcError::InvalidDigit(digit));
        }
        let ch = char::from(b'0' + digit);

        if self.entering_new_number {
            self.current_operand.clear();
            self.entering_new_number = false;
        }
        self.current_operand.push(ch);

        trace!(operand = %self.current_operand, "digit entered");
        Ok(KeyOutcome::Applied)
    }

    /// Add a decimal point unless the operand already has one.
    pub fn input_decimal_point(&mut self) -> KeyOutcome {
        if self.current_operand.contains('.') {
            trace!(operand = %self.current_operand, "decimal point ignored");
            return KeyOutcome::Ignored {
                reason: "operand already has a decimal point",
            };
        }

        if self.current_operand.is_empty() {
            self.current_operand.push_str("0.");
        } else {
            self.current_operand.push('.');
        }
        debug!(operand = %self.current_operand, "decimal point entered");
        KeyOutcome::Applied
    }

    /// Press `+`, `-`, `×` or `÷`.
    ///
    /// With an operator already pending, that operation is resolved first
    /// and its result becomes the new left operand.
    pub fn apply_binary_operator(&mut self, op: BinaryOperator) -> KeyOutcome {
        if self.current_operand.is_empty() {
            trace!(operator = %op, "operator ignored on empty operand");
            return KeyOutcome::Ignored {
                reason: EMPTY_OPERAND,
            };
        }

        let operand = match parse_operand(&self.current_operand) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, operator = %op, "operator applied to invalid operand");
                self.current_operand = ERROR_DISPLAY.to_string();
                self.entering_new_number = true;
                return KeyOutcome::Applied;
            }
        };

        match self.pending_operator {
            None => {
                self.first_operand = operand;
                self.expression_preview = format!("{} {}", self.current_operand, op.symbol());
            }
            Some(pending) => {
                let result = pending.evaluate(self.first_operand, operand);
                self.first_operand = result;
                self.current_operand = display_result(result);
                if self.current_operand == ERROR_DISPLAY {
                    warn!(operator = %pending, "chained operation produced an invalid result");
                }
                self.expression_preview = format!("{} {}", self.current_operand, op.symbol());
                debug!(
                    operator = %pending,
                    result = %self.current_operand,
                    "chained operation resolved"
                );
            }
        }

        self.pending_operator = Some(op);
        self.entering_new_number = true;
        debug!(operator = %op, first_operand = self.first_operand, "operator pending");
        KeyOutcome::Applied
    }

    /// Press `=`: resolve the pending operation and log it to history.
    pub fn apply_equals(&mut self) -> KeyOutcome {
        let Some(op) = self.pending_operator else {
            trace!("equals ignored without pending operator");
            return KeyOutcome::Ignored {
                reason: "no pending operator",
            };
        };
        if self.current_operand.is_empty() {
            trace!("equals ignored on empty operand");
            return KeyOutcome::Ignored {
                reason: EMPTY_OPERAND,
            };
        }

        match parse_operand(&self.current_operand) {
            Ok(second) => {
                let result = op.evaluate(self.first_operand, second);
                let displayed = display_result(result);
                if displayed == ERROR_DISPLAY {
                    warn!(operator = %op, "calculation produced an invalid result");
                }

                self.history = self.history.record(CalculationRecord {
                    first_operand: self.first_operand,
                    operator: op,
                    second_operand: second,
                    result: displayed.clone(),
                    recorded_at: Utc::now(),
                });
                debug!(
                    operator = %op,
                    result = %displayed,
                    history_len = self.history.len(),
                    "calculation completed"
                );
                self.current_operand = displayed;
            }
            Err(err) => {
                warn!(error = %err, operator = %op, "equals applied to invalid operand");
                self.current_operand = ERROR_DISPLAY.to_string();
            }
        }

        self.pending_operator = None;
        self.expression_preview.clear();
        self.entering_new_number = true;
        KeyOutcome::Applied
    }

    /// Replace the operand with `f(operand)`.
    ///
    /// Leaves the pending operator, left operand and history untouched.
    pub fn apply_unary_function(&mut self, function: UnaryFunction) -> KeyOutcome {
        if self.current_operand.is_empty() {
            trace!(function = %function, "function ignored on empty operand");
            return KeyOutcome::Ignored {
                reason: EMPTY_OPERAND,
            };
        }

        let outcome = parse_operand(&self.current_operand)
            .and_then(|x| checked(function.apply(x, self.angle_unit)));

        self.current_operand = match outcome {
            Ok(value) => format_number(value),
            Err(err) => {
                warn!(error = %err, function = %function, "function produced an invalid result");
                ERROR_DISPLAY.to_string()
            }
        };
        self.entering_new_number = true;
        debug!(function = %function, result = %self.current_operand, "function applied");
        KeyOutcome::Applied
    }

    /// "AC": reset operand and pending operation. History survives.
    pub fn clear_all(&mut self) -> KeyOutcome {
        self.current_operand.clear();
        self.pending_operator = None;
        self.first_operand = 0.0;
        self.expression_preview.clear();
        self.entering_new_number = true;
        debug!("all cleared");
        KeyOutcome::Applied
    }

    /// "C": drop the last character of the operand.
    pub fn clear_last_digit(&mut self) -> KeyOutcome {
        match self.current_operand.pop() {
            Some(removed) => {
                debug!(%removed, operand = %self.current_operand, "last character cleared");
                KeyOutcome::Applied
            }
            None => {
                trace!("clear ignored on empty operand");
                KeyOutcome::Ignored {
                    reason: EMPTY_OPERAND,
                }
            }
        }
    }

    /// Empty the history log.
    pub fn clear_history(&mut self) -> KeyOutcome {
        self.history = self.history.cleared();
        debug!("history cleared");
        KeyOutcome::Applied
    }

    /// Dispatch a key press to its operation.
    pub fn press(&mut self, key: Key) -> Result<KeyOutcome, CalcError> {
        let outcome = match key {
            Key::Digit(d) => return self.input_digit(d),
            Key::DecimalPoint => self.input_decimal_point(),
            Key::Operator(op) => self.apply_binary_operator(op),
            Key::Function(f) => self.apply_unary_function(f),
            Key::Equals => self.apply_equals(),
            Key::AllClear => self.clear_all(),
            Key::Clear => self.clear_last_digit(),
            Key::OpenParen | Key::CloseParen => {
                trace!(key = %key.label(), "parenthesis key has no behaviour");
                KeyOutcome::Ignored {
                    reason: "grouping is not supported",
                }
            }
        };
        Ok(outcome)
    }

    /// Parse a button label and press it.
    pub fn press_label(&mut self, label: &str) -> Result<KeyOutcome, CalcError> {
        let key: Key = label.parse()?;
        self.press(key)
    }

    /// Value for the main display.
    ///
    /// Shows `"0"` right after an operator press, before the next digit.
    pub fn display(&self) -> &str {
        let awaiting_operand = self.entering_new_number && self.pending_operator.is_some();
        if awaiting_operand || self.current_operand.is_empty() {
            "0"
        } else {
            &self.current_operand
        }
    }

    /// Raw operand buffer.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// Left operand and operator, e.g. `"12 ×"`, or empty.
    pub fn expression_preview(&self) -> &str {
        &self.expression_preview
    }

    pub fn pending_operator(&self) -> Option<BinaryOperator> {
        self.pending_operator
    }

    pub fn first_operand(&self) -> f64 {
        self.first_operand
    }

    pub fn is_entering_new_number(&self) -> bool {
        self.entering_new_number
    }

    pub fn mode(&self) -> Mode {
        Mode::from_pending(self.pending_operator.is_some())
    }

    pub fn history(&self) -> &CalculationHistory {
        &self.history
    }

    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    /// Snapshot for a presentation layer.
    pub fn view(&self) -> CalculatorView {
        CalculatorView {
            display: self.display().to_string(),
            expression_preview: self.expression_preview.clone(),
            mode: self.mode(),
            history: self.history.lines(),
        }
    }
}
