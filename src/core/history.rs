//! Bounded log of completed calculations.
//!
//! Each `=` that completes a binary operation appends one record. Once the
//! capacity is reached the oldest record is dropped (FIFO).

use super::number::display_result;
use super::operator::BinaryOperator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of records kept unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Record of a single completed calculation.
///
/// A non-finite operand renders as the error marker, as it did on the
/// display.
///
/// # Example
///
/// ```rust
/// use scicalc::core::{BinaryOperator, CalculationRecord};
/// use chrono::Utc;
///
/// let record = CalculationRecord {
///     first_operand: 9.0,
///     operator: BinaryOperator::Subtract,
///     second_operand: 3.0,
///     result: "6.0".to_string(),
///     recorded_at: Utc::now(),
/// };
/// assert_eq!(record.to_string(), "9.0 - 3.0 = 6.0");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Left operand
    pub first_operand: f64,
    /// Operator applied
    pub operator: BinaryOperator,
    /// Right operand
    pub second_operand: f64,
    /// Result as it was displayed, possibly the error marker
    pub result: String,
    /// When the calculation completed
    pub recorded_at: DateTime<Utc>,
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            display_result(self.first_operand),
            self.operator.symbol(),
            display_result(self.second_operand),
            self.result
        )
    }
}

/// Ordered, capacity-bounded history, oldest first.
///
/// `record` returns a new history rather than mutating in place.
///
/// # Example
///
/// ```rust
/// use scicalc::core::{BinaryOperator, CalculationHistory, CalculationRecord};
/// use chrono::Utc;
///
/// let mut history = CalculationHistory::with_capacity(2);
/// for n in 1..=3 {
///     history = history.record(CalculationRecord {
///         first_operand: n as f64,
///         operator: BinaryOperator::Add,
///         second_operand: 0.0,
///         result: format!("{n}.0"),
///         recorded_at: Utc::now(),
///     });
/// }
///
/// assert_eq!(history.lines(), vec!["2.0 + 0.0 = 2.0", "3.0 + 0.0 = 3.0"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    records: Vec<CalculationRecord>,
    capacity: usize,
}

impl Default for CalculationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationHistory {
    /// Empty history holding at most [`DEFAULT_HISTORY_CAPACITY`] records.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Empty history with a custom bound. A zero bound keeps nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, returning a new history trimmed to capacity.
    pub fn record(&self, record: CalculationRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        let overflow = records.len().saturating_sub(self.capacity);
        records.drain(..overflow);
        Self {
            records,
            capacity: self.capacity,
        }
    }

    /// Same bound, no records.
    pub fn cleared(&self) -> Self {
        Self::with_capacity(self.capacity)
    }

    /// Records oldest first.
    pub fn entries(&self) -> &[CalculationRecord] {
        &self.records
    }

    /// Records newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.records.iter().rev()
    }

    /// Rendered records, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    pub fn latest(&self) -> Option<&CalculationRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
