//! Build errors for the calculator builder.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("History capacity must be at least 1. Call .history_capacity(n) with n > 0")]
    ZeroHistoryCapacity,
}
