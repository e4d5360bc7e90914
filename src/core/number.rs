//! Operand parsing and decimal rendering.
//!
//! Operands live as text until they are needed for arithmetic. Results are
//! rendered the way a JVM `Double` prints: always with a fractional part,
//! switching to `E` notation outside `[1e-3, 1e7)`.

use crate::error::{CalcError, ERROR_DISPLAY};

const PLAIN_LOWER: f64 = 1e-3;
const PLAIN_UPPER: f64 = 1e7;

/// Parse an operand buffer into a finite number.
///
/// # Example
///
/// ```rust
/// use scicalc::core::number::parse_operand;
///
/// assert_eq!(parse_operand("3.14"), Ok(3.14));
/// assert_eq!(parse_operand("0."), Ok(0.0));
/// assert!(parse_operand("Error").is_err());
/// ```
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    let trimmed = text.trim();
    let invalid = || CalcError::InvalidOperand(text.to_string());

    if trimmed.is_empty() || trimmed == ERROR_DISPLAY {
        return Err(invalid());
    }

    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}

/// Accept only finite results.
pub fn checked(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidResult)
    }
}

/// Render a number for the display and history.
///
/// # Example
///
/// ```rust
/// use scicalc::core::number::format_number;
///
/// assert_eq!(format_number(6.0), "6.0");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(1e10), "1.0E10");
/// assert_eq!(format_number(1.5e-5), "1.5E-5");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (PLAIN_LOWER..PLAIN_UPPER).contains(&magnitude) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{mantissa}E{exponent}")
            }
            Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
            None => scientific,
        }
    }
}

/// Render a result, substituting the error marker for non-finite values.
pub fn display_result(value: f64) -> String {
    checked(value)
        .map(format_number)
        .unwrap_or_else(|_| ERROR_DISPLAY.to_string())
}
