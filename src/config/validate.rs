//! Configuration validation
//!
//! Checks value ranges before any input is read.

use super::schema::EvalConfig;
use crate::error::{EvalError, Result};
use crate::eval::classification::MAX_ROUNDING_DECIMAL;

/// Largest rounding precision that still fits an f64 mantissa
pub const MAX_DECIMAL: u32 = MAX_ROUNDING_DECIMAL;

/// Validate an evaluation config
///
/// Checks:
/// - `decimal` is at most [`MAX_DECIMAL`]
/// - the CSV delimiter is a single ASCII character other than a quote or newline
pub fn validate_config(config: &EvalConfig) -> Result<()> {
    if config.decimal > MAX_DECIMAL {
        return Err(EvalError::config(format!(
            "decimal must be <= {MAX_DECIMAL}, got {}",
            config.decimal
        )));
    }

    let delimiter = config.csv.delimiter;
    if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
        return Err(EvalError::config(format!(
            "delimiter must be a single ASCII character other than a quote or newline, got {delimiter:?}"
        )));
    }

    Ok(())
}
