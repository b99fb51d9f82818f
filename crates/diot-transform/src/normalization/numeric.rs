//! Numeric parsing of mapped values.
//!
//! Both parsers take already-trimmed cell text. Neither accepts thousands
//! separators or an empty string: a tax figure that does not parse is an
//! error, never a silent zero.

use crate::error::{Result, TransformError};

/// Parses a decimal amount.
pub fn parse_amount(column: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| TransformError::NumericParse {
            column: column.to_string(),
            value: value.to_string(),
        })
}

/// Parses an amount and keeps only its integer part (truncating toward zero).
pub fn parse_truncated(column: &str, value: &str) -> Result<f64> {
    parse_amount(column, value).map(f64::trunc)
}
