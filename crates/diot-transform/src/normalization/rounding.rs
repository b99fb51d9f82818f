//! Report rounding rule.
//!
//! Amounts are reported as whole units using a fixed policy on the
//! fractional part `d`:
//!
//! | `d`              | result        |
//! |------------------|---------------|
//! | `[0, 0.01)`      | integer part  |
//! | `[0.01, 0.50]`   | integer part  |
//! | `[0.51, 1)`      | integer + 1   |
//! | `(0.50, 0.51)`   | integer part  |
//!
//! This is not half-up or half-even rounding; `x.50` goes down.
//! Boundaries are compared with [`BOUNDARY_TOLERANCE`] so that binary
//! representation error (`10.51 - 10 == 0.5099999999999998`) does not move a
//! value across a boundary.

use crate::error::{Result, TransformError};

/// Slack applied to every boundary comparison.
pub const BOUNDARY_TOLERANCE: f64 = 1e-6;

/// Smallest fractional part that rounds up.
const ROUND_UP_MIN: f64 = 0.51;

/// Rounds a non-negative amount and renders it as an integer string.
///
/// Negative, NaN, and infinite amounts are rejected.
pub fn round_numeric(value: f64) -> Result<String> {
    if !value.is_finite() || value < 0.0 {
        return Err(TransformError::UnsupportedAmount { value });
    }
    // -0.0 renders as "-0"
    let value = if value == 0.0 { 0.0 } else { value };

    let integer_part = value.floor();
    let decimal_part = value - integer_part;

    // [0, 0.01), [0.01, 0.50] and the (0.50, 0.51) gap keep the integer part.
    let rounded = if decimal_part >= ROUND_UP_MIN - BOUNDARY_TOLERANCE {
        integer_part + 1.0
    } else {
        integer_part
    };

    Ok(format!("{rounded:.0}"))
}
