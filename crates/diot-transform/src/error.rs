//! Error types for derivation.

use thiserror::Error;

/// Errors raised while building the engine or deriving a row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A value that must be numeric could not be parsed.
    #[error("column {column}: value '{value}' is not a number")]
    NumericParse { column: String, value: String },

    /// Rounding only covers finite, non-negative amounts.
    #[error("amount {value} is not supported: only finite, non-negative amounts can be rounded")]
    UnsupportedAmount { value: f64 },

    /// Rules are registered for columns that are not part of the target schema.
    #[error(
        "derivation rules reference columns not in the target schema: {}",
        .columns.join(", ")
    )]
    Configuration { columns: Vec<String> },
}

/// Result type for derivation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
