//! DIOT derivation crate.
//!
//! Turns the named-value view of one metadata row into a report row aligned
//! to the target schema. Columns with a registered rule are computed; the
//! rest copy the mapped value or stay blank.
//!
//! # Overview
//!
//! - **Rounding**: the report's own rounding policy ([`round_numeric`])
//! - **Rules**: the [`DerivationRule`] capability, built-in rules for the
//!   declarative rule specs, and closures for anything else
//! - **Engine**: [`DerivationEngine`] checks rules against the schema once
//!   at construction, then derives rows in schema order
//!
//! # Example
//!
//! ```ignore
//! use diot_model::{FilingProfile, NamedRow};
//! use diot_transform::DerivationEngine;
//!
//! let engine = DerivationEngine::from_profile(&FilingProfile::diot())?;
//! let mut row: NamedRow = [("RFCProveedor", "abc123"), ("ValorTotal", "100.60")]
//!     .into_iter()
//!     .collect();
//! let output = engine.derive(&mut row)?;
//! assert_eq!(output.get(7), Some("101"));
//! ```

mod engine;
mod error;
mod registry;
mod rules;

pub mod normalization;

// Error type
pub use error::{Result, TransformError};

// Rounding
pub use normalization::rounding::round_numeric;

// Rules
pub use registry::RuleRegistry;
pub use rules::{
    ConstantRule, DerivationRule, RoundedAmountRule, TruncatedRateRule, UppercaseRule,
    rule_from_spec,
};

// Engine
pub use engine::DerivationEngine;
