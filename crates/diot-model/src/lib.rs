//! DIOT report model.
//!
//! Types shared by every stage of the conversion: the fixed target schema,
//! the source rename table, per-row value containers, and the filing profile
//! that bundles them with the derivation rule specs.

mod error;
mod profile;
mod row;
mod rules;
mod schema;

// === Error Types ===
pub use error::{ModelError, Result};

// === Schema ===
pub use schema::{DIOT_COLUMNS, DIOT_RENAMES, RenameTable, TargetSchema};

// === Rows ===
pub use row::{NamedRow, OutputRow};

// === Rules ===
pub use rules::{DIOT_VAT_RATE, RuleSpec};

// === Profiles ===
pub use profile::{
    FilingProfile, OutputLayout, PROFILE_SCHEMA, PROFILE_SCHEMA_VERSION, ProfileHeader,
};
