//! Field mapping from export columns to report names.
//!
//! Each raw row becomes a [`NamedRow`](diot_model::NamedRow): every header
//! column is looked up by position, trimmed, and stored under its renamed
//! target name, or under its own name when the rename table does not know it.

#![deny(unsafe_code)]

mod mapper;
mod plan;

pub use mapper::FieldMapper;
pub use plan::{MappingPlan, RenamedColumn};
