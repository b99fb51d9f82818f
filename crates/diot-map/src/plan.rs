//! Header-level view of what the mapper will do.

use std::collections::BTreeMap;

/// A source column that is stored under a different name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedColumn {
    pub source: String,
    pub target: String,
}

/// How the columns of one header are mapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingPlan {
    /// Columns renamed through the rename table, in header order.
    pub renamed: Vec<RenamedColumn>,
    /// Columns kept under their own name, in header order.
    pub passthrough: Vec<String>,
    /// Names written by more than one source column, with those sources in
    /// header order. The last source wins for every row.
    pub collisions: BTreeMap<String, Vec<String>>,
}

impl MappingPlan {
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }
}
