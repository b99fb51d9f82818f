//! Per-row field mapping.

use std::collections::BTreeMap;

use diot_ingest::{HeaderIndex, RawRow};
use diot_model::{NamedRow, RenameTable};
use tracing::debug;

use crate::plan::{MappingPlan, RenamedColumn};

/// Builds named-value views of raw rows.
#[derive(Debug, Clone, Default)]
pub struct FieldMapper {
    renames: RenameTable,
}

impl FieldMapper {
    pub fn new(renames: RenameTable) -> Self {
        Self { renames }
    }

    pub fn renames(&self) -> &RenameTable {
        &self.renames
    }

    /// Maps one raw row into a fresh named-value view.
    ///
    /// Columns are visited in header-index order; when two columns land on
    /// the same name the later one overwrites the earlier. A position past
    /// the end of the row yields an empty value.
    pub fn map_row(&self, index: &HeaderIndex, row: &RawRow) -> NamedRow {
        let mut named = NamedRow::new();
        for (name, position) in index.iter() {
            let value = row.get(position).map_or("", |v| v.trim());
            named.insert(self.renames.resolve(name), value);
        }
        named
    }

    /// Describes how the columns of `index` will be mapped.
    pub fn plan(&self, index: &HeaderIndex) -> MappingPlan {
        let mut plan = MappingPlan::default();
        let mut writers: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for (name, _) in index.iter() {
            let target = self.renames.resolve(name);
            if target == name {
                plan.passthrough.push(name.to_string());
            } else {
                plan.renamed.push(RenamedColumn {
                    source: name.to_string(),
                    target: target.to_string(),
                });
            }
            writers.entry(target).or_default().push(name.to_string());
        }
        plan.collisions = writers
            .into_iter()
            .filter(|(_, sources)| sources.len() > 1)
            .map(|(target, sources)| (target.to_string(), sources))
            .collect();
        debug!(
            columns = index.len(),
            renamed = plan.renamed.len(),
            collisions = plan.collisions.len(),
            "mapping plan built"
        );
        plan
    }
}
