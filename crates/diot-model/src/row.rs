//! Per-row value containers.

use std::collections::BTreeMap;

/// Named-value view of one input row.
///
/// Keys are renamed-or-original source column names, values are trimmed
/// cell text. A fresh view is built for every input row; derivation may write
/// derived values back into it while the row is being processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedRow {
    values: BTreeMap<String, String>,
}

impl NamedRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Overwrites `name` only when it is already present.
    ///
    /// Returns true when a value was replaced.
    pub fn replace_existing(&mut self, name: &str, value: &str) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                value.clone_into(slot);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for NamedRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// One report row, positionally aligned to the target schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRow {
    values: Vec<String>,
}

impl OutputRow {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

impl From<Vec<String>> for OutputRow {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}
