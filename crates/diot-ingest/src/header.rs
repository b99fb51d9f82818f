//! Header parsing and the name-to-position index.

use std::collections::BTreeMap;

/// Field delimiter of the metadata export.
pub const FIELD_DELIMITER: char = '~';

/// Mapping from source column name to its position in a row.
///
/// Iteration follows the order in which names first appear in the header.
/// A repeated name keeps its first position in that order but points at its
/// last occurrence in the row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    entries: Vec<(String, usize)>,
    slots: BTreeMap<String, usize>,
}

impl HeaderIndex {
    /// Builds the index from header column names in file order.
    pub fn from_columns(columns: &[String]) -> Self {
        let mut index = Self::default();
        for (position, name) in columns.iter().enumerate() {
            match index.slots.get(name) {
                Some(&slot) => index.entries[slot].1 = position,
                None => {
                    index.slots.insert(name.clone(), index.entries.len());
                    index.entries.push((name.clone(), position));
                }
            }
        }
        index
    }

    /// Row position for a column name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.slots.get(name).map(|&slot| self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(name, position)| (name.as_str(), *position))
    }

    /// Number of distinct column names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Splits one line of the export into fields.
///
/// Surrounding whitespace of the whole line (including a trailing `\r`) is
/// removed first. There is no quoting: every delimiter separates fields.
pub fn split_line(line: &str) -> Vec<String> {
    line.trim()
        .split(FIELD_DELIMITER)
        .map(str::to_string)
        .collect()
}

/// Column names that occur more than once in a header.
pub(crate) fn duplicate_names(columns: &[String]) -> Vec<&str> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for name in columns {
        *counts.entry(name.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_index_positions() {
        let index = HeaderIndex::from_columns(&columns(&["RfcEmisor", "Uuid", "Monto"]));
        assert_eq!(index.len(), 3);
        assert_eq!(index.get("Uuid"), Some(1));
        assert_eq!(index.get("Serie"), None);
    }

    #[test]
    fn test_duplicate_name_last_position_wins() {
        let index = HeaderIndex::from_columns(&columns(&["Monto", "Uuid", "Monto"]));
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("Monto"), Some(2));
        let order: Vec<(&str, usize)> = index.iter().collect();
        assert_eq!(order, vec![("Monto", 2), ("Uuid", 1)]);
    }

    #[test]
    fn test_split_line_trims_line_not_fields() {
        assert_eq!(split_line("  a ~ b~c\r"), vec!["a ", " b", "c"]);
        assert_eq!(split_line("a~~"), vec!["a", "", ""]);
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn test_duplicate_names() {
        let header = columns(&["A", "B", "A", "C", "B"]);
        assert_eq!(duplicate_names(&header), vec!["A", "B"]);
    }
}
