//! Derivation engine: named-value view to schema-aligned output row.

use diot_model::{FilingProfile, NamedRow, OutputRow, TargetSchema};
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::registry::RuleRegistry;

/// Produces output rows aligned to a target schema.
///
/// Columns are evaluated in schema order. A column with a rule takes the
/// rule's value; when the working view already holds a value under that
/// column name, it is overwritten with the derived one before the next column
/// is evaluated, so later rules observe earlier derivations. A column with
/// no rule copies the mapped value or stays blank.
#[derive(Debug)]
pub struct DerivationEngine {
    schema: TargetSchema,
    rules: RuleRegistry,
}

impl DerivationEngine {
    /// Creates an engine, refusing rules for columns outside the schema.
    pub fn new(schema: TargetSchema, rules: RuleRegistry) -> Result<Self> {
        let unknown = rules.unknown_columns(&schema);
        if !unknown.is_empty() {
            return Err(TransformError::Configuration { columns: unknown });
        }
        debug!(
            columns = schema.len(),
            rules = rules.len(),
            "derivation engine ready"
        );
        Ok(Self { schema, rules })
    }

    /// Creates an engine from a filing profile's schema and rule specs.
    pub fn from_profile(profile: &FilingProfile) -> Result<Self> {
        Self::new(
            profile.schema().clone(),
            RuleRegistry::from_specs(profile.rules()),
        )
    }

    pub fn schema(&self) -> &TargetSchema {
        &self.schema
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Derives one output row, writing derived values back into `row`.
    pub fn derive(&self, row: &mut NamedRow) -> Result<OutputRow> {
        let mut output = OutputRow::with_capacity(self.schema.len());
        for column in self.schema.iter() {
            let value = match self.rules.get(column) {
                Some(rule) => {
                    let value = rule.compute(row)?;
                    row.replace_existing(column, &value);
                    value
                }
                None => row.get(column).unwrap_or_default().to_string(),
            };
            output.push(value);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ConstantRule;

    fn engine() -> DerivationEngine {
        DerivationEngine::from_profile(&FilingProfile::diot()).unwrap()
    }

    fn row(pairs: &[(&str, &str)]) -> NamedRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_reference_row() {
        let mut named = row(&[("RFCProveedor", "abc123"), ("ValorTotal", "100.60")]);
        let output = engine().derive(&mut named).unwrap();

        assert_eq!(output.len(), 23);
        assert_eq!(output.get(0), Some("04"));
        assert_eq!(output.get(1), Some("03"));
        assert_eq!(output.get(2), Some("ABC123"));
        assert_eq!(output.get(7), Some("101"));
        assert_eq!(output.get(8), Some("16"));
        let blanks = output
            .values()
            .iter()
            .enumerate()
            .filter(|(i, _)| ![0, 1, 2, 7, 8].contains(i))
            .all(|(_, v)| v.is_empty());
        assert!(blanks);
    }

    #[test]
    fn test_later_rules_see_derived_values() {
        let mut named = row(&[("ValorTotal", "9.60")]);
        let output = engine().derive(&mut named).unwrap();

        // ValorTotal rounds to 10 and is written back; 10 * 0.16 = 1.6 -> 2
        assert_eq!(output.get(7), Some("10"));
        assert_eq!(output.get(8), Some("2"));
        assert_eq!(named.get("ValorTotal"), Some("10"));
    }

    #[test]
    fn test_derived_values_not_added_to_view() {
        let mut named = row(&[("Serie", "A")]);
        let output = engine().derive(&mut named).unwrap();

        assert_eq!(output.get(0), Some("04"));
        assert_eq!(output.get(7), Some("0"));
        assert_eq!(output.get(8), Some("0"));
        assert!(!named.contains("TipoTercero"));
        assert_eq!(named.len(), 1);
    }

    #[test]
    fn test_copies_mapped_values() {
        let mut named = row(&[("NIF", "X-1"), ("Pais", "MX")]);
        let output = engine().derive(&mut named).unwrap();
        assert_eq!(output.get(3), Some("X-1"));
        assert_eq!(output.get(5), Some("MX"));
    }

    #[test]
    fn test_numeric_error_surfaces() {
        let mut named = row(&[("ValorTotal", "cien")]);
        let err = engine().derive(&mut named).unwrap_err();
        assert_eq!(
            err,
            TransformError::NumericParse {
                column: "ValorTotal".to_string(),
                value: "cien".to_string(),
            }
        );
    }

    #[test]
    fn test_rule_outside_schema_is_fatal() {
        let mut rules = RuleRegistry::new();
        rules.register(
            "IVA",
            ConstantRule {
                value: "0".to_string(),
            },
        );
        rules.register(
            "TipoTercero",
            ConstantRule {
                value: "04".to_string(),
            },
        );
        let err = DerivationEngine::new(TargetSchema::diot(), rules).unwrap_err();
        assert_eq!(
            err,
            TransformError::Configuration {
                columns: vec!["IVA".to_string()]
            }
        );
    }
}
