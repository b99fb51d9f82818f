//! Derivation rules.
//!
//! A rule computes the value of one target column from the named-value view
//! of a row. The built-in rules cover the declarative [`RuleSpec`] kinds;
//! any `Fn(&NamedRow) -> Result<String>` can be registered as a custom rule.

use diot_model::{NamedRow, RuleSpec};

use crate::error::Result;
use crate::normalization::numeric::{parse_amount, parse_truncated};
use crate::normalization::rounding::round_numeric;

/// Computes one target column from a row.
pub trait DerivationRule: Send + Sync {
    fn compute(&self, row: &NamedRow) -> Result<String>;

    /// Short human-readable description, used in schema listings.
    fn describe(&self) -> String {
        "custom rule".to_string()
    }
}

impl<F> DerivationRule for F
where
    F: Fn(&NamedRow) -> Result<String> + Send + Sync,
{
    fn compute(&self, row: &NamedRow) -> Result<String> {
        self(row)
    }
}

/// Fixed value for every row.
#[derive(Debug, Clone)]
pub struct ConstantRule {
    pub value: String,
}

impl DerivationRule for ConstantRule {
    fn compute(&self, _row: &NamedRow) -> Result<String> {
        Ok(self.value.clone())
    }

    fn describe(&self) -> String {
        format!("constant \"{}\"", self.value)
    }
}

/// Upper-cased source value; blank when the source is absent.
#[derive(Debug, Clone)]
pub struct UppercaseRule {
    pub source: String,
}

impl DerivationRule for UppercaseRule {
    fn compute(&self, row: &NamedRow) -> Result<String> {
        Ok(row.get(&self.source).unwrap_or_default().to_uppercase())
    }

    fn describe(&self) -> String {
        format!("upper-case of {}", self.source)
    }
}

/// Source amount passed through the report rounding rule.
///
/// An absent source counts as zero; a present but non-numeric one is an error.
#[derive(Debug, Clone)]
pub struct RoundedAmountRule {
    pub source: String,
}

impl DerivationRule for RoundedAmountRule {
    fn compute(&self, row: &NamedRow) -> Result<String> {
        let amount = parse_amount(&self.source, row.get(&self.source).unwrap_or("0"))?;
        round_numeric(amount)
    }

    fn describe(&self) -> String {
        format!("rounded amount of {}", self.source)
    }
}

/// Integer part of the source amount times `rate`, then rounded.
///
/// Truncation happens before the multiplication. When the source column is
/// itself derived earlier in schema order, the rule sees the derived value.
#[derive(Debug, Clone)]
pub struct TruncatedRateRule {
    pub source: String,
    pub rate: f64,
}

impl DerivationRule for TruncatedRateRule {
    fn compute(&self, row: &NamedRow) -> Result<String> {
        let base = parse_truncated(&self.source, row.get(&self.source).unwrap_or("0"))?;
        round_numeric(base * self.rate)
    }

    fn describe(&self) -> String {
        format!("rounded int({}) x {}", self.source, self.rate)
    }
}

/// Builds the executable rule for a declarative spec.
pub fn rule_from_spec(spec: &RuleSpec) -> Box<dyn DerivationRule> {
    match spec {
        RuleSpec::Constant { value, .. } => Box::new(ConstantRule {
            value: value.clone(),
        }),
        RuleSpec::Uppercase { source, .. } => Box::new(UppercaseRule {
            source: source.clone(),
        }),
        RuleSpec::RoundedAmount { source, .. } => Box::new(RoundedAmountRule {
            source: source.clone(),
        }),
        RuleSpec::TruncatedRate { source, rate, .. } => Box::new(TruncatedRateRule {
            source: source.clone(),
            rate: *rate,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;

    fn row(pairs: &[(&str, &str)]) -> NamedRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_constant() {
        let rule = ConstantRule {
            value: "04".to_string(),
        };
        assert_eq!(rule.compute(&NamedRow::new()).unwrap(), "04");
    }

    #[test]
    fn test_uppercase() {
        let rule = UppercaseRule {
            source: "RFCProveedor".to_string(),
        };
        assert_eq!(
            rule.compute(&row(&[("RFCProveedor", "abc123")])).unwrap(),
            "ABC123"
        );
        assert_eq!(rule.compute(&NamedRow::new()).unwrap(), "");
    }

    #[test]
    fn test_rounded_amount() {
        let rule = RoundedAmountRule {
            source: "ValorTotal".to_string(),
        };
        assert_eq!(rule.compute(&row(&[("ValorTotal", "100.60")])).unwrap(), "101");
        assert_eq!(rule.compute(&NamedRow::new()).unwrap(), "0");
        assert_eq!(
            rule.compute(&row(&[("ValorTotal", "")])),
            Err(TransformError::NumericParse {
                column: "ValorTotal".to_string(),
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_truncated_rate_truncates_before_multiplying() {
        let rule = TruncatedRateRule {
            source: "ValorTotal".to_string(),
            rate: 0.16,
        };
        // int(9.60) = 9, 9 * 0.16 = 1.44
        assert_eq!(rule.compute(&row(&[("ValorTotal", "9.60")])).unwrap(), "1");
        assert_eq!(rule.compute(&row(&[("ValorTotal", "101")])).unwrap(), "16");
        assert_eq!(rule.compute(&NamedRow::new()).unwrap(), "0");
    }

    #[test]
    fn test_closure_rule() {
        let rule = |row: &NamedRow| -> Result<String> {
            Ok(row.get("Fecha").unwrap_or_default().replace('-', ""))
        };
        assert_eq!(
            rule.compute(&row(&[("Fecha", "2026-01-15")])).unwrap(),
            "20260115"
        );
        assert_eq!(rule.describe(), "custom rule");
    }

    #[test]
    fn test_rule_from_spec_describes_itself() {
        for spec in RuleSpec::diot() {
            assert_eq!(rule_from_spec(&spec).describe(), spec.to_string());
        }
    }
}
