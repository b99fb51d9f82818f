//! Declarative derivation rule specifications.
//!
//! A [`RuleSpec`] names a target column and the kind of value computed for
//! it. Specs are plain data so that a filing profile can carry them in TOML;
//! the transform crate turns them into executable rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// VAT rate applied to operation totals.
pub const DIOT_VAT_RATE: f64 = 0.16;

/// How a target column is computed from the named-value view of a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSpec {
    /// Fixed text regardless of the row.
    Constant { column: String, value: String },

    /// Upper-cased value of `source`, blank when absent.
    Uppercase { column: String, source: String },

    /// Decimal value of `source` passed through the report rounding rule.
    /// An absent source counts as zero.
    RoundedAmount { column: String, source: String },

    /// Integer part of `source` multiplied by `rate`, then rounded.
    /// An absent source counts as zero.
    TruncatedRate {
        column: String,
        source: String,
        rate: f64,
    },
}

impl RuleSpec {
    pub fn constant(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Constant {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn uppercase(column: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Uppercase {
            column: column.into(),
            source: source.into(),
        }
    }

    pub fn rounded_amount(column: impl Into<String>, source: impl Into<String>) -> Self {
        Self::RoundedAmount {
            column: column.into(),
            source: source.into(),
        }
    }

    pub fn truncated_rate(column: impl Into<String>, source: impl Into<String>, rate: f64) -> Self {
        Self::TruncatedRate {
            column: column.into(),
            source: source.into(),
            rate,
        }
    }

    /// Target column the rule produces.
    pub fn column(&self) -> &str {
        match self {
            Self::Constant { column, .. }
            | Self::Uppercase { column, .. }
            | Self::RoundedAmount { column, .. }
            | Self::TruncatedRate { column, .. } => column,
        }
    }

    /// Rules of the DIOT report, keyed by target column.
    ///
    /// `TipoTercero` 04 is a national third party, `TipoOperacion` 03 is
    /// professional services.
    pub fn diot() -> Vec<Self> {
        vec![
            Self::constant("TipoTercero", "04"),
            Self::constant("TipoOperacion", "03"),
            Self::uppercase("RFCProveedor", "RFCProveedor"),
            Self::rounded_amount("ValorTotal", "ValorTotal"),
            Self::truncated_rate("IVANoAcreditable", "ValorTotal", DIOT_VAT_RATE),
        ]
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant { value, .. } => write!(f, "constant \"{value}\""),
            Self::Uppercase { source, .. } => write!(f, "upper-case of {source}"),
            Self::RoundedAmount { source, .. } => write!(f, "rounded amount of {source}"),
            Self::TruncatedRate { source, rate, .. } => {
                write!(f, "rounded int({source}) x {rate}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diot_rule_columns() {
        let specs = RuleSpec::diot();
        let columns: Vec<&str> = specs.iter().map(RuleSpec::column).collect();
        assert_eq!(
            columns,
            vec![
                "TipoTercero",
                "TipoOperacion",
                "RFCProveedor",
                "ValorTotal",
                "IVANoAcreditable"
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RuleSpec::constant("TipoTercero", "04").to_string(),
            "constant \"04\""
        );
        assert_eq!(
            RuleSpec::truncated_rate("IVANoAcreditable", "ValorTotal", 0.16).to_string(),
            "rounded int(ValorTotal) x 0.16"
        );
    }
}
