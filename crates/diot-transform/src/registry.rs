//! Rule registry keyed by target column.

use std::collections::BTreeMap;
use std::fmt;

use diot_model::{RuleSpec, TargetSchema};

use crate::rules::{DerivationRule, rule_from_spec};

/// Derivation rules keyed by the target column they produce.
#[derive(Default)]
pub struct RuleRegistry {
    rules: BTreeMap<String, Box<dyn DerivationRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from declarative specs.
    ///
    /// A later spec for the same column replaces an earlier one; profiles
    /// reject such duplicates before they get here.
    pub fn from_specs(specs: &[RuleSpec]) -> Self {
        let mut registry = Self::new();
        for spec in specs {
            registry.register_boxed(spec.column(), rule_from_spec(spec));
        }
        registry
    }

    /// Registers a rule, returning the one it replaced.
    pub fn register<R>(
        &mut self,
        column: impl Into<String>,
        rule: R,
    ) -> Option<Box<dyn DerivationRule>>
    where
        R: DerivationRule + 'static,
    {
        self.register_boxed(column, Box::new(rule))
    }

    pub fn register_boxed(
        &mut self,
        column: impl Into<String>,
        rule: Box<dyn DerivationRule>,
    ) -> Option<Box<dyn DerivationRule>> {
        self.rules.insert(column.into(), rule)
    }

    pub fn get(&self, column: &str) -> Option<&dyn DerivationRule> {
        self.rules.get(column).map(Box::as_ref)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.rules.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule columns missing from `schema`, sorted.
    pub fn unknown_columns(&self, schema: &TargetSchema) -> Vec<String> {
        self.columns()
            .filter(|column| !schema.contains(column))
            .map(str::to_string)
            .collect()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.rules.iter().map(|(column, rule)| (column, rule.describe())))
            .finish()
    }
}
