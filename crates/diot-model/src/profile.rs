//! Filing profiles: the swappable configuration of a report run.
//!
//! A profile bundles the target schema, the rename table, and the derivation
//! rule specs. The built-in [`FilingProfile::diot`] reproduces the current
//! DIOT layout; a TOML file with the same structure can replace it when the
//! filing format changes.
//!
//! ```toml
//! [profile]
//! schema = "diot.filing-profile"
//! schema_version = 1
//! name = "DIOT"
//!
//! [output]
//! target_columns = ["TipoTercero", "TipoOperacion", "RFCProveedor"]
//!
//! [rename]
//! RfcEmisor = "RFCProveedor"
//!
//! [[rules]]
//! kind = "constant"
//! column = "TipoTercero"
//! value = "04"
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::rules::RuleSpec;
use crate::schema::{RenameTable, TargetSchema};

/// Schema identifier expected in the `[profile]` header.
pub const PROFILE_SCHEMA: &str = "diot.filing-profile";

/// Supported profile layout version.
pub const PROFILE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingProfile {
    pub profile: ProfileHeader,
    pub output: OutputLayout,
    #[serde(default)]
    pub rename: RenameTable,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileHeader {
    pub schema: String,
    pub schema_version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLayout {
    pub target_columns: TargetSchema,
}

impl FilingProfile {
    /// Built-in DIOT profile.
    pub fn diot() -> Self {
        Self {
            profile: ProfileHeader {
                schema: PROFILE_SCHEMA.to_string(),
                schema_version: PROFILE_SCHEMA_VERSION,
                name: "DIOT".to_string(),
                description: Some(
                    "Declaracion Informativa de Operaciones con Terceros".to_string(),
                ),
            },
            output: OutputLayout {
                target_columns: TargetSchema::diot(),
            },
            rename: RenameTable::diot(),
            rules: RuleSpec::diot(),
        }
    }

    /// Reads and validates a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profile: Self = toml::from_str(&contents).map_err(|source| ModelError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        profile.validate()?;
        debug!(
            path = %path.display(),
            name = %profile.profile.name,
            columns = profile.schema().len(),
            rules = profile.rules.len(),
            "loaded filing profile"
        );
        Ok(profile)
    }

    /// Parses and validates a profile from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let profile: Self = toml::from_str(contents)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Renders the profile as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn schema(&self) -> &TargetSchema {
        &self.output.target_columns
    }

    pub fn renames(&self) -> &RenameTable {
        &self.rename
    }

    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    /// Rule registered for a target column, if any.
    pub fn rule_for(&self, column: &str) -> Option<&RuleSpec> {
        self.rules.iter().find(|rule| rule.column() == column)
    }

    /// Checks the structural rules of a profile.
    ///
    /// Whether every rule column belongs to the target schema is checked
    /// when the derivation engine is built from the profile.
    pub fn validate(&self) -> Result<()> {
        if self.profile.schema != PROFILE_SCHEMA {
            return Err(ModelError::invalid(format!(
                "unsupported schema: {}",
                self.profile.schema
            )));
        }
        if self.profile.schema_version != PROFILE_SCHEMA_VERSION {
            return Err(ModelError::invalid(format!(
                "unsupported schema_version: {}",
                self.profile.schema_version
            )));
        }
        let schema = self.schema();
        if schema.is_empty() {
            return Err(ModelError::invalid("target column list is empty"));
        }
        if let Some(blank) = schema.iter().position(|c| c.trim().is_empty()) {
            return Err(ModelError::invalid(format!(
                "target column {} has an empty name",
                blank + 1
            )));
        }
        let duplicates = schema.duplicates();
        if !duplicates.is_empty() {
            return Err(ModelError::invalid(format!(
                "duplicate target columns: {}",
                duplicates.join(", ")
            )));
        }
        let mut ruled = BTreeSet::new();
        for rule in &self.rules {
            if !ruled.insert(rule.column()) {
                return Err(ModelError::invalid(format!(
                    "more than one rule for column {}",
                    rule.column()
                )));
            }
        }
        Ok(())
    }
}

impl Default for FilingProfile {
    fn default() -> Self {
        Self::diot()
    }
}
