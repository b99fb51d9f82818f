//! Target schema and source-to-target column renaming.
//!
//! The target schema fixes the column order of both report files. The rename
//! table translates the column names of an upstream metadata export into
//! target names; anything it does not know keeps its original name.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Column order of the DIOT third-party operations report (23 fields).
pub const DIOT_COLUMNS: [&str; 23] = [
    "TipoTercero",
    "TipoOperacion",
    "RFCProveedor",
    "NIF",
    "NombreExtranjero",
    "Pais",
    "JurisdiccionFiscal",
    "ValorTotal",
    "IVANoAcreditable",
    "ValorIVA11",
    "IVAPagado11",
    "ValorFronterNorte",
    "IVAFronteraNorte",
    "ValorFronteraSur",
    "IVAFronteraSur",
    "ValorImportacion",
    "IVAImportacion",
    "ValorImportacionExentos",
    "ValorExentosIVA",
    "ValorIVA0",
    "ValorNoIVA",
    "IVARetenidoContribuyente",
    "IVAPagadoGastosGeneral",
];

/// Source column names of the metadata export that carry a target meaning.
pub const DIOT_RENAMES: [(&str, &str); 4] = [
    ("RfcEmisor", "RFCProveedor"),
    ("Uuid", "UUID"),
    ("Monto", "ValorTotal"),
    ("FechaCertificacionSat", "Fecha"),
];

/// Ordered report columns shared by the pipe-delimited and comma-delimited files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetSchema {
    columns: Vec<String>,
}

impl TargetSchema {
    /// Creates a schema from column names in output order.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// The 23-column DIOT layout.
    pub fn diot() -> Self {
        Self::new(DIOT_COLUMNS)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Position of a column in output order.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Column names that appear more than once, in first-seen order.
    pub fn duplicates(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut reported = BTreeSet::new();
        let mut duplicates = Vec::new();
        for column in &self.columns {
            if !seen.insert(column.as_str()) && reported.insert(column.as_str()) {
                duplicates.push(column.clone());
            }
        }
        duplicates
    }
}

/// Mapping from source column name to target column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenameTable {
    entries: BTreeMap<String, String>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames used by the DIOT metadata export.
    pub fn diot() -> Self {
        DIOT_RENAMES.into_iter().collect()
    }

    /// Registers a rename, returning the previous target for `source` if any.
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) -> Option<String> {
        self.entries.insert(source.into(), target.into())
    }

    /// Target name for `name`, or `name` itself when no rename is registered.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map_or(name, String::as_str)
    }

    /// Source names that rename to `target`.
    pub fn sources_for(&self, target: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, t)| t.as_str() == target)
            .map(|(source, _)| source.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, T> FromIterator<(S, T)> for RenameTable
where
    S: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(source, target)| (source.into(), target.into()))
                .collect(),
        }
    }
}
