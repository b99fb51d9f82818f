//! End-to-end conversion of one metadata export.

use std::path::Path;
use std::time::Instant;

use diot_ingest::{MetadataTable, read_metadata};
use diot_map::{FieldMapper, MappingPlan};
use diot_model::{FilingProfile, OutputRow, TargetSchema};
use diot_output::{OutputPaths, write_report};
use diot_transform::DerivationEngine;
use tracing::{debug, info, info_span, trace, warn};

use crate::checksum::file_sha256;
use crate::error::{ConvertError, Result};
use crate::report::ConversionReport;

/// Placeholder logged instead of taxpayer values.
pub const REDACTED: &str = "[REDACTED]";

/// Switches for a single conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Read, map, and derive every row without writing the report files.
    pub dry_run: bool,
    /// Include row values in trace-level logs.
    pub log_values: bool,
}

impl ConvertOptions {
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_log_values(mut self, log_values: bool) -> Self {
        self.log_values = log_values;
        self
    }
}

/// Field mapper and derivation engine built from one filing profile.
#[derive(Debug)]
pub struct Converter {
    mapper: FieldMapper,
    engine: DerivationEngine,
}

impl Converter {
    /// Validates the profile and builds the engine.
    ///
    /// Runs before any file is opened, so a bad rule set is reported without
    /// touching the input or the output location.
    pub fn new(profile: &FilingProfile) -> Result<Self> {
        profile.validate()?;
        let engine = DerivationEngine::from_profile(profile)?;
        Ok(Self {
            mapper: FieldMapper::new(profile.renames().clone()),
            engine,
        })
    }

    /// Converter for the built-in DIOT profile.
    pub fn diot() -> Result<Self> {
        Self::new(&FilingProfile::diot())
    }

    pub fn schema(&self) -> &TargetSchema {
        self.engine.schema()
    }

    pub fn mapper(&self) -> &FieldMapper {
        &self.mapper
    }

    pub fn engine(&self) -> &DerivationEngine {
        &self.engine
    }

    /// Maps and derives every row of `table`.
    ///
    /// Stops at the first row that cannot be derived.
    pub fn derive_rows(
        &self,
        table: &MetadataTable,
        options: &ConvertOptions,
    ) -> Result<Vec<OutputRow>> {
        let mut rows = Vec::with_capacity(table.row_count());
        for (idx, raw) in table.rows.iter().enumerate() {
            let row = idx + 1;
            let mut named = self.mapper.map_row(&table.index, raw);
            let output = self
                .engine
                .derive(&mut named)
                .map_err(|source| ConvertError::Derivation { row, source })?;
            if options.log_values {
                trace!(row, values = %output.values().join("|"), "row derived");
            } else {
                trace!(row, values = REDACTED, "row derived");
            }
            rows.push(output);
        }
        Ok(rows)
    }

    /// Converts `input` into `txt_output` and its CSV sibling.
    ///
    /// Every row is derived before either file is created, so a failing
    /// input leaves the output location untouched.
    pub fn convert(
        &self,
        input: &Path,
        txt_output: &Path,
        options: &ConvertOptions,
    ) -> Result<ConversionReport> {
        let span = info_span!("convert", input = %input.display());
        let _guard = span.enter();
        let start = Instant::now();

        let table = read_metadata(input)?;
        info!(
            columns = table.column_count(),
            rows = table.row_count(),
            "metadata read"
        );

        log_plan(&self.mapper.plan(&table.index));

        let rows = self.derive_rows(&table, options)?;
        info!(rows = rows.len(), "rows derived");

        let paths = OutputPaths::from_txt(txt_output);
        let mut report = ConversionReport {
            input: input.to_path_buf(),
            txt_output: paths.txt.clone(),
            csv_output: paths.csv.clone(),
            input_columns: table.column_count(),
            rows: rows.len(),
            txt_sha256: None,
            csv_sha256: None,
            dry_run: options.dry_run,
        };

        if options.dry_run {
            info!(
                rows = report.rows,
                duration_ms = start.elapsed().as_millis(),
                "dry run complete, nothing written"
            );
            return Ok(report);
        }

        let summary = write_report(paths, self.schema(), &rows)?;
        report.txt_sha256 = Some(file_sha256(&summary.paths.txt)?);
        report.csv_sha256 = Some(file_sha256(&summary.paths.csv)?);
        info!(
            txt = %summary.paths.txt.display(),
            csv = %summary.paths.csv.display(),
            rows = summary.rows,
            duration_ms = start.elapsed().as_millis(),
            "conversion complete"
        );
        Ok(report)
    }
}

/// Converts `input` with the built-in DIOT profile and default options.
pub fn transform(input: &Path, txt_output: &Path) -> Result<ConversionReport> {
    Converter::diot()?.convert(input, txt_output, &ConvertOptions::default())
}

/// Converts `input` with a caller-supplied profile.
pub fn convert(
    input: &Path,
    txt_output: &Path,
    profile: &FilingProfile,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    Converter::new(profile)?.convert(input, txt_output, options)
}

fn log_plan(plan: &MappingPlan) {
    for renamed in &plan.renamed {
        debug!(source = %renamed.source, target = %renamed.target, "column renamed");
    }
    for (target, sources) in &plan.collisions {
        warn!(
            target = %target,
            sources = %sources.join(", "),
            "several input columns map to one name, the last one wins"
        );
    }
    debug!(
        renamed = plan.renamed.len(),
        passthrough = plan.passthrough.len(),
        "mapping planned"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use diot_ingest::parse_metadata;
    use diot_model::RuleSpec;

    fn table(text: &str) -> MetadataTable {
        parse_metadata(text.as_bytes(), Path::new("metadata.txt")).unwrap()
    }

    #[test]
    fn test_derive_rows() {
        let converter = Converter::diot().unwrap();
        let rows = converter
            .derive_rows(
                &table("RfcEmisor~Monto\nabc123~100.60\nxyz9~9.60\n"),
                &ConvertOptions::default(),
            )
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(2), Some("ABC123"));
        assert_eq!(rows[1].get(7), Some("10"));
        assert_eq!(rows[1].get(8), Some("2"));
    }

    #[test]
    fn test_derivation_error_carries_row_number() {
        let converter = Converter::diot().unwrap();
        let err = converter
            .derive_rows(
                &table("Monto\n1.00\n2.00\nabc\n"),
                &ConvertOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, ConvertError::Derivation { row: 3, .. }));
    }

    #[test]
    fn test_rule_outside_schema_rejected_on_construction() {
        let mut profile = FilingProfile::diot();
        profile.rules.push(RuleSpec::constant("IVA", "0"));
        let err = Converter::new(&profile).unwrap_err();
        assert!(matches!(err, ConvertError::Configuration(_)));
    }

    #[test]
    fn test_options_builder() {
        let options = ConvertOptions::default()
            .with_dry_run(true)
            .with_log_values(true);
        assert!(options.dry_run);
        assert!(options.log_values);
    }
}
