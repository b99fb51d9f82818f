//! Lockstep writer for the two report formats.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Terminator, Writer, WriterBuilder};
use tracing::debug;

use diot_model::{OutputRow, TargetSchema};

use crate::error::{OutputError, Result};

/// Delimiter of the fixed-format submission file.
pub const TXT_DELIMITER: u8 = b'|';

/// Delimiter of the headered review file.
pub const CSV_DELIMITER: u8 = b',';

/// Paths of the two report files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Headerless pipe-delimited file.
    pub txt: PathBuf,
    /// Comma-delimited file with the schema as first line.
    pub csv: PathBuf,
}

impl OutputPaths {
    /// Derives the CSV path from the TXT path by swapping the extension.
    pub fn from_txt(txt: impl Into<PathBuf>) -> Self {
        let txt = txt.into();
        let csv = csv_path_for(&txt);
        Self { txt, csv }
    }
}

/// `report.txt` -> `report.csv`.
pub fn csv_path_for(txt: &Path) -> PathBuf {
    txt.with_extension("csv")
}

/// Counts reported once both files are flushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub paths: OutputPaths,
    /// Data rows in each file (the CSV header is not counted).
    pub rows: usize,
}

/// Writes every report row to both files in the same order.
///
/// The CSV file gets the schema as header on creation; the TXT file never
/// has a header. Both use `\n` line endings. Files are flushed by
/// [`DualFormatWriter::finish`], and on drop if writing stops early.
pub struct DualFormatWriter {
    paths: OutputPaths,
    txt: Writer<File>,
    csv: Writer<File>,
    width: usize,
    rows: usize,
}

impl DualFormatWriter {
    /// Creates (truncating) both files and writes the CSV header.
    pub fn create(paths: OutputPaths, schema: &TargetSchema) -> Result<Self> {
        if paths.txt == paths.csv {
            return Err(OutputError::SamePath { path: paths.txt });
        }
        let txt = open_sink(&paths.txt, TXT_DELIMITER)?;
        let mut csv = open_sink(&paths.csv, CSV_DELIMITER)?;
        csv.write_record(schema.iter())
            .map_err(|source| OutputError::Write {
                path: paths.csv.clone(),
                source,
            })?;
        debug!(
            txt = %paths.txt.display(),
            csv = %paths.csv.display(),
            columns = schema.len(),
            "report files created"
        );
        Ok(Self {
            paths,
            txt,
            csv,
            width: schema.len(),
            rows: 0,
        })
    }

    /// Appends one row to both files.
    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        if row.len() != self.width {
            return Err(OutputError::RowWidth {
                row: self.rows + 1,
                got: row.len(),
                want: self.width,
            });
        }
        self.txt
            .write_record(row.values())
            .map_err(|source| OutputError::Write {
                path: self.paths.txt.clone(),
                source,
            })?;
        self.csv
            .write_record(row.values())
            .map_err(|source| OutputError::Write {
                path: self.paths.csv.clone(),
                source,
            })?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flushes both files and reports what was written.
    pub fn finish(mut self) -> Result<WriteSummary> {
        self.txt.flush().map_err(|source| OutputError::Flush {
            path: self.paths.txt.clone(),
            source,
        })?;
        self.csv.flush().map_err(|source| OutputError::Flush {
            path: self.paths.csv.clone(),
            source,
        })?;
        debug!(rows = self.rows, "report files flushed");
        Ok(WriteSummary {
            paths: self.paths,
            rows: self.rows,
        })
    }
}

/// Writes all rows to both report files.
pub fn write_report(
    paths: OutputPaths,
    schema: &TargetSchema,
    rows: &[OutputRow],
) -> Result<WriteSummary> {
    let mut writer = DualFormatWriter::create(paths, schema)?;
    for row in rows {
        writer.write_row(row)?;
    }
    writer.finish()
}

fn open_sink(path: &Path, delimiter: u8) -> Result<Writer<File>> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(file))
}
